// file: src/backup/composer.rs
// version: 0.3.0
// guid: 3e4f5a6b-7c8d-9e0f-1a2b-3c4d5e6f7a8b

//! Robocopy command composition
//!
//! Pure transformation from a [`BackupRequest`] into the ordered argument
//! vector handed to the process launcher. Token order is fixed:
//! source and destination first, then option flags, then exclusion pairs
//! (files, folders, file types), then the size cap. Absent options
//! contribute no tokens.

use crate::backup::request::{normalize_exclusions, BackupRequest};
use crate::Result;
use serde::Serialize;
use std::path::Path;

/// The external tool this front-end drives
pub const ROBOCOPY_PROGRAM: &str = "robocopy";

/// Mirror the source, propagating deletions to the destination
pub const FLAG_MIRROR: &str = "/mir";
/// Retry count zero
pub const FLAG_RETRIES_ZERO: &str = "/r:0";
/// Retry wait zero
pub const FLAG_WAIT_ZERO: &str = "/w:0";
/// Exclusion marker for files and file-type patterns
pub const FLAG_EXCLUDE_FILE: &str = "/xf";
/// Exclusion marker for directories
pub const FLAG_EXCLUDE_DIR: &str = "/xd";

/// A fully composed command: program name plus ordered arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ComposedCommand {
    /// Render the command as a single display string
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Compose the robocopy argument vector for a backup request
///
/// `log_path` is the file the `/log+:` flag appends to when logging is
/// enabled. Composition never mutates the request and performs no IO.
pub fn compose(request: &BackupRequest, log_path: &Path) -> Result<ComposedCommand> {
    request.validate()?;

    let mut args = vec![request.source.clone(), request.destination.clone()];

    if request.mirror {
        args.push(FLAG_MIRROR.to_string());
    }
    // The verbose toggle intentionally contributes no flag.
    if request.logging {
        args.push(format!("/log+:{}", log_path.display()));
    }
    if request.retry_immediately {
        args.push(FLAG_RETRIES_ZERO.to_string());
        args.push(FLAG_WAIT_ZERO.to_string());
    }

    for file in normalize_exclusions(request.excluded_files.clone()) {
        args.push(FLAG_EXCLUDE_FILE.to_string());
        args.push(file);
    }
    for folder in normalize_exclusions(request.excluded_folders.clone()) {
        args.push(FLAG_EXCLUDE_DIR.to_string());
        args.push(folder);
    }
    for file_type in normalize_exclusions(request.excluded_file_types.clone()) {
        args.push(FLAG_EXCLUDE_FILE.to_string());
        args.push(file_type);
    }

    if !request.max_file_size.is_empty() {
        args.push(format!("/max:{}", request.max_file_size));
    }

    Ok(ComposedCommand {
        program: ROBOCOPY_PROGRAM.to_string(),
        args,
    })
}
