// file: src/backup/request.rs
// version: 0.3.0
// guid: 7b8c9d0e-1f2a-3b4c-5d6e-7f8a9b0c1d2e

//! Backup request model
//!
//! A [`BackupRequest`] captures every user-selected option for one
//! invocation of robocopy. The front-end populates it incrementally with
//! the discrete setters below and the request is then consumed by value,
//! so no state is shared between input callbacks and execution.

use crate::{ArgoError, Result};

/// All user-selected options for a single robocopy invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupRequest {
    /// Directory tree to copy from
    pub source: String,
    /// Directory tree to copy to
    pub destination: String,
    /// Make the destination an exact mirror of the source, deletions included
    pub mirror: bool,
    /// No effect on the composed command. The original front-end exposed a
    /// verbose tickbox that never produced a flag; the toggle is kept in
    /// the model so the surface stays the same, and its no-op status is
    /// reported at warn level instead of being silently dropped.
    pub verbose: bool,
    /// Append robocopy's run output to the Argo log file
    pub logging: bool,
    /// Disable robocopy's default retry-on-failure behaviour (/r:0 /w:0)
    pub retry_immediately: bool,
    /// Power the machine off 15 seconds after robocopy returns
    pub shutdown_after: bool,
    /// Individual files excluded from the copy, in selection order
    pub excluded_files: Vec<String>,
    /// Individual folders (and their subtrees) excluded, in selection order
    pub excluded_folders: Vec<String>,
    /// File-type tokens (e.g. extensions) excluded, in input order
    pub excluded_file_types: Vec<String>,
    /// When non-empty, files larger than this many bytes are excluded
    pub max_file_size: String,
}

impl BackupRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backup source (the directory to be backed up)
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Set the backup destination
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// Exclude an individual file from being backed up
    pub fn exclude_file(&mut self, path: impl Into<String>) {
        self.excluded_files.push(path.into());
    }

    /// Exclude an individual folder from being backed up
    pub fn exclude_folder(&mut self, path: impl Into<String>) {
        self.excluded_folders.push(path.into());
    }

    /// Parse the raw comma-separated file-type field into exclusion tokens
    ///
    /// The comma is the sole separator and whitespace is not trimmed, so
    /// `"mp4, mp3"` yields `["mp4", " mp3"]`. An empty field yields an
    /// empty list rather than a single empty token.
    pub fn set_file_types_raw(&mut self, raw: &str) {
        self.excluded_file_types = parse_file_types(raw);
    }

    /// Validate that the request can be composed
    pub fn validate(&self) -> Result<()> {
        if self.source.is_empty() {
            return Err(ArgoError::validation("backup source is not set"));
        }
        if self.destination.is_empty() {
            return Err(ArgoError::validation("backup destination is not set"));
        }
        Ok(())
    }
}

/// Split a raw comma-separated file-type field into individual tokens
pub fn parse_file_types(raw: &str) -> Vec<String> {
    let parts: Vec<String> = raw.split(',').map(str::to_string).collect();
    normalize_exclusions(parts)
}

/// Treat a list whose only element is the empty string as "no exclusions"
pub fn normalize_exclusions(list: Vec<String>) -> Vec<String> {
    if list.len() == 1 && list[0].is_empty() {
        Vec::new()
    } else {
        list
    }
}
