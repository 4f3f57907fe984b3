// file: src/backup/runner.rs
// version: 0.3.0
// guid: 4d5e6f7a-8b9c-0d1e-2f3a-4b5c6d7e8f9a

//! Backup execution
//!
//! Runs the composed robocopy command under an owned child-process handle
//! and waits for it to finish. Ctrl+C kills the child and reports an
//! interrupted outcome instead of tearing down the whole application.
//! Robocopy's exit code is logged but never interpreted.

use crate::backup::composer::compose;
use crate::backup::request::BackupRequest;
use crate::utils::system::SystemUtils;
use crate::{ArgoError, Result};
use std::process::Stdio;
use tokio::process::Command;
use tokio::signal;
use tracing::{info, warn};

/// How a backup run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    /// Robocopy ran to completion with the given exit code
    Completed { exit_code: Option<i32> },
    /// The user interrupted the run and the child was killed
    Interrupted,
}

/// Executes backup requests
pub struct BackupRunner;

impl BackupRunner {
    /// Create a new runner
    pub fn new() -> Self {
        Self
    }

    /// Compose and run one backup request, consuming it
    ///
    /// Blocks until robocopy exits or the user interrupts. When the run
    /// completes and the request asked for it, a delayed shutdown is
    /// scheduled before returning.
    pub async fn run(&self, request: BackupRequest) -> Result<BackupOutcome> {
        if request.verbose {
            warn!("The verbose option is accepted but currently has no effect");
        }

        let log_path = SystemUtils::log_file_path()?;
        let command = compose(&request, &log_path)?;

        info!("Running: {}", command.display());

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                ArgoError::execution(format!("Failed to launch {}: {}", command.program, e))
            })?;

        let outcome = tokio::select! {
            status = child.wait() => {
                let status = status?;
                info!("{} exited with code {:?}", command.program, status.code());
                BackupOutcome::Completed { exit_code: status.code() }
            }
            _ = signal::ctrl_c() => {
                warn!("Interrupted, stopping the running copy...");
                child.kill().await?;
                BackupOutcome::Interrupted
            }
        };

        if request.shutdown_after {
            match outcome {
                BackupOutcome::Completed { .. } => SystemUtils::schedule_shutdown().await?,
                BackupOutcome::Interrupted => {
                    warn!("Skipping scheduled shutdown after interrupted backup")
                }
            }
        }

        Ok(outcome)
    }
}

impl Default for BackupRunner {
    fn default() -> Self {
        Self::new()
    }
}
