// file: src/utils/system.rs
// version: 0.3.0
// guid: 6b7c8d9e-0f1a-2b3c-4d5e-6f7a8b9c0d1e

//! System utility functions

use crate::{ArgoError, Result};
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};

/// Program used to display the log file
const LOG_VIEWER: &str = "notepad";

/// Seconds between the shutdown request and the actual power-off
const SHUTDOWN_DELAY_SECS: &str = "15";

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Path of the Argo log file under the user's home directory
    pub fn log_file_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join("Argo.log"))
            .ok_or_else(|| ArgoError::system("Could not determine home directory".to_string()))
    }

    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Open the Argo log file in the system text viewer
    ///
    /// Blocks until the viewer exits; the exit code is not inspected.
    pub async fn open_log() -> Result<()> {
        let log = Self::log_file_path()?;
        debug!("Opening log file: {}", log.display());

        let _ = Command::new(LOG_VIEWER).arg(&log).status().await?;
        Ok(())
    }

    /// Request a delayed machine power-off
    ///
    /// Fire and forget: the request is handed to the OS and the result is
    /// not inspected.
    pub async fn schedule_shutdown() -> Result<()> {
        info!("Scheduling shutdown in {} seconds", SHUTDOWN_DELAY_SECS);

        let _ = Command::new("shutdown")
            .args(["/s", "/t", SHUTDOWN_DELAY_SECS])
            .status()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_is_under_home() {
        // Act
        let path = SystemUtils::log_file_path().unwrap();

        // Assert
        assert!(path.ends_with("Argo.log"));
        assert!(path.starts_with(dirs::home_dir().unwrap()));
    }

    #[test]
    fn test_command_exists() {
        // A command that should not exist anywhere
        assert!(!SystemUtils::command_exists("nonexistent-command-12345"));
    }
}
