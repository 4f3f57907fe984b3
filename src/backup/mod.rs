// file: src/backup/mod.rs
// version: 0.3.0
// guid: 2c3d4e5f-6a7b-8c9d-0e1f-2a3b4c5d6e7f

//! Backup request model, robocopy command composition, and execution

pub mod composer;
pub mod request;
pub mod runner;

pub use composer::{compose, ComposedCommand};
pub use request::BackupRequest;
pub use runner::{BackupOutcome, BackupRunner};
