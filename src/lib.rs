// file: src/lib.rs
// version: 0.3.0
// guid: 4f1c8a2e-9b7d-4e06-a3c5-1d2e9f0b6a71

//! # Argo
//!
//! Another Robocopy Organiser. Collects backup options into a single
//! [`backup::BackupRequest`], composes the matching `robocopy` argument
//! vector, and hands it to the OS process launcher. Optionally schedules
//! a delayed shutdown once the copy returns, and can check a remote page
//! for a newer published version.
//!
//! Argo never implements copy semantics itself and never interprets
//! robocopy's output; it only forwards flags.

pub mod backup;
pub mod cli;
pub mod error;
pub mod logging;
pub mod update;
pub mod utils;

pub use error::{ArgoError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
