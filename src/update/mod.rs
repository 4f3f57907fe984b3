// file: src/update/mod.rs
// version: 0.3.0
// guid: 8c9d0e1f-2a3b-4c5d-6e7f-8a9b0c1d2e3f

//! Update check against the published release page

pub mod checker;

pub use checker::{UpdateChecker, UpdateOutcome};
