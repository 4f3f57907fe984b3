// file: src/cli/mod.rs
// version: 0.3.0
// guid: 0e1f2a3b-4c5d-6e7f-8a9b-0c1d2e3f4a5b

//! Command line interface for Argo

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
