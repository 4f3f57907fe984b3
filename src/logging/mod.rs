// file: src/logging/mod.rs
// version: 0.3.0
// guid: 1a2b3c4d-5e6f-7081-92a3-b4c5d6e7f809

//! Logging system for Argo

pub mod logger;

pub use logger::init_logger;
