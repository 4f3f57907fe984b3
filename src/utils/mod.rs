// file: src/utils/mod.rs
// version: 0.3.0
// guid: 5a6b7c8d-9e0f-1a2b-3c4d-5e6f7a8b9c0d

//! Utility modules for system operations

pub mod system;

pub use system::SystemUtils;
