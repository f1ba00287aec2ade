//! Error handling module
//!
//! Defines dispatcher error types with their process exit codes

pub mod types;

pub use types::*;
