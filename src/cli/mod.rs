//! Command-line interface module
//!
//! Handles top-level argument parsing and the static help texts

pub mod args;
pub mod help;

pub use args::*;
