//! Built-in subcommand handlers
//!
//! The heavy subsystems live in separate programs reached through
//! `ExternalHandler`; `swim` is answered in-process.

pub mod external;
pub mod swim;

pub use external::ExternalHandler;
pub use swim::SwimHandler;
