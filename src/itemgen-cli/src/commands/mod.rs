//! Command handlers for itemgen CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod flatten;
pub mod generate;
pub mod list;
pub mod preview;
