//! CLI Adapter
//!
//! Command-line interface, parsed with clap derive macros.

mod commands;

pub use commands::{CliApp, CloseCmd, Command};
