//! Command-line interface: clap definitions and command handlers.

pub mod commands;
pub mod handlers;

pub use commands::{AuthorCommand, Cli, Commands, PostCommand};
