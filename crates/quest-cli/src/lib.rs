//! Detective Quest CLI library.
//!
//! This library provides the core functionality for the Detective Quest
//! command-line game, including settings management, command execution, the
//! interactive loop and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod script;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
