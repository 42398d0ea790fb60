//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Detective Quest - explore the mansion, collect clues, name the culprit.
#[derive(Debug, Parser)]
#[command(name = "detective-quest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// World description (TOML); defaults to the built-in mansion
    #[arg(short, long, global = true, env = "DETECTIVE_QUEST_WORLD")]
    pub world: Option<PathBuf>,

    /// When rooms are searched for evidence
    #[arg(long, value_enum, global = true)]
    pub search: Option<SearchArg>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// Search policy options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SearchArg {
    /// Search the current room at the start of every turn
    EveryTurn,
    /// Search a room only when entering it
    OnArrival,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Explore the world interactively (default)
    Play(PlayArgs),

    /// Print the location tree
    Map,

    /// Print the active world description as TOML
    World,
}

/// Arguments for the play command.
#[derive(Debug, Default, Parser)]
pub struct PlayArgs {
    /// Run newline-separated commands from a file instead of prompting
    #[arg(short, long)]
    pub script: Option<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<SearchArg> for quest_engine::SearchPolicy {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::EveryTurn => quest_engine::SearchPolicy::EveryTurn,
            SearchArg::OnArrival => quest_engine::SearchPolicy::OnArrival,
        }
    }
}
