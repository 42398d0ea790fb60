//! Command implementations.
//!
//! Every command works on the running [`Expedition`] and returns the text to
//! show; the REPL and the script runner decide where that text goes.

pub mod clues;
pub mod map;
pub mod navigate;
pub mod suspects;

pub use self::clues::execute_clues;
pub use self::map::execute_map;
pub use self::navigate::{execute_move, execute_where};
pub use self::suspects::execute_suspects;

use crate::error::{CliError, Result};
use crate::output::Formatter;
use quest_domain::Direction;
use quest_engine::Expedition;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move to a child room
    Move(Direction),
    /// Show collected clues
    Clues,
    /// Show suspects and the leader
    Suspects,
    /// Show the location tree
    Map,
    /// Describe the current room
    Where,
    /// Show available commands
    Help,
    /// Leave the mansion
    Exit,
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Stop the session
    Exit,
}

/// Result of executing one command.
#[derive(Debug, Clone)]
pub struct Step {
    /// Text to show the player
    pub output: String,
    /// What the loop does next
    pub flow: Flow,
}

impl Step {
    fn show(output: String) -> Self {
        Self {
            output,
            flow: Flow::Continue,
        }
    }
}

/// Parse one input line.
///
/// Accepts the single-letter keys as well as English and
/// Portuguese words, case-insensitively.
pub fn parse_action(line: &str) -> Result<Action> {
    let word = line.trim().to_lowercase();

    match word.as_str() {
        "e" | "left" | "esquerda" => Ok(Action::Move(Direction::Left)),
        "d" | "right" | "direita" => Ok(Action::Move(Direction::Right)),
        "p" | "clues" | "pistas" => Ok(Action::Clues),
        "h" | "suspects" | "suspeitos" => Ok(Action::Suspects),
        "m" | "map" | "mapa" => Ok(Action::Map),
        "where" | "look" => Ok(Action::Where),
        "help" | "?" => Ok(Action::Help),
        "s" | "exit" | "quit" | "sair" => Ok(Action::Exit),
        "" => Err(CliError::InvalidInput("Empty command".to_string())),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            line.trim()
        ))),
    }
}

/// Execute a parsed command against the expedition.
pub fn execute(action: Action, expedition: &mut Expedition, formatter: &Formatter) -> Result<Step> {
    let output = match action {
        Action::Move(direction) => execute_move(direction, expedition, formatter),
        Action::Clues => execute_clues(expedition, formatter)?,
        Action::Suspects => execute_suspects(expedition, formatter)?,
        Action::Map => execute_map(expedition, formatter)?,
        Action::Where => execute_where(expedition, formatter),
        Action::Help => help_text(formatter),
        Action::Exit => {
            return Ok(Step {
                output: formatter.info("Leaving the mansion..."),
                flow: Flow::Exit,
            });
        }
    };

    Ok(Step::show(output))
}

/// Text listing the available commands.
pub fn help_text(formatter: &Formatter) -> String {
    [
        formatter.info("Available commands:"),
        String::new(),
        "  e, left, esquerda        - Go to the room on the left".to_string(),
        "  d, right, direita        - Go to the room on the right".to_string(),
        "  p, clues, pistas         - List clues in alphabetical order".to_string(),
        "  h, suspects, suspeitos   - List suspects and the most likely one".to_string(),
        "  m, map, mapa             - Show the mansion map".to_string(),
        "  where, look              - Describe the current room".to_string(),
        "  help, ?                  - Show this help".to_string(),
        "  s, exit, quit, sair      - Leave the mansion".to_string(),
    ]
    .join("\n")
}
