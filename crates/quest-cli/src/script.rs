//! Non-interactive play: run commands from a script.
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//! Turns follow the same rules as the REPL, so a script replays exactly what
//! typing the same commands would do.

use crate::commands::{self, Flow};
use crate::error::Result;
use crate::output::Formatter;
use quest_engine::Expedition;
use std::io::Write;

/// Run every command in `script`, writing output to `out`.
///
/// Unknown commands are reported inline and the script carries on, as at the
/// prompt. Stops early at an exit command.
pub fn run_script<W: Write>(
    script: &str,
    expedition: &mut Expedition,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", formatter.room(expedition.current(), &expedition.exits()))?;

    for (number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        expedition.begin_turn();
        tracing::debug!(line = number + 1, command = line, "Script command");

        let step = commands::parse_action(line)
            .and_then(|action| commands::execute(action, expedition, formatter));

        match step {
            Ok(step) => {
                writeln!(out, "{}", step.output)?;
                if step.flow == Flow::Exit {
                    break;
                }
            }
            Err(e) => writeln!(out, "{}", formatter.error(&format!("line {}: {}", number + 1, e)))?,
        }
    }

    Ok(())
}
