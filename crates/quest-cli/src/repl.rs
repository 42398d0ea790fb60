//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands::{self, Flow};
use crate::config::{Config, Settings};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use quest_engine::Expedition;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(
    expedition: &mut Expedition,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", formatter.info("Detective Quest - Type 'help' for commands, 'exit' to quit"));
    println!();
    println!("{}", formatter.room(expedition.current(), &expedition.exits()));

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut new_turn = true;

    loop {
        if new_turn {
            let found = expedition.begin_turn();
            if found > 0 {
                tracing::debug!(found, room = expedition.current().name(), "Room searched again");
            }
            new_turn = false;
        }

        let prompt = format!("{}> ", expedition.current().name());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();
                new_turn = true;

                match commands::parse_action(line) {
                    Ok(action) => match commands::execute(action, expedition, formatter) {
                        Ok(step) => {
                            println!("{}", step.output);
                            if step.flow == Flow::Exit {
                                break;
                            }
                        }
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}
