//! Detective Quest - explore a mansion, collect clues and find the culprit.

use clap::Parser;
use quest_cli::cli::PlayArgs;
use quest_cli::{repl, script, Cli, Command, Config, Formatter};
use quest_engine::{Expedition, WorldConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> quest_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => load_user_config(),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let world_config = match cli.world.as_ref().or(config.world.as_ref()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading world");
            WorldConfig::from_file(path)?
        }
        None => WorldConfig::mansion(),
    };

    // Fails fast on a malformed world, before any navigation
    let world = world_config.build()?;

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => {
            let policy = cli.search.map(Into::into).unwrap_or(config.settings.search);
            let mut expedition = Expedition::with_policy(world, policy);

            match args.script {
                Some(path) => {
                    let contents = std::fs::read_to_string(&path)?;
                    let stdout = std::io::stdout();
                    script::run_script(&contents, &mut expedition, &formatter, &mut stdout.lock())?;
                }
                None => {
                    repl::run_repl(&mut expedition, &config.settings, &formatter)?;
                }
            }
        }
        Command::Map => {
            println!("{}", formatter.format_map(&world.graph, None)?);
        }
        Command::World => {
            println!("{}", world_config.to_toml_string()?);
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Load `~/.detective-quest/config.toml`, writing defaults on first run.
fn load_user_config() -> Config {
    let path = match Config::path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("{}; using default settings", e);
            return Config::default();
        }
    };

    if !path.exists() {
        let config = Config::default();
        if let Err(e) = config.save_to(&path) {
            tracing::warn!(path = %path.display(), "Could not write default settings: {}", e);
        }
        return config;
    }

    Config::load().unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "Ignoring unreadable settings: {}", e);
        Config::default()
    })
}
