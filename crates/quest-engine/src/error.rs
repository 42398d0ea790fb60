//! Error types for engine operations

use quest_domain::ConfigError;
use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while loading or building a world
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed topology or evidence table
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to read the world file
    #[error("Failed to read world file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the world TOML
    #[error("Failed to parse world TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to render the world as TOML
    #[error("Failed to serialize world: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
