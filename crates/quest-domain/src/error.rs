//! Errors raised while building the world from its static description

use thiserror::Error;

/// A malformed topology or evidence table
///
/// Detected once, at construction time, before any navigation happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The description contains no locations at all
    #[error("World has no locations")]
    EmptyWorld,

    /// Two locations share a name
    #[error("Location defined more than once: {0}")]
    DuplicateLocation(String),

    /// The root names a location that was never defined
    #[error("Root location is not defined: {0}")]
    UnknownRoot(String),

    /// A child reference points at a location that was never defined
    #[error("Location '{parent}' references undefined child '{child}'")]
    UnknownChild {
        /// Location holding the reference
        parent: String,
        /// Name that could not be resolved
        child: String,
    },

    /// A location has more than one parent, or the root appears as a child
    #[error("Location has more than one parent: {0}")]
    SharedChild(String),

    /// A location cannot be reached from the root
    #[error("Location is not reachable from the root: {0}")]
    Unreachable(String),

    /// Evidence is attached to a location that does not exist
    #[error("Evidence references undefined location: {0}")]
    UnknownEvidenceLocation(String),

    /// Evidence with an empty suspect name or clue text
    #[error("Evidence in '{0}' has an empty suspect or clue")]
    EmptyEvidence(String),
}
