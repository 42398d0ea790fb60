//! Detective Quest Domain Layer
//!
//! The three data structures an investigation is built on. This crate does no
//! I/O and no logging; the engine crate wires these together with the world
//! configuration and the CLI drives them.
//!
//! ## Key Concepts
//!
//! - **Location**: a named room in a fixed binary tree, navigated left/right
//! - **Clue**: a unique piece of evidence text, kept in sorted order
//! - **Suspect**: a named party accumulating a count of implicating clues
//! - **Leader**: the suspect with the greatest count at the time of asking
//!
//! ## Structures
//!
//! - [`LocationGraph`]: arena-backed tree built once from static [`LocationSpec`]s
//! - [`ClueIndex`]: unbalanced binary search tree over clue texts
//! - [`SuspectLedger`]: hash table with chained buckets keyed by suspect name

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clue;
pub mod error;
pub mod location;
pub mod suspect;

// Re-exports for convenience
pub use clue::ClueIndex;
pub use error::ConfigError;
pub use location::{Direction, Location, LocationGraph, LocationId, LocationSpec, Visit, Walk};
pub use suspect::{SuspectEntry, SuspectLedger, TABLE_SIZE};
