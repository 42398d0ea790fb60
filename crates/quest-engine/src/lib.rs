//! Detective Quest Engine
//!
//! Wires the domain structures to a world description and runs an
//! investigation over it.
//!
//! # Overview
//!
//! - [`WorldConfig`]: static topology and evidence, compiled-in or from TOML
//! - [`Investigation`]: feeds the clue index and suspect ledger on each visit
//! - [`Expedition`]: holds the cursor and moves it through the location graph
//!
//! # Usage
//!
//! ```
//! use quest_domain::Direction;
//! use quest_engine::{Expedition, WorldConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let world = WorldConfig::mansion().build()?;
//! let mut expedition = Expedition::start(world);
//!
//! expedition.go(Direction::Left);
//! let clues: Vec<&str> = expedition.investigation().clues_report().collect();
//! assert_eq!(clues, vec!["Livro rasgado com nome do mordomo"]);
//!
//! let report = expedition.investigation().suspects_report();
//! assert_eq!(report.leader.map(|s| s.name()), Some("Mordomo"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod evidence;
mod expedition;
mod investigation;
mod world;

pub use error::{EngineError, Result};
pub use evidence::{Evidence, EvidenceTable};
pub use expedition::{Expedition, Move, SearchPolicy};
pub use investigation::{Investigation, SuspectsReport};
pub use world::{EvidenceConfig, RoomConfig, World, WorldConfig};
