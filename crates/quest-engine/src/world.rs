//! World configuration - the static topology and evidence an investigation runs on
//!
//! A world is described in TOML:
//!
//! ```toml
//! root = "Hall de Entrada"
//!
//! [[rooms]]
//! name = "Hall de Entrada"
//! left = "Biblioteca"
//!
//! [[rooms]]
//! name = "Biblioteca"
//!
//! [[evidence]]
//! room = "Biblioteca"
//! suspect = "Mordomo"
//! clue = "Livro rasgado com nome do mordomo"
//! ```
//!
//! When no file is given the compiled-in [`WorldConfig::mansion`] is used.

use crate::error::Result;
use crate::evidence::{Evidence, EvidenceTable};
use quest_domain::{ConfigError, LocationGraph, LocationSpec};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static description of a world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Name of the starting room
    pub root: String,

    /// Every room with its children
    pub rooms: Vec<RoomConfig>,

    /// Evidence found in rooms
    #[serde(default)]
    pub evidence: Vec<EvidenceConfig>,
}

/// One room and the names of its children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Unique room name
    pub name: String,

    /// Room reached by going left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,

    /// Room reached by going right
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

/// A suspect/clue pair found in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceConfig {
    /// Room where the clue is found
    pub room: String,

    /// Suspect implicated by the clue
    pub suspect: String,

    /// Clue text
    pub clue: String,
}

/// A built world: the location graph plus its evidence table
#[derive(Debug, Clone)]
pub struct World {
    /// Fixed location tree
    pub graph: LocationGraph,

    /// Evidence per location
    pub evidence: EvidenceTable,
}

impl RoomConfig {
    fn new(name: &str, left: Option<&str>, right: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            left: left.map(str::to_string),
            right: right.map(str::to_string),
        }
    }
}

impl EvidenceConfig {
    fn new(room: &str, suspect: &str, clue: &str) -> Self {
        Self {
            room: room.to_string(),
            suspect: suspect.to_string(),
            clue: clue.to_string(),
        }
    }
}

impl WorldConfig {
    /// The default mansion
    ///
    /// ```text
    ///              Hall de Entrada
    ///             /               \
    ///       Biblioteca          Cozinha
    ///        /                        \
    ///    Sotao                    Sala Secreta
    /// ```
    pub fn mansion() -> Self {
        Self {
            root: "Hall de Entrada".to_string(),
            rooms: vec![
                RoomConfig::new("Hall de Entrada", Some("Biblioteca"), Some("Cozinha")),
                RoomConfig::new("Biblioteca", Some("Sotao"), None),
                RoomConfig::new("Cozinha", None, Some("Sala Secreta")),
                RoomConfig::new("Sotao", None, None),
                RoomConfig::new("Sala Secreta", None, None),
            ],
            evidence: vec![
                EvidenceConfig::new("Biblioteca", "Mordomo", "Livro rasgado com nome do mordomo"),
                EvidenceConfig::new("Cozinha", "Chef", "Faca suja de sangue"),
                EvidenceConfig::new("Sotao", "Jardineiro", "Foto antiga do dono com o jardineiro"),
                EvidenceConfig::new("Sala Secreta", "Heredeiro", "Contrato de heranca alterado"),
            ],
        }
    }

    /// Load a world description from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse a world description from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Render the description as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the location graph and evidence table
    ///
    /// # Errors
    /// Returns a configuration error if the topology is not a tree rooted at
    /// `root`, or if evidence names an unknown room or is blank.
    pub fn build(&self) -> Result<World> {
        let specs: Vec<LocationSpec> = self
            .rooms
            .iter()
            .map(|room| {
                LocationSpec::new(room.name.as_str(), room.left.as_deref(), room.right.as_deref())
            })
            .collect();
        let graph = LocationGraph::build(&self.root, &specs)?;

        let mut evidence = EvidenceTable::new();
        for item in &self.evidence {
            if graph.find(&item.room).is_none() {
                return Err(ConfigError::UnknownEvidenceLocation(item.room.clone()).into());
            }
            if item.suspect.trim().is_empty() || item.clue.trim().is_empty() {
                return Err(ConfigError::EmptyEvidence(item.room.clone()).into());
            }
            let pair = Evidence::new(item.suspect.as_str(), item.clue.as_str());
            evidence.add(item.room.as_str(), pair);
        }

        tracing::debug!(
            rooms = graph.len(),
            evidence = evidence.len(),
            root = %self.root,
            "World built"
        );

        Ok(World { graph, evidence })
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::mansion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_mansion_builds() {
        let world = WorldConfig::mansion().build().unwrap();
        assert_eq!(world.graph.len(), 5);
        assert_eq!(world.evidence.len(), 4);
        assert_eq!(world.graph.get(world.graph.root()).name(), "Hall de Entrada");
        assert!(world.evidence.for_location("Hall de Entrada").is_empty());
    }

    #[test]
    fn test_parse_minimal_world() {
        let config = WorldConfig::from_toml_str(
            r#"
            root = "Hall"

            [[rooms]]
            name = "Hall"
            right = "Attic"

            [[rooms]]
            name = "Attic"
            "#,
        )
        .unwrap();

        assert!(config.evidence.is_empty());
        assert_eq!(config.rooms[0].right.as_deref(), Some("Attic"));
        assert!(config.rooms[0].left.is_none());
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_evidence_in_unknown_room() {
        let mut config = WorldConfig::mansion();
        config.evidence.push(EvidenceConfig::new("Porao", "Chef", "Pegadas"));

        match config.build() {
            Err(EngineError::Config(ConfigError::UnknownEvidenceLocation(room))) => {
                assert_eq!(room, "Porao");
            }
            other => panic!("Expected UnknownEvidenceLocation, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_evidence() {
        let mut config = WorldConfig::mansion();
        config.evidence.push(EvidenceConfig::new("Sotao", "  ", "Pegadas"));
        assert!(matches!(
            config.build(),
            Err(EngineError::Config(ConfigError::EmptyEvidence(_)))
        ));
    }

    #[test]
    fn test_unknown_child_surfaces() {
        let mut config = WorldConfig::mansion();
        config.rooms[3].left = Some("Porao".to_string());
        assert!(matches!(
            config.build(),
            Err(EngineError::Config(ConfigError::UnknownChild { .. }))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let result = WorldConfig::from_toml_str("root = ");
        assert!(matches!(result, Err(EngineError::TomlParse(_))));
    }

    #[test]
    fn test_toml_round_trip_of_mansion() {
        let mansion = WorldConfig::mansion();
        let text = mansion.to_toml_string().unwrap();
        assert!(text.contains("Sala Secreta"));
        assert_eq!(WorldConfig::from_toml_str(&text).unwrap(), mansion);
    }
}
