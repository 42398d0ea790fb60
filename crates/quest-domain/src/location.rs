//! Location graph - the fixed binary tree of rooms the player walks through
//!
//! Nodes live in an arena owned by the graph and refer to their children by
//! [`LocationId`]. The graph is built once from a static description and is
//! read-only afterwards; dropping it releases every location together.

use crate::error::ConfigError;
use std::collections::HashMap;
use std::fmt;

/// Index of a location inside its [`LocationGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(usize);

/// Navigation direction from a location to one of its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the left child
    Left,
    /// Towards the right child
    Right,
}

impl Direction {
    /// Lowercase name of the direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(format!("Invalid direction: {}", s)),
        }
    }
}

/// Static description of one location: its name and the names of its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSpec {
    /// Unique location name
    pub name: String,
    /// Name of the left child, if any
    pub left: Option<String>,
    /// Name of the right child, if any
    pub right: Option<String>,
}

impl LocationSpec {
    /// Describe a location with no children
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    /// Describe a location with optional children
    pub fn new(name: impl Into<String>, left: Option<&str>, right: Option<&str>) -> Self {
        Self {
            name: name.into(),
            left: left.map(str::to_string),
            right: right.map(str::to_string),
        }
    }
}

/// A named room in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    name: String,
    left: Option<LocationId>,
    right: Option<LocationId>,
}

impl Location {
    /// Name of the location
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Left child, if present
    pub fn left(&self) -> Option<LocationId> {
        self.left
    }

    /// Right child, if present
    pub fn right(&self) -> Option<LocationId> {
        self.right
    }

    /// Child in the given direction, if present
    pub fn child(&self, direction: Direction) -> Option<LocationId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// True when the location has no children
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The fixed tree of locations
///
/// # Examples
///
/// ```
/// use quest_domain::{LocationGraph, LocationSpec};
///
/// let graph = LocationGraph::build(
///     "Hall",
///     &[
///         LocationSpec::new("Hall", Some("Library"), None),
///         LocationSpec::leaf("Library"),
///     ],
/// )
/// .unwrap();
///
/// let library = graph.left(graph.root()).unwrap();
/// assert_eq!(graph.get(library).name(), "Library");
/// assert!(graph.right(graph.root()).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LocationGraph {
    nodes: Vec<Location>,
    root: LocationId,
}

impl LocationGraph {
    /// Build the graph from its static description
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the description is not a single tree rooted
    /// at `root` whose references all resolve.
    pub fn build(root: &str, specs: &[LocationSpec]) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::EmptyWorld);
        }

        let mut by_name: HashMap<&str, usize> = HashMap::with_capacity(specs.len());
        for (idx, spec) in specs.iter().enumerate() {
            if by_name.insert(spec.name.as_str(), idx).is_some() {
                return Err(ConfigError::DuplicateLocation(spec.name.clone()));
            }
        }

        let root_idx = *by_name
            .get(root)
            .ok_or_else(|| ConfigError::UnknownRoot(root.to_string()))?;

        let mut has_parent = vec![false; specs.len()];
        let mut nodes = Vec::with_capacity(specs.len());

        for spec in specs {
            let mut resolve = |child: &Option<String>| -> Result<Option<LocationId>, ConfigError> {
                let Some(child) = child else {
                    return Ok(None);
                };
                let idx = *by_name.get(child.as_str()).ok_or_else(|| ConfigError::UnknownChild {
                    parent: spec.name.clone(),
                    child: child.clone(),
                })?;
                if idx == root_idx || has_parent[idx] {
                    return Err(ConfigError::SharedChild(child.clone()));
                }
                has_parent[idx] = true;
                Ok(Some(LocationId(idx)))
            };

            let left = resolve(&spec.left)?;
            let right = resolve(&spec.right)?;
            nodes.push(Location {
                name: spec.name.clone(),
                left,
                right,
            });
        }

        let graph = Self {
            nodes,
            root: LocationId(root_idx),
        };

        let mut reached = vec![false; graph.nodes.len()];
        for visit in graph.walk() {
            reached[visit.id.0] = true;
        }
        if let Some(idx) = reached.iter().position(|r| !r) {
            return Err(ConfigError::Unreachable(graph.nodes[idx].name.clone()));
        }

        Ok(graph)
    }

    /// Starting location
    pub fn root(&self) -> LocationId {
        self.root
    }

    /// Location behind an id
    ///
    /// Ids are only handed out by this graph, so lookups always succeed.
    pub fn get(&self, id: LocationId) -> &Location {
        &self.nodes[id.0]
    }

    /// Look a location up by its exact name
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.nodes
            .iter()
            .position(|node| node.name == name)
            .map(LocationId)
    }

    /// Left child of `id`, or `None` at a left edge
    pub fn left(&self, id: LocationId) -> Option<LocationId> {
        self.get(id).left
    }

    /// Right child of `id`, or `None` at a right edge
    pub fn right(&self, id: LocationId) -> Option<LocationId> {
        self.get(id).right
    }

    /// Child of `id` in `direction`
    pub fn child(&self, id: LocationId, direction: Direction) -> Option<LocationId> {
        self.get(id).child(direction)
    }

    /// Number of locations
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a successfully built graph
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Locations in pre-order: parent first, then left, then right
    pub fn iter(&self) -> impl Iterator<Item = &Location> + '_ {
        self.walk().map(|visit| visit.location)
    }

    /// Pre-order walk from the root with the position of every location
    ///
    /// Same order as [`LocationGraph::iter`], with the root at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            graph: self,
            stack: vec![Pending {
                depth: 0,
                id: self.root,
                side: None,
                last: true,
            }],
        }
    }
}

/// One step of a [`Walk`]
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Distance from the root
    pub depth: usize,
    /// Id of the visited location
    pub id: LocationId,
    /// The visited location
    pub location: &'a Location,
    /// Side of the parent this location hangs from, `None` for the root
    pub side: Option<Direction>,
    /// True when no sibling follows in the walk
    pub last: bool,
}

/// Pre-order iterator returned by [`LocationGraph::walk`]
pub struct Walk<'a> {
    graph: &'a LocationGraph,
    stack: Vec<Pending>,
}

struct Pending {
    depth: usize,
    id: LocationId,
    side: Option<Direction>,
    last: bool,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let Pending {
            depth,
            id,
            side,
            last,
        } = self.stack.pop()?;
        let location = self.graph.get(id);

        // Right is pushed first so left pops first
        if let Some(right) = location.right {
            self.stack.push(Pending {
                depth: depth + 1,
                id: right,
                side: Some(Direction::Right),
                last: true,
            });
        }
        if let Some(left) = location.left {
            self.stack.push(Pending {
                depth: depth + 1,
                id: left,
                side: Some(Direction::Left),
                last: location.right.is_none(),
            });
        }

        Some(Visit {
            depth,
            id,
            location,
            side,
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mansion() -> LocationGraph {
        LocationGraph::build(
            "Hall",
            &[
                LocationSpec::new("Hall", Some("Library"), Some("Kitchen")),
                LocationSpec::new("Library", Some("Attic"), None),
                LocationSpec::new("Kitchen", None, Some("Vault")),
                LocationSpec::leaf("Attic"),
                LocationSpec::leaf("Vault"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_navigation() {
        let graph = mansion();
        let library = graph.left(graph.root()).unwrap();
        let kitchen = graph.right(graph.root()).unwrap();

        assert_eq!(graph.get(library).name(), "Library");
        assert_eq!(graph.get(kitchen).name(), "Kitchen");
        assert!(graph.right(library).is_none());
        assert!(graph.left(kitchen).is_none());

        let vault = graph.child(kitchen, Direction::Right).unwrap();
        assert!(graph.get(vault).is_dead_end());
    }

    #[test]
    fn test_walk_is_pre_order() {
        let graph = mansion();
        let names: Vec<(usize, &str)> = graph
            .walk()
            .map(|visit| (visit.depth, visit.location.name()))
            .collect();

        assert_eq!(
            names,
            vec![
                (0, "Hall"),
                (1, "Library"),
                (2, "Attic"),
                (1, "Kitchen"),
                (2, "Vault"),
            ]
        );
    }

    #[test]
    fn test_iter_matches_walk() {
        let graph = mansion();
        let names: Vec<&str> = graph.iter().map(Location::name).collect();
        assert_eq!(names, vec!["Hall", "Library", "Attic", "Kitchen", "Vault"]);
    }

    #[test]
    fn test_walk_reports_side_and_siblings() {
        let graph = mansion();
        let steps: Vec<(&str, Option<Direction>, bool)> = graph
            .walk()
            .map(|visit| (visit.location.name(), visit.side, visit.last))
            .collect();

        assert_eq!(
            steps,
            vec![
                ("Hall", None, true),
                ("Library", Some(Direction::Left), false),
                ("Attic", Some(Direction::Left), true),
                ("Kitchen", Some(Direction::Right), true),
                ("Vault", Some(Direction::Right), true),
            ]
        );
    }

    #[test]
    fn test_root_need_not_be_first() {
        let graph = LocationGraph::build(
            "Hall",
            &[LocationSpec::leaf("Attic"), LocationSpec::new("Hall", None, Some("Attic"))],
        )
        .unwrap();
        assert_eq!(graph.get(graph.root()).name(), "Hall");
        assert_eq!(graph.find("Attic"), graph.right(graph.root()));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_empty_world() {
        assert_eq!(LocationGraph::build("Hall", &[]).unwrap_err(), ConfigError::EmptyWorld);
    }

    #[test]
    fn test_unknown_root() {
        let err = LocationGraph::build("Cellar", &[LocationSpec::leaf("Hall")]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownRoot("Cellar".to_string()));
    }

    #[test]
    fn test_unknown_child() {
        let err = LocationGraph::build("Hall", &[LocationSpec::new("Hall", Some("Ghost"), None)])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownChild {
                parent: "Hall".to_string(),
                child: "Ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_location() {
        let specs = [LocationSpec::leaf("Hall"), LocationSpec::leaf("Hall")];
        let err = LocationGraph::build("Hall", &specs).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateLocation("Hall".to_string()));
    }

    #[test]
    fn test_child_with_two_parents() {
        let err = LocationGraph::build(
            "Hall",
            &[
                LocationSpec::new("Hall", Some("Attic"), Some("Attic")),
                LocationSpec::leaf("Attic"),
            ],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::SharedChild("Attic".to_string()));
    }

    #[test]
    fn test_root_as_child() {
        let err = LocationGraph::build(
            "Hall",
            &[
                LocationSpec::new("Hall", Some("Attic"), None),
                LocationSpec::new("Attic", Some("Hall"), None),
            ],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::SharedChild("Hall".to_string()));
    }

    #[test]
    fn test_detached_cycle_is_unreachable() {
        let err = LocationGraph::build(
            "Hall",
            &[
                LocationSpec::leaf("Hall"),
                LocationSpec::new("Attic", Some("Cellar"), None),
                LocationSpec::new("Cellar", Some("Attic"), None),
            ],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::Unreachable("Attic".to_string()));
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("LEFT".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("right".parse::<Direction>().unwrap(), Direction::Right);
        assert!("up".parse::<Direction>().is_err());
    }
}
