//! Expedition - a walk through the world with a cursor on the current room
//!
//! The cursor is the only navigation state. Moving into a room visits it; a
//! move towards a missing child leaves the cursor where it was. Depending on
//! the [`SearchPolicy`], the room under the cursor is searched again at the
//! start of every later turn spent in it.

use crate::investigation::Investigation;
use crate::world::World;
use quest_domain::{Direction, Location, LocationGraph, LocationId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// When the room under the cursor is searched for evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchPolicy {
    /// On arrival and again at the start of every turn spent in the room
    #[default]
    EveryTurn,
    /// Only when the cursor enters the room
    OnArrival,
}

impl SearchPolicy {
    /// Kebab-case name of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchPolicy::EveryTurn => "every-turn",
            SearchPolicy::OnArrival => "on-arrival",
        }
    }
}

impl std::str::FromStr for SearchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "every-turn" => Ok(SearchPolicy::EveryTurn),
            "on-arrival" => Ok(SearchPolicy::OnArrival),
            _ => Err(format!("Invalid search policy: {}", s)),
        }
    }
}

/// Outcome of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// The cursor moved and the new room was searched
    Entered {
        /// Room now under the cursor
        location: LocationId,
        /// Evidence pairs recorded on arrival
        evidence: usize,
    },

    /// No room in that direction; nothing changed
    Blocked,
}

/// A running investigation session
#[derive(Debug, Clone)]
pub struct Expedition {
    graph: LocationGraph,
    investigation: Investigation,
    current: LocationId,
    path: Vec<LocationId>,
    policy: SearchPolicy,
    just_arrived: bool,
}

impl Expedition {
    /// Place the cursor on the root room and search it
    pub fn start(world: World) -> Self {
        Self::with_policy(world, SearchPolicy::default())
    }

    /// Like [`Expedition::start`], with an explicit search policy
    pub fn with_policy(world: World, policy: SearchPolicy) -> Self {
        let World { graph, evidence } = world;
        let root = graph.root();

        let mut expedition = Self {
            graph,
            investigation: Investigation::new(evidence),
            current: root,
            path: Vec::new(),
            policy,
            just_arrived: false,
        };
        expedition.enter(root);
        expedition
    }

    /// Begin a turn in the current room
    ///
    /// Under [`SearchPolicy::EveryTurn`] the room is searched again unless the
    /// previous action just entered it. Returns the evidence pairs recorded.
    pub fn begin_turn(&mut self) -> usize {
        if std::mem::take(&mut self.just_arrived) {
            return 0;
        }
        match self.policy {
            SearchPolicy::EveryTurn => self.search_current(),
            SearchPolicy::OnArrival => 0,
        }
    }

    /// Search the current room again, whatever the policy
    pub fn search_current(&mut self) -> usize {
        self.investigation.visit(self.graph.get(self.current))
    }

    /// Active search policy
    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    /// Try to move one step in `direction`
    pub fn go(&mut self, direction: Direction) -> Move {
        match self.graph.child(self.current, direction) {
            Some(next) => {
                debug!(
                    from = self.graph.get(self.current).name(),
                    to = self.graph.get(next).name(),
                    %direction,
                    "Moved"
                );
                let evidence = self.enter(next);
                Move::Entered {
                    location: next,
                    evidence,
                }
            }
            None => {
                debug!(
                    at = self.graph.get(self.current).name(),
                    %direction,
                    "No room in that direction"
                );
                Move::Blocked
            }
        }
    }

    fn enter(&mut self, id: LocationId) -> usize {
        self.current = id;
        self.path.push(id);
        self.just_arrived = true;
        self.investigation.visit(self.graph.get(id))
    }

    /// Room under the cursor
    pub fn current(&self) -> &Location {
        self.graph.get(self.current)
    }

    /// Id of the room under the cursor
    pub fn current_id(&self) -> LocationId {
        self.current
    }

    /// Directions that lead somewhere from the current room
    pub fn exits(&self) -> Vec<Direction> {
        [Direction::Left, Direction::Right]
            .into_iter()
            .filter(|dir| self.current().child(*dir).is_some())
            .collect()
    }

    /// Every room entered so far, in order, starting with the root
    pub fn path(&self) -> impl Iterator<Item = &Location> + '_ {
        self.path.iter().map(|id| self.graph.get(*id))
    }

    /// The world's location graph
    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    /// Clues and suspects collected so far
    pub fn investigation(&self) -> &Investigation {
        &self.investigation
    }
}
