//! Evidence table - which suspect/clue pairs each location yields

use std::collections::HashMap;

/// One piece of evidence: a clue and the suspect it implicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    /// Suspect implicated by the clue
    pub suspect: String,
    /// Clue text
    pub clue: String,
}

impl Evidence {
    /// Create a new evidence pair
    pub fn new(suspect: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            suspect: suspect.into(),
            clue: clue.into(),
        }
    }
}

/// Static mapping from location name to the evidence found there
///
/// Built once alongside the location graph and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct EvidenceTable {
    by_location: HashMap<String, Vec<Evidence>>,
}

impl EvidenceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `evidence` to `location`, after anything already there
    pub fn add(&mut self, location: impl Into<String>, evidence: Evidence) {
        self.by_location.entry(location.into()).or_default().push(evidence);
    }

    /// Evidence found at `location`, in configuration order
    ///
    /// Locations without evidence yield an empty slice.
    pub fn for_location(&self, location: &str) -> &[Evidence] {
        self.by_location
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of evidence pairs across all locations
    pub fn len(&self) -> usize {
        self.by_location.values().map(Vec::len).sum()
    }

    /// True when no location yields evidence
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
