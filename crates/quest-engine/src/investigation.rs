//! Investigation - feeds the clue index and suspect ledger as rooms are visited

use crate::evidence::EvidenceTable;
use quest_domain::clue::InOrder;
use quest_domain::{ClueIndex, Location, SuspectEntry, SuspectLedger};
use tracing::{debug, info};

/// State accumulated over one investigation session
///
/// Owns the clue index and suspect ledger exclusively; evidence is copied
/// into them by value on every visit.
#[derive(Debug, Clone)]
pub struct Investigation {
    evidence: EvidenceTable,
    clues: ClueIndex,
    suspects: SuspectLedger,
}

/// Snapshot of the suspect ledger: every entry plus the current leader
#[derive(Debug, Clone, Copy)]
pub struct SuspectsReport<'a> {
    ledger: &'a SuspectLedger,

    /// Most implicated suspect, `None` when nobody has been recorded
    pub leader: Option<&'a SuspectEntry>,
}

impl<'a> SuspectsReport<'a> {
    /// Entries in ledger order (bucket index, then chain order)
    pub fn entries(&self) -> impl Iterator<Item = &'a SuspectEntry> + 'a {
        self.ledger.entries()
    }

    /// True when no suspect has been recorded
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}

impl Investigation {
    /// Start an investigation over the given evidence table
    pub fn new(evidence: EvidenceTable) -> Self {
        Self {
            evidence,
            clues: ClueIndex::new(),
            suspects: SuspectLedger::new(),
        }
    }

    /// Record everything found at `location`
    ///
    /// Clue insertion is idempotent, suspect association is not: visiting a
    /// room twice counts its evidence twice against the suspect. Returns the
    /// number of evidence pairs recorded.
    pub fn visit(&mut self, location: &Location) -> usize {
        let found = self.evidence.for_location(location.name());

        for item in found {
            let new_clue = self.clues.insert(item.clue.as_str());
            self.suspects.associate(&item.suspect, item.clue.as_str());
            debug!(
                location = location.name(),
                suspect = %item.suspect,
                clue = %item.clue,
                new_clue,
                "Evidence recorded"
            );
        }

        if !found.is_empty() {
            info!(
                location = location.name(),
                pairs = found.len(),
                clues = self.clues.len(),
                suspects = self.suspects.len(),
                "Room searched"
            );
        }

        found.len()
    }

    /// Collected clues in ascending order
    pub fn clues_report(&self) -> InOrder<'_> {
        self.clues.in_order()
    }

    /// Every suspect with their clues, plus the leader
    pub fn suspects_report(&self) -> SuspectsReport<'_> {
        SuspectsReport {
            ledger: &self.suspects,
            leader: self.suspects.leader(),
        }
    }

    /// The clue index
    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// The suspect ledger
    pub fn suspects(&self) -> &SuspectLedger {
        &self.suspects
    }
}
