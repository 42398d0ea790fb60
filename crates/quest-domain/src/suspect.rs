//! Suspect ledger - hash-chained table from suspect name to implicating clues
//!
//! The table has a fixed, deliberately small number of buckets so that
//! collisions happen with only a few suspects. Each bucket is a chain with the
//! most recently created entry at its head.

use std::collections::VecDeque;

/// Number of buckets in the ledger
pub const TABLE_SIZE: usize = 7;

/// Bucket index for a suspect name
///
/// Sums the UTF-8 bytes of `name` and reduces the sum modulo [`TABLE_SIZE`].
/// The sum ignores byte positions, so anagrams always share a bucket:
///
/// ```
/// use quest_domain::suspect::bucket_of;
///
/// assert_eq!(bucket_of("Chef"), bucket_of("fehC"));
/// ```
pub fn bucket_of(name: &str) -> usize {
    let sum = name
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_add(usize::from(byte)));
    sum % TABLE_SIZE
}

/// A suspect and every clue associated with them so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectEntry {
    name: String,
    count: usize,
    clues: VecDeque<String>,
}

impl SuspectEntry {
    fn new(name: String) -> Self {
        Self {
            name,
            count: 0,
            clues: VecDeque::new(),
        }
    }

    fn record(&mut self, clue: String) {
        self.clues.push_front(clue);
        self.count += 1;
        debug_assert_eq!(self.count, self.clues.len());
    }

    /// Suspect name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of associations recorded, repeats included
    pub fn count(&self) -> usize {
        self.count
    }

    /// Associated clue texts, most recent first
    pub fn clues(&self) -> impl Iterator<Item = &str> + '_ {
        self.clues.iter().map(String::as_str)
    }
}

/// Hash-chained mapping from suspect name to [`SuspectEntry`]
///
/// # Examples
///
/// ```
/// use quest_domain::SuspectLedger;
///
/// let mut ledger = SuspectLedger::new();
/// ledger.associate("Mordomo", "Livro rasgado com nome do mordomo");
/// ledger.associate("Chef", "Faca suja de sangue");
/// ledger.associate("Chef", "Avental manchado");
///
/// let leader = ledger.leader().unwrap();
/// assert_eq!(leader.name(), "Chef");
/// assert_eq!(leader.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SuspectLedger {
    buckets: Vec<VecDeque<SuspectEntry>>,
    len: usize,
}

impl Default for SuspectLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectLedger {
    /// Create an empty ledger with [`TABLE_SIZE`] buckets
    pub fn new() -> Self {
        Self {
            buckets: (0..TABLE_SIZE).map(|_| VecDeque::new()).collect(),
            len: 0,
        }
    }

    /// Record that `clue` implicates `suspect`
    ///
    /// Creates the suspect at the head of its bucket on first sight. Repeated
    /// associations are all counted, even with the same clue text.
    pub fn associate(&mut self, suspect: &str, clue: impl Into<String>) {
        let chain = &mut self.buckets[bucket_of(suspect)];

        let pos = match chain.iter().position(|entry| entry.name == suspect) {
            Some(pos) => pos,
            None => {
                chain.push_front(SuspectEntry::new(suspect.to_string()));
                self.len += 1;
                0
            }
        };

        chain[pos].record(clue.into());
    }

    /// Entry for exactly `suspect`, if one exists
    pub fn find(&self, suspect: &str) -> Option<&SuspectEntry> {
        self.buckets[bucket_of(suspect)]
            .iter()
            .find(|entry| entry.name == suspect)
    }

    /// Suspect with the highest count
    ///
    /// Ties go to the entry met first when scanning buckets in index order and
    /// each chain from its head. Returns `None` on an empty ledger.
    pub fn leader(&self) -> Option<&SuspectEntry> {
        let mut best: Option<&SuspectEntry> = None;
        for entry in self.entries() {
            if best.is_none_or(|b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best
    }

    /// Every entry, bucket by bucket, each chain from its head
    pub fn entries(&self) -> impl Iterator<Item = &SuspectEntry> + '_ {
        self.buckets.iter().flat_map(|chain| chain.iter())
    }

    /// Chain stored in bucket `index`, head first
    ///
    /// # Panics
    /// Panics if `index >= TABLE_SIZE`.
    pub fn bucket(&self, index: usize) -> impl Iterator<Item = &SuspectEntry> + '_ {
        self.buckets[index].iter()
    }

    /// Number of distinct suspects
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no suspect has been recorded
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: N associations for a suspect give a count and list of N
        #[test]
        fn test_count_matches_associations(
            name in "[A-Za-z]{1,8}",
            clues in prop::collection::vec("[a-z ]{0,10}", 1..20),
        ) {
            let mut ledger = SuspectLedger::new();
            for clue in &clues {
                ledger.associate(&name, clue.as_str());
            }
            let entry = ledger.find(&name).unwrap();
            prop_assert_eq!(entry.count(), clues.len());
            prop_assert_eq!(entry.clues().count(), clues.len());
        }

        /// Property: the hash only depends on the multiset of bytes
        #[test]
        fn test_bucket_is_permutation_invariant(name in "[ -~]{0,16}") {
            let mut reversed: Vec<u8> = name.bytes().collect();
            reversed.reverse();
            let reversed = String::from_utf8(reversed).unwrap();
            prop_assert_eq!(bucket_of(&name), bucket_of(&reversed));
            prop_assert!(bucket_of(&name) < TABLE_SIZE);
        }

        /// Property: every suspect lives in exactly the bucket its name hashes to
        #[test]
        fn test_entries_live_in_their_bucket(names in prop::collection::vec("[a-f]{1,4}", 0..30)) {
            let mut ledger = SuspectLedger::new();
            for name in &names {
                ledger.associate(name, "clue");
            }
            for index in 0..TABLE_SIZE {
                for entry in ledger.bucket(index) {
                    prop_assert_eq!(bucket_of(entry.name()), index);
                }
            }
            let distinct: std::collections::HashSet<&String> = names.iter().collect();
            prop_assert_eq!(ledger.len(), distinct.len());
            prop_assert_eq!(ledger.entries().count(), distinct.len());
        }

        /// Property: the leader has the maximum count and is the first such entry
        #[test]
        fn test_leader_is_first_maximum(pairs in prop::collection::vec("[a-e]{1,3}", 1..40)) {
            let mut ledger = SuspectLedger::new();
            for name in &pairs {
                ledger.associate(name, "clue");
            }
            let max = ledger.entries().map(SuspectEntry::count).max().unwrap();
            let first = ledger.entries().find(|e| e.count() == max).unwrap();
            let leader = ledger.leader().unwrap();
            prop_assert_eq!(leader.count(), max);
            prop_assert_eq!(leader.name(), first.name());
        }
    }
}
