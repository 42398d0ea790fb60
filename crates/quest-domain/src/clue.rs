//! Clue index - an ordered set of unique clue texts
//!
//! An unbalanced binary search tree keyed by the clue text. Comparison is the
//! byte-wise, case-sensitive ordering of `str`. No rebalancing is performed,
//! so inserting already-sorted texts degrades the tree into a list; callers
//! only ever hold a handful of clues.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct ClueNode {
    text: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// Ordered set of clue texts with in-order enumeration
///
/// # Examples
///
/// ```
/// use quest_domain::ClueIndex;
///
/// let mut clues = ClueIndex::new();
/// clues.insert("Faca suja de sangue");
/// clues.insert("Contrato de heranca alterado");
/// clues.insert("Faca suja de sangue");
///
/// let sorted: Vec<&str> = clues.in_order().collect();
/// assert_eq!(sorted, vec!["Contrato de heranca alterado", "Faca suja de sangue"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClueIndex {
    nodes: Vec<ClueNode>,
    root: Option<usize>,
}

impl ClueIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `text` unless an equal text is already present
    ///
    /// Returns `true` when a new clue was added. A duplicate is a no-op, not
    /// an error.
    pub fn insert(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let new_idx = self.nodes.len();

        let Some(mut current) = self.root else {
            self.nodes.push(ClueNode::leaf(text));
            self.root = Some(new_idx);
            return true;
        };

        loop {
            let node = &mut self.nodes[current];
            let next = match text.as_str().cmp(node.text.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
            match *next {
                Some(child) => current = child,
                None => {
                    *next = Some(new_idx);
                    break;
                }
            }
        }

        self.nodes.push(ClueNode::leaf(text));
        true
    }

    /// Check whether exactly `text` has been recorded
    pub fn contains(&self, text: &str) -> bool {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of distinct clues
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no clue has been recorded
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Height of the tree (0 when empty)
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[idx];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        deepest
    }

    /// Clue texts in ascending order
    ///
    /// The iterator is lazy; call again to restart from the smallest clue.
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        iter.descend_left(self.root);
        iter
    }
}

impl ClueNode {
    fn leaf(text: String) -> Self {
        Self {
            text,
            left: None,
            right: None,
        }
    }
}

/// In-order iterator returned by [`ClueIndex::in_order`]
pub struct InOrder<'a> {
    nodes: &'a [ClueNode],
    stack: Vec<usize>,
}

impl InOrder<'_> {
    fn descend_left(&mut self, mut current: Option<usize>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.nodes[idx].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let nodes = self.nodes;
        self.descend_left(nodes[idx].right);
        Some(nodes[idx].text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index() {
        let clues = ClueIndex::new();
        assert!(clues.is_empty());
        assert_eq!(clues.in_order().count(), 0);
        assert_eq!(clues.depth(), 0);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut clues = ClueIndex::new();
        assert!(clues.insert("Faca suja de sangue"));
        assert!(!clues.insert("Faca suja de sangue"));
        assert_eq!(clues.len(), 1);
    }

    #[test]
    fn test_case_sensitive_ordering() {
        let mut clues = ClueIndex::new();
        for text in ["banana", "Banana", "apple", "Zebra"] {
            clues.insert(text);
        }
        let sorted: Vec<&str> = clues.in_order().collect();
        // Uppercase letters sort before lowercase ones byte-wise
        assert_eq!(sorted, vec!["Banana", "Zebra", "apple", "banana"]);
    }

    #[test]
    fn test_contains() {
        let mut clues = ClueIndex::new();
        clues.insert("m");
        clues.insert("c");
        clues.insert("x");
        assert!(clues.contains("c"));
        assert!(clues.contains("x"));
        assert!(!clues.contains("C"));
        assert!(!clues.contains("z"));
    }

    #[test]
    fn test_sorted_input_degenerates() {
        let mut clues = ClueIndex::new();
        for text in ["a", "b", "c", "d", "e"] {
            clues.insert(text);
        }
        assert_eq!(clues.depth(), 5);

        let mut balanced = ClueIndex::new();
        for text in ["c", "b", "d", "a", "e"] {
            balanced.insert(text);
        }
        assert_eq!(balanced.depth(), 3);
    }

    #[test]
    fn test_in_order_is_restartable() {
        let mut clues = ClueIndex::new();
        clues.insert("b");
        clues.insert("a");

        let mut first = clues.in_order();
        assert_eq!(first.next(), Some("a"));

        let again: Vec<&str> = clues.in_order().collect();
        assert_eq!(again, vec!["a", "b"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    proptest! {
        /// Property: in-order output equals the sorted set of inserted texts
        #[test]
        fn test_in_order_matches_sorted_set(
            texts in prop::collection::vec("[a-dA-D]{0,4}", 0..40)
        ) {
            let mut clues = ClueIndex::new();
            for text in &texts {
                clues.insert(text.as_str());
            }

            let expected: Vec<&str> = texts
                .iter()
                .map(String::as_str)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            let actual: Vec<&str> = clues.in_order().collect();
            prop_assert_eq!(actual, expected);
        }

        /// Property: inserting everything twice leaves the index unchanged
        #[test]
        fn test_repeat_inserts_keep_size(texts in prop::collection::vec("[a-z]{1,6}", 0..30)) {
            let mut clues = ClueIndex::new();
            for text in &texts {
                clues.insert(text.as_str());
            }
            let size = clues.len();
            for text in &texts {
                prop_assert!(!clues.insert(text.as_str()));
            }
            prop_assert_eq!(clues.len(), size);
        }
    }
}
