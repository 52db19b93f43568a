//! Clue ledger - a binary search tree of every distinct clue collected.

use manor::BoundedText;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A node of the ledger. Left subtree texts sort before `text`, right
/// subtree texts sort after it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClueRecord {
    text: BoundedText,
    left: Option<Box<ClueRecord>>,
    right: Option<Box<ClueRecord>>,
}

impl ClueRecord {
    fn leaf(text: BoundedText) -> Self {
        Self {
            text,
            left: None,
            right: None,
        }
    }

    pub fn text(&self) -> &BoundedText {
        &self.text
    }
}

/// Result of adding a clue to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertOutcome {
    Inserted,
    /// The text was already present; the ledger is unchanged.
    Duplicate,
}

/// Sorted, duplicate-free record of collected clues. Only grows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClueLedger {
    root: Option<Box<ClueRecord>>,
    len: usize,
}

impl ClueLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue, ordering by byte-wise string comparison.
    pub fn insert(&mut self, text: BoundedText) -> InsertOutcome {
        let outcome = insert_into(&mut self.root, text);
        if outcome == InsertOutcome::Inserted {
            self.len += 1;
        }
        outcome
    }

    /// Check if a clue text is in the ledger.
    pub fn contains(&self, text: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(record) = node {
            node = match text.cmp(record.text.as_str()) {
                Ordering::Less => record.left.as_deref(),
                Ordering::Greater => record.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Walk the clues in ascending order.
    ///
    /// The walk is lazy; call again to start over.
    pub fn in_order(&self) -> InOrder<'_> {
        let mut walk = InOrder { stack: Vec::new() };
        walk.push_left_spine(self.root.as_deref());
        walk
    }

    /// Sorted copy of every clue text.
    pub fn sorted(&self) -> Vec<String> {
        self.in_order().map(|text| text.as_str().to_string()).collect()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        fn height_of(node: Option<&ClueRecord>) -> usize {
            node.map(|record| 1 + height_of(record.left.as_deref()).max(height_of(record.right.as_deref())))
                .unwrap_or(0)
        }
        height_of(self.root.as_deref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

fn insert_into(slot: &mut Option<Box<ClueRecord>>, text: BoundedText) -> InsertOutcome {
    match slot {
        None => {
            *slot = Some(Box::new(ClueRecord::leaf(text)));
            InsertOutcome::Inserted
        }
        Some(record) => match text.cmp(&record.text) {
            Ordering::Less => insert_into(&mut record.left, text),
            Ordering::Greater => insert_into(&mut record.right, text),
            Ordering::Equal => InsertOutcome::Duplicate,
        },
    }
}

/// In-order iterator over a [`ClueLedger`].
pub struct InOrder<'a> {
    stack: Vec<&'a ClueRecord>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueRecord>) {
        while let Some(record) = node {
            self.stack.push(record);
            node = record.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a BoundedText;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.stack.pop()?;
        self.push_left_spine(record.right.as_deref());
        Some(&record.text)
    }
}
