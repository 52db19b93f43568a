//! Suspect index - a fixed-size chained hash table from clue text to suspect.

use manor::{BoundedText, SuspectLead};
use tracing::debug;

/// Number of buckets. Fixed and prime; the table never resizes.
pub const TABLE_SIZE: usize = 13;

/// One link in a bucket chain.
#[derive(Debug, Clone)]
struct HashEntry {
    key: BoundedText,
    value: BoundedText,
    next: Option<Box<HashEntry>>,
}

/// Maps clue text to the suspect it implicates.
///
/// The hash only looks at the first character of the key, so collisions are
/// the normal case and every bucket is a singly linked chain. New entries go
/// to the head of their chain and nothing is ever updated in place, so the
/// most recent insert for a key shadows older ones.
#[derive(Debug, Clone)]
pub struct SuspectIndex {
    buckets: [Option<Box<HashEntry>>; TABLE_SIZE],
    len: usize,
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self {
            buckets: std::array::from_fn(|_| None),
            len: 0,
        }
    }
}

impl SuspectIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from seeded leads, inserting them in order.
    pub fn from_leads<'a>(leads: impl IntoIterator<Item = &'a SuspectLead>) -> Self {
        let mut index = Self::new();
        for lead in leads {
            index.insert(lead.clue.clone(), lead.suspect.clone());
        }
        index
    }

    /// Bucket for a key: the first character, lower-cased, modulo the table
    /// size. The empty key lands in bucket 0.
    pub fn bucket_of(key: &str) -> usize {
        key.chars()
            .next()
            .and_then(|c| c.to_lowercase().next())
            .map(|c| c as usize % TABLE_SIZE)
            .unwrap_or(0)
    }

    /// Prepend an entry to the key's bucket chain.
    pub fn insert(&mut self, key: BoundedText, value: BoundedText) {
        let bucket = Self::bucket_of(key.as_str());
        debug!(%key, %value, bucket, "indexing lead");

        let next = self.buckets[bucket].take();
        self.buckets[bucket] = Some(Box::new(HashEntry { key, value, next }));
        self.len += 1;
    }

    /// Find the suspect for a clue. Keys compare exactly (case-sensitive);
    /// the first match from the head of the chain wins.
    pub fn lookup(&self, key: &str) -> Option<&BoundedText> {
        self.entries_in(Self::bucket_of(key))
            .find(|entry| entry.key.as_str() == key)
            .map(|entry| &entry.value)
    }

    /// Keys in one bucket, head first.
    pub fn chain(&self, bucket: usize) -> Vec<&BoundedText> {
        self.entries_in(bucket).map(|entry| &entry.key).collect()
    }

    fn entries_in(&self, bucket: usize) -> impl Iterator<Item = &HashEntry> {
        let mut cursor = self.buckets.get(bucket).and_then(|head| head.as_deref());
        std::iter::from_fn(move || {
            let entry = cursor?;
            cursor = entry.next.as_deref();
            Some(entry)
        })
    }

    /// Distinct suspect names, in bucket order.
    pub fn suspects(&self) -> Vec<&BoundedText> {
        let mut names: Vec<&BoundedText> = Vec::new();
        for bucket in 0..TABLE_SIZE {
            for entry in self.entries_in(bucket) {
                if !names.contains(&&entry.value) {
                    names.push(&entry.value);
                }
            }
        }
        names
    }

    /// Total entries, counting shadowed duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
