//! Insertion-ordered country table
//!
//! Leaderboard ties are broken by first-seen order, so the table must
//! remember the order in which country buckets were created. A plain
//! `HashMap` loses that; this keeps entries in a vector with a hash index
//! for O(1) increments.

use std::collections::HashMap;

/// Per-country tap counts in first-seen insertion order
#[derive(Debug, Default, Clone)]
pub struct CountryTable {
    /// (country code, count) in insertion order
    entries: Vec<(String, u64)>,
    /// country code -> position in `entries`
    index: HashMap<String, usize>,
}

impl CountryTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the bucket for `code`, creating it at 1 if absent.
    ///
    /// Returns the updated count for that bucket.
    pub fn increment(&mut self, code: &str) -> u64 {
        match self.index.get(code) {
            Some(&pos) => {
                self.entries[pos].1 += 1;
                self.entries[pos].1
            }
            None => {
                self.index.insert(code.to_string(), self.entries.len());
                self.entries.push((code.to_string(), 1));
                1
            }
        }
    }

    /// Get the count for `code`, or `None` if never recorded
    pub fn get(&self, code: &str) -> Option<u64> {
        self.index.get(code).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct countries recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no taps have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(code, count)| (code.as_str(), *count))
    }

    /// Sum of all buckets
    pub fn sum(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
