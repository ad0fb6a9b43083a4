use crate::record::Level;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Occurrence counter that remembers first-seen order.
///
/// Ranking is a stable sort on the count, so equal counts keep the order in
/// which their keys first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl TallyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: &str) {
        if let Some(&slot) = self.index.get(key) {
            self.entries[slot].1 += 1;
            return;
        }

        self.index.insert(key.to_owned(), self.entries.len());
        self.entries.push((key.to_owned(), 1));
    }

    pub fn get(&self, key: &str) -> u64 {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c).sum()
    }

    /// The `n` highest counts, descending.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

impl Serialize for TallyCounter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Per-level counts; every level is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts([u64; 6]);

impl LevelCounts {
    pub fn record(&mut self, level: Level) {
        self.0[level.index()] += 1;
    }

    pub fn get(&self, level: Level) -> u64 {
        self.0[level.index()]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

impl Serialize for LevelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            Level::DISPLAY_ORDER
                .iter()
                .map(|level| (level.letter().to_string(), self.get(*level))),
        )
    }
}
