//! Ordered PATH entry list

use std::collections::{HashMap, HashSet};

/// Ordered, duplicate-permitting list of PATH entries.
///
/// Order is the resolved search order, so this is deliberately not a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
}

impl PathList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Split a raw (unquoted) `a:b:c` value as found in the environment.
    ///
    /// Empty segments are skipped.
    pub fn from_env_value(value: &str) -> Self {
        value
            .split(':')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Insert at `index`, clamped to the end of the list. Returns the index used.
    pub fn insert(&mut self, index: usize, path: String) -> usize {
        let index = index.min(self.entries.len());
        self.entries.insert(index, path);
        index
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Keep only entries for which `keep` returns true, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.entries.retain(|path| keep(path));
    }

    /// Drop later duplicates; the first occurrence of each path wins.
    pub fn dedup(&mut self) {
        let mut seen: HashSet<String> = HashSet::new();
        self.entries.retain(|path| seen.insert(path.clone()));
    }

    /// Number of times each distinct path occurs.
    pub fn occurrences(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for path in &self.entries {
            *counts.entry(path.as_str()).or_default() += 1;
        }
        counts
    }

    /// Largest valid index, or 0 for an empty list.
    pub fn last_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }
}

impl FromIterator<String> for PathList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for PathList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
