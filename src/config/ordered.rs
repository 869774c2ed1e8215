//! Insertion-ordered string sets
//!
//! Used to merge alias and match pattern lists coming from external sources
//! without losing the order in which entries were first seen.

use std::collections::HashSet;

/// A set of strings that remembers arrival order.
///
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; returns false if it was already present
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl Extend<String> for OrderedSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<String> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Remove duplicates, keeping the first occurrence of each value
pub fn dedup_ordered<I: IntoIterator<Item = String>>(items: I) -> Vec<String> {
    items.into_iter().collect::<OrderedSet>().into_vec()
}

/// Split a newline-delimited value.
///
/// A single trailing empty element (from a trailing newline) is dropped, so
/// `""` yields no entries and `"a\nb\n"` yields `["a", "b"]`. Interior empty
/// lines are kept.
pub fn split_lines(value: &str) -> Vec<String> {
    let mut lines: Vec<String> = value.split('\n').map(str::to_string).collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}
