//! Named sets of categorical labels
//!
//! Tag sets are a separate namespace from the records that feed them. Records
//! add to them when they enter a catalog, but removing or clearing records
//! never takes labels away, and clearing a set never touches records.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Set name -> labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagSets {
    sets: BTreeMap<String, BTreeSet<String>>,
}

impl TagSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to `set`, creating the set on first use.
    ///
    /// Returns false when the value was already present.
    pub fn add(&mut self, set: &str, value: &str) -> bool {
        self.sets.entry(set.to_string()).or_default().insert(value.to_string())
    }

    /// Discard `value` from `set`. Absent values are ignored.
    ///
    /// Returns whether the value was present.
    pub fn remove(&mut self, set: &str, value: &str) -> bool {
        self.sets.get_mut(set).is_some_and(|values| values.remove(value))
    }

    pub fn contains(&self, set: &str, value: &str) -> bool {
        self.sets.get(set).is_some_and(|values| values.contains(value))
    }

    /// Labels of `set` in sorted order, empty for an unknown set
    pub fn list(&self, set: &str) -> Vec<&str> {
        self.sets
            .get(set)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Labels of `set` also present in `other`
    pub fn intersection<I, S>(&self, set: &str, other: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        other
            .into_iter()
            .filter(|value| self.contains(set, value.as_ref()))
            .map(|value| value.as_ref().to_string())
            .collect()
    }

    /// Labels of `set` absent from `baseline`
    pub fn difference<I, S>(&self, set: &str, baseline: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let baseline: BTreeSet<String> =
            baseline.into_iter().map(|value| value.as_ref().to_string()).collect();
        self.sets
            .get(set)
            .map(|values| values.difference(&baseline).cloned().collect())
            .unwrap_or_default()
    }

    /// Empty `set`. The set itself stays known.
    pub fn clear(&mut self, set: &str) {
        if let Some(values) = self.sets.get_mut(set) {
            values.clear();
        }
    }

    pub fn len(&self, set: &str) -> usize {
        self.sets.get(set).map_or(0, BTreeSet::len)
    }

    /// Names of every set seen so far
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills() -> TagSets {
        let mut tags = TagSets::new();
        for skill in ["Python", "Java", "Excel", "SEO"] {
            tags.add("skills", skill);
        }
        tags
    }

    #[test]
    fn test_add_reports_novelty() {
        let mut tags = skills();
        assert!(!tags.add("skills", "Python"));
        assert!(tags.add("skills", "Rust"));
        assert_eq!(tags.len("skills"), 5);
    }

    #[test]
    fn test_remove_has_discard_semantics() {
        let mut tags = skills();
        assert!(tags.remove("skills", "Java"));
        assert!(!tags.remove("skills", "Java"));
        assert!(!tags.remove("unknown", "Java"));
        assert_eq!(tags.list("skills"), vec!["Excel", "Python", "SEO"]);
    }

    #[test]
    fn test_set_algebra() {
        let tags = skills();

        let common = tags.intersection("skills", ["Python", "SEO", "Data Analysis"]);
        assert_eq!(common.into_iter().collect::<Vec<_>>(), vec!["Python", "SEO"]);

        let unique = tags.difference("skills", ["Python", "Java"]);
        assert_eq!(unique.into_iter().collect::<Vec<_>>(), vec!["Excel", "SEO"]);

        assert!(tags.difference("unknown", ["Python"]).is_empty());
    }

    #[test]
    fn test_clear_keeps_set_name() {
        let mut tags = skills();
        tags.clear("skills");

        assert!(tags.list("skills").is_empty());
        assert_eq!(tags.names().collect::<Vec<_>>(), vec!["skills"]);
    }
}
