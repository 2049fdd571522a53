//! Secondary index from a grouping value to the keys holding it
//!
//! Buckets keep keys in the order they joined the group. A bucket may be
//! empty: groups can be registered before any record uses them, and
//! [`GroupIndex::reset_buckets`] empties buckets without forgetting them.

use serde::Serialize;
use std::collections::BTreeMap;

/// Group value -> ordered keys
#[derive(Debug, Clone, Serialize)]
pub struct GroupIndex<K> {
    buckets: BTreeMap<String, Vec<K>>,
}

impl<K> Default for GroupIndex<K> {
    fn default() -> Self {
        Self { buckets: BTreeMap::new() }
    }
}

impl<K: Clone + PartialEq> GroupIndex<K> {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index with empty buckets for `groups`
    pub fn with_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new();
        for group in groups {
            index.register(group);
        }
        index
    }

    /// Append `key` to the bucket for `group`, creating the bucket if absent
    pub fn insert(&mut self, group: &str, key: K) {
        self.buckets.entry(group.to_string()).or_default().push(key);
    }

    /// Remove the first occurrence of `key` from `group`.
    ///
    /// Returns false when the group or the key is missing. The bucket is kept
    /// even when it becomes empty.
    pub fn remove(&mut self, group: &str, key: &K) -> bool {
        let Some(bucket) = self.buckets.get_mut(group) else {
            return false;
        };
        match bucket.iter().position(|k| k == key) {
            Some(pos) => {
                bucket.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Move `key` from the `from` bucket to the end of the `to` bucket
    pub fn relocate(&mut self, from: &str, to: &str, key: K) {
        self.remove(from, &key);
        self.insert(to, key);
    }

    /// Keys in `group`, empty for an unknown group
    pub fn bucket(&self, group: &str) -> &[K] {
        self.buckets.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a bucket exists for `group`
    pub fn contains_group(&self, group: &str) -> bool {
        self.buckets.contains_key(group)
    }

    /// Ensure an (initially empty) bucket exists for `group`.
    ///
    /// Returns false when the bucket was already present.
    pub fn register(&mut self, group: impl Into<String>) -> bool {
        let group = group.into();
        if self.buckets.contains_key(&group) {
            return false;
        }
        self.buckets.insert(group, Vec::new());
        true
    }

    /// Drop the bucket for `group`, returning its keys
    pub fn remove_group(&mut self, group: &str) -> Option<Vec<K>> {
        self.buckets.remove(group)
    }

    /// Empty every bucket, keeping the group names
    pub fn reset_buckets(&mut self) {
        for bucket in self.buckets.values_mut() {
            bucket.clear();
        }
    }

    /// Iterate over `(group, keys)` in group name order
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[K])> {
        self.buckets.iter().map(|(group, keys)| (group.as_str(), keys.as_slice()))
    }

    /// Get statistics about the buckets
    pub fn stats(&self) -> GroupIndexStats {
        GroupIndexStats {
            groups: self.buckets.len(),
            indexed_keys: self.buckets.values().map(Vec::len).sum(),
            empty_groups: self.buckets.values().filter(|keys| keys.is_empty()).count(),
        }
    }
}

/// Statistics about a group index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupIndexStats {
    pub groups: usize,
    pub indexed_keys: usize,
    pub empty_groups: usize,
}

impl GroupIndexStats {
    /// Average keys per group, counting empty groups
    pub fn avg_keys_per_group(&self) -> f64 {
        if self.groups == 0 {
            0.0
        } else {
            self.indexed_keys as f64 / self.groups as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_index_basic_operations() {
        let mut index = GroupIndex::new();
        index.insert("HR", 1);
        index.insert("IT", 2);
        index.insert("HR", 5);

        assert_eq!(index.bucket("HR"), &[1, 5]);
        assert_eq!(index.bucket("IT"), &[2]);
        assert!(index.bucket("Legal").is_empty());

        assert!(index.remove("HR", &1));
        assert!(!index.remove("HR", &1));
        assert!(!index.remove("Legal", &1));
        assert_eq!(index.bucket("HR"), &[5]);
    }

    #[test]
    fn test_group_index_relocation_appends() {
        let mut index = GroupIndex::with_groups(["Finance", "IT"]);
        index.insert("IT", 2);
        index.insert("Finance", 3);

        index.relocate("IT", "Finance", 2);

        assert!(index.bucket("IT").is_empty());
        assert_eq!(index.bucket("Finance"), &[3, 2]);
    }

    #[test]
    fn test_group_index_reset_keeps_groups() {
        let mut index = GroupIndex::with_groups(["Marketing"]);
        index.insert("HR", 1);
        index.insert("HR", 2);

        index.reset_buckets();

        let groups: Vec<_> = index.groups().map(|(g, keys)| (g, keys.len())).collect();
        assert_eq!(groups, vec![("HR", 0), ("Marketing", 0)]);
        assert!(index.contains_group("HR"));
    }

    #[test]
    fn test_group_index_register_and_remove_group() {
        let mut index: GroupIndex<u32> = GroupIndex::new();

        assert!(index.register("Legal"));
        assert!(!index.register("Legal"));
        assert_eq!(index.remove_group("Legal"), Some(Vec::new()));
        assert_eq!(index.remove_group("Legal"), None);
    }

    #[test]
    fn test_group_index_stats() {
        let mut index = GroupIndex::with_groups(["Marketing"]);
        for i in 1..=6 {
            index.insert(if i % 2 == 0 { "HR" } else { "IT" }, i);
        }

        let stats = index.stats();
        assert_eq!(stats.groups, 3);
        assert_eq!(stats.indexed_keys, 6);
        assert_eq!(stats.empty_groups, 1);
        assert!((stats.avg_keys_per_group() - 2.0).abs() < f64::EPSILON);
    }
}
