//! Generic entity catalog
//!
//! An [`EntityCatalog`] keeps three views of the same records in step:
//!
//! - **sequence**: records in insertion order, used for positional lookups,
//!   snapshots and scans
//! - **index**: key -> record, used for O(1) presence checks and reads
//! - **group index** (optional): group value -> ordered keys, used when a
//!   record type is queried by group often enough to keep a bucket per group
//!
//! Alongside them the catalog owns a set of named [`TagSets`]. Records union
//! their tag contributions into those sets when they are added, but tags are
//! never retracted when records leave, and the sets can be edited or cleared
//! independently of the records.
//!
//! Neither the sequence nor the index is exposed mutably, so the two cannot
//! diverge. Every mutating operation either fully applies or returns an error
//! without touching anything.

use crate::error::{CatalogError, CatalogResult};
use crate::group_index::{GroupIndex, GroupIndexStats};
use crate::tag_set::TagSets;
use roster_types::Record;
use serde::Serialize;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, instrument, warn};

/// In-memory catalog of records with a key index, an optional group index and
/// named tag sets.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "R: Serialize, R::Key: Serialize"))]
pub struct EntityCatalog<R: Record> {
    sequence: Vec<R>,
    #[serde(skip)]
    index: HashMap<R::Key, R>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<GroupIndex<R::Key>>,
    tags: TagSets,
}

impl<R: Record> Default for EntityCatalog<R> {
    fn default() -> Self {
        Self { sequence: Vec::new(), index: HashMap::new(), groups: None, tags: TagSets::new() }
    }
}

impl<R: Record> EntityCatalog<R> {
    /// Build a catalog without a group index.
    ///
    /// Group queries on such a catalog scan the sequence.
    pub fn new(records: impl IntoIterator<Item = R>) -> Self {
        Self::seeded(Self::default(), records)
    }

    /// Build a catalog that keeps a bucket of keys per group value
    pub fn with_group_index(records: impl IntoIterator<Item = R>) -> Self {
        Self::with_groups(std::iter::empty::<String>(), records)
    }

    /// Build a catalog with a group index whose buckets for `groups` exist
    /// before any record joins them
    pub fn with_groups<I, S>(groups: I, records: impl IntoIterator<Item = R>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let empty = Self { groups: Some(GroupIndex::with_groups(groups)), ..Self::default() };
        Self::seeded(empty, records)
    }

    #[instrument(skip_all, fields(kind = R::KIND))]
    fn seeded(mut catalog: Self, records: impl IntoIterator<Item = R>) -> Self {
        for record in records {
            if let Err(err) = catalog.add(record) {
                warn!(category = err.category(), "skipping seed record: {err}");
            }
        }
        debug!(records = catalog.len(), "catalog seeded");
        catalog
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[R] {
        &self.sequence
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.sequence.iter()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<R::Key> {
        self.sequence.iter().map(|record| record.key().clone()).collect()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        R::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Position of the first record with `key`, by linear scan
    pub fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        R::Key: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.sequence.iter().position(|record| record.key().borrow() == key)
    }

    /// O(1) lookup; `None` when the key is absent
    pub fn get<Q>(&self, key: &Q) -> Option<&R>
    where
        R::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key)
    }

    /// Insert a new record.
    ///
    /// Appends to the sequence, indexes the key (and its group, when a group
    /// index is kept) and unions the record's tags into the tag sets.
    pub fn add(&mut self, record: R) -> CatalogResult<()> {
        let key = record.key().clone();
        if self.index.contains_key(&key) {
            return Err(CatalogError::already_exists(R::KIND, &key));
        }

        if let (Some(groups), Some(group)) = (self.groups.as_mut(), record.group()) {
            groups.insert(group, key.clone());
        }
        for (set, value) in record.tags() {
            self.tags.add(set, value);
        }
        debug!(kind = R::KIND, key = %key, label = %record.label(), "record added");
        self.sequence.push(record.clone());
        self.index.insert(key, record);
        Ok(())
    }

    /// Remove the record with `key` and return it.
    ///
    /// Tags the record contributed stay in the tag sets.
    pub fn remove<Q>(&mut self, key: &Q) -> CatalogResult<R>
    where
        R::Key: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let record = self.index.remove(key).ok_or_else(|| CatalogError::not_found(R::KIND, key))?;

        if let (Some(groups), Some(group)) = (self.groups.as_mut(), record.group()) {
            groups.remove(group, record.key());
        }
        if let Some(pos) = self.find_index(key) {
            self.sequence.remove(pos);
        }
        debug!(kind = R::KIND, key = %key, label = %record.label(), "record removed");
        Ok(record)
    }

    /// Replace the record stored under `key`, returning the previous one.
    ///
    /// The record keeps its position in the sequence. When the group changes
    /// the key moves to the end of the new group's bucket. Tag sets are left
    /// as they are.
    pub fn update<Q>(&mut self, key: &Q, record: R) -> CatalogResult<R>
    where
        R::Key: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let Some(current) = self.index.get(key) else {
            return Err(CatalogError::not_found(R::KIND, key));
        };
        if record.key().borrow() != key {
            return Err(CatalogError::key_mismatch(R::KIND, key, record.key()));
        }

        // relocate before overwriting; the old group is only known from `current`
        if let Some(groups) = self.groups.as_mut() {
            match (current.group(), record.group()) {
                (Some(old), Some(new)) if old != new => {
                    groups.relocate(old, new, record.key().clone());
                }
                (Some(old), None) => {
                    groups.remove(old, record.key());
                }
                (None, Some(new)) => groups.insert(new, record.key().clone()),
                _ => {}
            }
        }

        if let Some(pos) = self.find_index(key) {
            self.sequence[pos] = record.clone();
        }
        debug!(kind = R::KIND, key = %key, label = %record.label(), "record updated");
        let previous = self.index.insert(record.key().clone(), record);
        previous.ok_or_else(|| CatalogError::not_found(R::KIND, key))
    }

    /// Insert every record of `other` whose key is not present yet.
    ///
    /// Colliding records are skipped: existing entries always win. Returns the
    /// number of records inserted.
    pub fn merge(&mut self, other: impl IntoIterator<Item = R>) -> usize {
        let mut inserted = 0;
        for record in other {
            if self.index.contains_key(record.key()) {
                debug!(kind = R::KIND, key = %record.key(), "merge kept existing record");
                continue;
            }
            if self.add(record).is_ok() {
                inserted += 1;
            }
        }
        inserted
    }

    /// Remove every record. Group buckets are emptied but keep their names;
    /// tag sets are untouched.
    pub fn clear(&mut self) {
        self.sequence.clear();
        self.index.clear();
        if let Some(groups) = self.groups.as_mut() {
            groups.reset_buckets();
        }
    }

    /// Whether this catalog keeps a bucket per group
    pub fn has_group_index(&self) -> bool {
        self.groups.is_some()
    }

    /// Keys of the records in `group`.
    ///
    /// Reads the bucket when a group index is kept, scans otherwise. Unknown
    /// groups yield an empty list.
    pub fn list_by_group(&self, group: &str) -> Vec<R::Key> {
        match &self.groups {
            Some(groups) => groups.bucket(group).to_vec(),
            None => self
                .sequence
                .iter()
                .filter(|record| record.group() == Some(group))
                .map(|record| record.key().clone())
                .collect(),
        }
    }

    /// Records in `group`, in sequence order
    pub fn records_by_group(&self, group: &str) -> Vec<&R> {
        self.sequence.iter().filter(|record| record.group() == Some(group)).collect()
    }

    pub fn count_by_group(&self, group: &str) -> usize {
        match &self.groups {
            Some(groups) => groups.bucket(group).len(),
            None => self.count_where(|record| record.group() == Some(group)),
        }
    }

    /// Ensure a bucket exists for `group`.
    ///
    /// Returns false if the bucket already existed or no group index is kept.
    pub fn register_group(&mut self, group: impl Into<String>) -> bool {
        self.groups.as_mut().is_some_and(|groups| groups.register(group))
    }

    /// Drop the bucket for `group`, returning the keys it held.
    ///
    /// Records in the group are not removed.
    pub fn remove_group(&mut self, group: &str) -> Option<Vec<R::Key>> {
        self.groups.as_mut().and_then(|groups| groups.remove_group(group))
    }

    /// `(group, keys)` for every bucket, empty when no group index is kept
    pub fn groups(&self) -> Vec<(&str, &[R::Key])> {
        self.groups.as_ref().map(|groups| groups.groups().collect()).unwrap_or_default()
    }

    pub fn group_stats(&self) -> Option<GroupIndexStats> {
        self.groups.as_ref().map(GroupIndex::stats)
    }

    /// Stable sort of a snapshot by `projection`.
    ///
    /// Values that cannot be ordered (NaN) compare equal, so they keep their
    /// relative position.
    pub fn sorted_by_key<T, F>(&self, projection: F) -> Vec<R>
    where
        T: PartialOrd,
        F: Fn(&R) -> T,
    {
        let mut snapshot = self.sequence.clone();
        snapshot.sort_by(|a, b| {
            projection(a).partial_cmp(&projection(b)).unwrap_or(Ordering::Equal)
        });
        snapshot
    }

    /// Snapshot of the sequence in reverse order
    pub fn reversed(&self) -> Vec<R> {
        reverse_of(&self.sequence)
    }

    /// `(max, min)` of `projection` over all records.
    ///
    /// Ties resolve to the first record reaching the extreme.
    pub fn min_max_by<T, F>(&self, projection: F) -> CatalogResult<(T, T)>
    where
        T: PartialOrd + Clone,
        F: Fn(&R) -> T,
    {
        let mut values = self.sequence.iter().map(&projection);
        let first = values.next().ok_or_else(|| CatalogError::empty(R::KIND))?;

        let (max, min) = values.fold((first.clone(), first), |(max, min), value| {
            let max = if value > max { value.clone() } else { max };
            let min = if value < min { value } else { min };
            (max, min)
        });
        Ok((max, min))
    }

    /// Number of records matching `predicate`
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&R) -> bool,
    {
        self.sequence.iter().filter(|record| predicate(record)).count()
    }

    /// Number of live records contributing `value` to tag set `set`
    pub fn count_tagged(&self, set: &str, value: &str) -> usize {
        self.count_where(|record| record.tags().iter().any(|&(s, v)| s == set && v == value))
    }

    pub fn tags(&self) -> &TagSets {
        &self.tags
    }

    pub fn add_tag(&mut self, set: &str, value: &str) -> bool {
        self.tags.add(set, value)
    }

    /// Discard `value` from `set`; absent values are ignored
    pub fn remove_tag(&mut self, set: &str, value: &str) -> bool {
        self.tags.remove(set, value)
    }

    pub fn list_tags(&self, set: &str) -> Vec<&str> {
        self.tags.list(set)
    }

    pub fn contains_tag(&self, set: &str, value: &str) -> bool {
        self.tags.contains(set, value)
    }

    pub fn intersect_tags<I, S>(&self, set: &str, other: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.intersection(set, other)
    }

    pub fn difference_tags<I, S>(&self, set: &str, baseline: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.difference(set, baseline)
    }

    /// Empty tag set `set`. Records keep the labels they carry.
    pub fn clear_tags(&mut self, set: &str) {
        self.tags.clear(set);
    }
}

impl<'a, R: Record> IntoIterator for &'a EntityCatalog<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reversed copy of `items`
pub fn reverse_of<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::Employee;
    use roster_types::employee::SKILLS;

    fn staff() -> EntityCatalog<Employee> {
        EntityCatalog::with_groups(
            ["HR", "IT", "Finance", "Marketing"],
            vec![
                Employee::new(1, "Alice", 30, "HR", ["Recruitment", "Training"]),
                Employee::new(2, "Bob", 25, "IT", ["Python", "Networking"]),
                Employee::new(3, "Charlie", 28, "Finance", ["Accounting", "Excel"]),
            ],
        )
    }

    #[test]
    fn test_seed_builds_all_views() {
        let catalog = staff();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.keys(), vec![1, 2, 3]);
        assert_eq!(catalog.list_by_group("IT"), vec![2]);
        assert_eq!(catalog.count_by_group("Marketing"), 0);
        assert_eq!(catalog.list_tags(SKILLS).len(), 6);
    }

    #[test]
    fn test_seed_skips_duplicate_keys() {
        let catalog = EntityCatalog::new(vec![
            Employee::new(1, "Alice", 30, "HR", ["Training"]),
            Employee::new(1, "Impostor", 99, "IT", ["Forgery"]),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&1).map(|e| e.name.as_str()), Some("Alice"));
        assert!(!catalog.tags().contains(SKILLS, "Forgery"));
    }

    #[test]
    fn test_update_in_place_keeps_position() {
        let mut catalog = staff();
        let moved = Employee::new(2, "Bob", 26, "Finance", ["Python", "Golang"]);

        let previous = catalog.update(&2, moved.clone()).unwrap();

        assert_eq!(previous.department, "IT");
        assert_eq!(catalog.find_index(&2), Some(1));
        assert_eq!(catalog.records()[1], moved);
        assert!(catalog.list_by_group("IT").is_empty());
        assert_eq!(catalog.list_by_group("Finance"), vec![3, 2]);
        // update never feeds the tag sets
        assert!(!catalog.tags().contains(SKILLS, "Golang"));
        assert_eq!(catalog.count_tagged(SKILLS, "Golang"), 1);
    }

    #[test]
    fn test_update_rejects_foreign_key() {
        let mut catalog = staff();
        let before = catalog.clone();

        let err = catalog.update(&2, Employee::new(9, "Bob", 26, "IT", ["Python"])).unwrap_err();

        assert_eq!(err, CatalogError::key_mismatch("employee", 2, 9));
        assert_eq!(catalog.records(), before.records());
        assert_eq!(catalog.groups(), before.groups());
    }

    #[test]
    fn test_scan_groups_match_bucket_groups() {
        let bucketed = staff();
        let scanned = EntityCatalog::new(bucketed.records().to_vec());

        assert!(!scanned.has_group_index());
        for group in ["HR", "IT", "Finance", "Marketing", "Legal"] {
            assert_eq!(bucketed.list_by_group(group), scanned.list_by_group(group));
            assert_eq!(bucketed.count_by_group(group), scanned.count_by_group(group));
        }
    }

    #[test]
    fn test_clear_resets_buckets_but_not_tags() {
        let mut catalog = staff();
        catalog.clear();

        assert!(catalog.is_empty());
        assert!(catalog.get(&1).is_none());
        assert_eq!(catalog.groups().len(), 4);
        assert!(catalog.groups().iter().all(|(_, keys)| keys.is_empty()));
        assert_eq!(catalog.list_tags(SKILLS).len(), 6);
    }

    #[test]
    fn test_min_max_on_empty_catalog_fails() {
        let catalog: EntityCatalog<Employee> = EntityCatalog::new(Vec::new());

        assert_eq!(
            catalog.min_max_by(|e| e.age),
            Err(CatalogError::empty("employee"))
        );
    }

    #[test]
    fn test_reverse_of_leaves_input_alone() {
        let departments = vec!["HR", "IT", "Finance"];
        assert_eq!(reverse_of(&departments), vec!["Finance", "IT", "HR"]);
        assert_eq!(departments, vec!["HR", "IT", "Finance"]);
    }
}
