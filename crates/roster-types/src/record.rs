use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

/// A single entity stored in a catalog.
///
/// A record owns one identifying field (its key), optionally one grouping
/// field, and zero or more values it contributes to named tag sets. Records are
/// treated as immutable values: catalogs replace them wholesale on update.
pub trait Record: Clone + fmt::Debug {
    /// Unique identifier type (integer ids, book titles).
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// Human readable entity name, used in errors and status lines.
    const KIND: &'static str;

    /// The identifying field.
    fn key(&self) -> &Self::Key;

    /// Display name of this record (employee name, book title, ...).
    fn label(&self) -> Cow<'_, str>;

    /// Value of the grouping field, for record types that have one.
    fn group(&self) -> Option<&str> {
        None
    }

    /// `(set_name, value)` pairs this record contributes to named tag sets.
    fn tags(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}
