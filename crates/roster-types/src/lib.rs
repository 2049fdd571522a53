//! Roster Types
//!
//! This crate defines the [`Record`] trait and the domain record structs used
//! throughout the Roster workspace (currently `roster-core` and `roster-cli`).
//! Keeping them here lets the catalog machinery stay generic while the
//! management systems share one definition of each entity.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod record;

/// Employee records
pub mod employee;
/// Patient, doctor and appointment records
pub mod hospital;
/// Product and supplier records
pub mod inventory;
/// Book records
pub mod library;
/// Menu item, staff and table records
pub mod restaurant;

pub use employee::Employee;
pub use hospital::{Appointment, Doctor, Patient};
pub use inventory::{Product, Supplier};
pub use library::Book;
pub use record::Record;
pub use restaurant::{MenuItem, StaffMember, Table};

use std::collections::BTreeSet;

/// Collect any iterable of string-likes into an ordered tag set.
///
/// Used by record constructors that take sets of labels (skills, medical
/// history) so callers can pass arrays of `&str` directly.
pub fn tag_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}
