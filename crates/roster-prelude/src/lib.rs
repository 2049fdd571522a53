//! Roster Prelude
//!
//! This crate re-exports the most frequently used public items from the Roster
//! workspace (currently `roster-core` and `roster-types`). Down-stream
//! applications can depend on `roster-prelude` to avoid long import lists and
//! to stay insulated from internal module reshuffles.

#![deny(missing_docs)]

// Catalog machinery ---------------------------------------------------------------------------

pub use roster_core::{
    CatalogError, CatalogResult, EntityCatalog, GroupIndexStats, TagSets,
};

// Management systems --------------------------------------------------------------------------

pub use roster_core::{
    EmployeeManagement, HospitalManagement, InventoryManagement, LibraryManagement,
    RestaurantManagement,
};

// Record trait & domain records ---------------------------------------------------------------

pub use roster_types::{
    Appointment, Book, Doctor, Employee, MenuItem, Patient, Product, Record, StaffMember,
    Supplier, Table,
};
