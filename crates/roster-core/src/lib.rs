#![allow(missing_docs)]
//! Core functionality for roster catalogs.
//!
//! This crate provides the generic [`EntityCatalog`] (an insertion-ordered
//! record store with a key index, an optional group index and named tag sets)
//! and the five management systems built on top of it.

use tracing::{debug, instrument};

/// Generic record catalog keeping sequence, index and groups in step
pub mod catalog;
/// Catalog error types
pub mod error;
/// Group value -> ordered key buckets
pub mod group_index;
/// Employee, hospital, inventory, library and restaurant management
pub mod systems;
/// Named sets of string labels
pub mod tag_set;

pub use catalog::{EntityCatalog, reverse_of};
pub use error::{CatalogError, CatalogResult};
pub use group_index::{GroupIndex, GroupIndexStats};
pub use systems::{
    EmployeeManagement, HospitalManagement, InventoryManagement, LibraryManagement,
    RestaurantManagement,
};
pub use tag_set::TagSets;

pub use roster_types::Record;

/// Initialize the core components
#[instrument]
pub fn init() -> anyhow::Result<()> {
    debug!("Initializing roster core");
    Ok(())
}
