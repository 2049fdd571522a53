//! Management systems built on [`EntityCatalog`](crate::EntityCatalog)
//!
//! Each system owns the catalogs for one business domain, seeds them with a
//! small fixed data set and exposes the domain operations by name. Mutations
//! log their outcome through `tracing`; failures come back as
//! [`CatalogError`](crate::CatalogError) with the system left unchanged.

/// Employees, departments and skills
pub mod employee;
/// Patients, doctors and appointments
pub mod hospital;
/// Products, suppliers and stock levels
pub mod inventory;
/// Books, members and checkouts
pub mod library;
/// Menu, staff and tables
pub mod restaurant;

pub use employee::EmployeeManagement;
pub use hospital::HospitalManagement;
pub use inventory::InventoryManagement;
pub use library::LibraryManagement;
pub use restaurant::RestaurantManagement;
