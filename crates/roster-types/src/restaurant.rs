use crate::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Tag set fed by [`MenuItem::cuisine`].
pub const CUISINES: &str = "cuisines";
/// Tag set fed by [`StaffMember::role`].
pub const ROLES: &str = "roles";

/// A dish on the menu, grouped by cuisine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Menu item id
    pub id: u32,
    /// Dish name
    pub name: String,
    /// Cuisine label
    pub cuisine: String,
    /// Price
    pub price: f64,
    /// Whether the kitchen can currently serve it
    pub available: bool,
}

impl MenuItem {
    /// Build a menu item from borrowed parts.
    #[must_use]
    pub fn new(id: u32, name: &str, cuisine: &str, price: f64, available: bool) -> Self {
        Self { id, name: name.to_string(), cuisine: cuisine.to_string(), price, available }
    }
}

impl Record for MenuItem {
    type Key = u32;

    const KIND: &'static str = "menu item";

    fn key(&self) -> &u32 {
        &self.id
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn group(&self) -> Option<&str> {
        Some(self.cuisine.as_str())
    }

    fn tags(&self) -> Vec<(&'static str, &str)> {
        vec![(CUISINES, self.cuisine.as_str())]
    }
}

/// A staff member, grouped by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Staff id
    pub id: u32,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Job role
    pub role: String,
}

impl StaffMember {
    /// Build a staff member from borrowed parts.
    #[must_use]
    pub fn new(id: u32, name: &str, age: u32, role: &str) -> Self {
        Self { id, name: name.to_string(), age, role: role.to_string() }
    }
}

impl Record for StaffMember {
    type Key = u32;

    const KIND: &'static str = "staff member";

    fn key(&self) -> &u32 {
        &self.id
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn group(&self) -> Option<&str> {
        Some(self.role.as_str())
    }

    fn tags(&self) -> Vec<(&'static str, &str)> {
        vec![(ROLES, self.role.as_str())]
    }
}

/// A dining table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table number
    pub id: u32,
    /// Seats
    pub capacity: u32,
    /// Free for seating
    pub available: bool,
}

impl Table {
    /// Build a table.
    #[must_use]
    pub const fn new(id: u32, capacity: u32, available: bool) -> Self {
        Self { id, capacity, available }
    }
}

impl Record for Table {
    type Key = u32;

    const KIND: &'static str = "table";

    fn key(&self) -> &u32 {
        &self.id
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("table {}", self.id))
    }
}
