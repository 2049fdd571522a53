//! Restaurant management: the menu, the staff roster and the dining tables

use crate::catalog::EntityCatalog;
use crate::error::CatalogResult;
use roster_types::restaurant::{CUISINES, ROLES};
use roster_types::{MenuItem, StaffMember, Table};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

/// Cuisines on the opening menu
pub const BASELINE_CUISINES: [&str; 4] = ["Italian", "Mexican", "Japanese", "American"];

fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Margherita Pizza", "Italian", 8.0, true),
        MenuItem::new(2, "Tacos", "Mexican", 5.0, true),
        MenuItem::new(3, "Sushi", "Japanese", 12.0, false),
        MenuItem::new(4, "Pasta Carbonara", "Italian", 10.0, true),
        MenuItem::new(5, "Burger", "American", 7.0, true),
    ]
}

fn seed_staff() -> Vec<StaffMember> {
    vec![
        StaffMember::new(101, "Alice", 30, "Chef"),
        StaffMember::new(102, "Bob", 25, "Waiter"),
        StaffMember::new(103, "Charlie", 28, "Manager"),
        StaffMember::new(104, "Diana", 35, "Waiter"),
        StaffMember::new(105, "Eve", 40, "Chef"),
    ]
}

fn seed_tables() -> Vec<Table> {
    vec![
        Table::new(1, 4, true),
        Table::new(2, 2, false),
        Table::new(3, 6, true),
        Table::new(4, 4, true),
        Table::new(5, 2, true),
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct RestaurantManagement {
    menu: EntityCatalog<MenuItem>,
    staff: EntityCatalog<StaffMember>,
    tables: EntityCatalog<Table>,
}

impl Default for RestaurantManagement {
    fn default() -> Self {
        Self::new()
    }
}

impl RestaurantManagement {
    pub fn new() -> Self {
        Self::with_records(seed_menu(), seed_staff(), seed_tables())
    }

    pub fn with_records(menu: Vec<MenuItem>, staff: Vec<StaffMember>, tables: Vec<Table>) -> Self {
        Self {
            menu: EntityCatalog::new(menu),
            staff: EntityCatalog::new(staff),
            tables: EntityCatalog::new(tables),
        }
    }

    pub fn menu(&self) -> &EntityCatalog<MenuItem> {
        &self.menu
    }

    pub fn staff(&self) -> &EntityCatalog<StaffMember> {
        &self.staff
    }

    pub fn tables(&self) -> &EntityCatalog<Table> {
        &self.tables
    }

    pub fn find_menu_item_index(&self, id: u32) -> Option<usize> {
        self.menu.find_index(&id)
    }

    pub fn find_staff_index(&self, id: u32) -> Option<usize> {
        self.staff.find_index(&id)
    }

    pub fn sort_menu_items_by_price(&self) -> Vec<MenuItem> {
        self.menu.sorted_by_key(|item| item.price)
    }

    pub fn sort_staff_by_age(&self) -> Vec<StaffMember> {
        self.staff.sorted_by_key(|member| member.age)
    }

    pub fn reverse_tables(&self) -> Vec<Table> {
        self.tables.reversed()
    }

    /// `(max, min)` menu price
    pub fn find_max_min_price(&self) -> CatalogResult<(f64, f64)> {
        self.menu.min_max_by(|item| item.price)
    }

    pub fn find_max_min_age_staff(&self) -> CatalogResult<(u32, u32)> {
        self.staff.min_max_by(|member| member.age)
    }

    pub fn count_cuisine_occurrences(&self, cuisine: &str) -> usize {
        self.menu.count_where(|item| item.cuisine == cuisine)
    }

    pub fn add_cuisine(&mut self, cuisine: &str) {
        self.menu.add_tag(CUISINES, cuisine);
        info!(cuisine, "cuisine added");
    }

    pub fn remove_cuisine(&mut self, cuisine: &str) {
        self.menu.remove_tag(CUISINES, cuisine);
        info!(cuisine, "cuisine removed");
    }

    pub fn list_all_cuisines(&self) -> Vec<&str> {
        self.menu.list_tags(CUISINES)
    }

    pub fn add_role(&mut self, role: &str) {
        self.staff.add_tag(ROLES, role);
        info!(role, "role added");
    }

    pub fn remove_role(&mut self, role: &str) {
        self.staff.remove_tag(ROLES, role);
        info!(role, "role removed");
    }

    pub fn list_all_roles(&self) -> Vec<&str> {
        self.staff.list_tags(ROLES)
    }

    pub fn find_common_cuisines<I, S>(&self, other: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.menu.intersect_tags(CUISINES, other)
    }

    pub fn find_unique_cuisines(&self) -> BTreeSet<String> {
        self.menu.difference_tags(CUISINES, BASELINE_CUISINES)
    }

    pub fn clear_cuisines(&mut self) {
        self.menu.clear_tags(CUISINES);
        info!("all cuisines cleared");
    }

    pub fn add_menu_item(&mut self, item: MenuItem) -> CatalogResult<()> {
        let (id, name) = (item.id, item.name.clone());
        self.menu.add(item).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, %name, "menu item added");
        Ok(())
    }

    pub fn remove_menu_item(&mut self, id: u32) -> CatalogResult<MenuItem> {
        let removed = self.menu.remove(&id).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, name = %removed.name, "menu item removed");
        Ok(removed)
    }

    pub fn get_menu_item_details(&self, id: u32) -> Option<&MenuItem> {
        self.menu.get(&id)
    }

    pub fn list_menu_items_by_cuisine(&self, cuisine: &str) -> Vec<&MenuItem> {
        self.menu.records_by_group(cuisine)
    }

    pub fn count_menu_items_by_cuisine(&self, cuisine: &str) -> usize {
        self.menu.count_by_group(cuisine)
    }

    pub fn add_staff(&mut self, member: StaffMember) -> CatalogResult<()> {
        let (id, name) = (member.id, member.name.clone());
        self.staff.add(member).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, %name, "staff member added");
        Ok(())
    }

    pub fn remove_staff(&mut self, id: u32) -> CatalogResult<StaffMember> {
        let removed = self.staff.remove(&id).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, name = %removed.name, "staff member removed");
        Ok(removed)
    }

    pub fn get_staff_details(&self, id: u32) -> Option<&StaffMember> {
        self.staff.get(&id)
    }

    pub fn list_staff_by_role(&self, role: &str) -> Vec<&StaffMember> {
        self.staff.records_by_group(role)
    }

    pub fn count_staff_by_role(&self, role: &str) -> usize {
        self.staff.count_by_group(role)
    }

    pub fn update_menu_item_details(&mut self, id: u32, details: MenuItem) -> CatalogResult<()> {
        self.menu.update(&id, details).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, "menu item details updated");
        Ok(())
    }

    pub fn update_staff_details(&mut self, id: u32, details: StaffMember) -> CatalogResult<()> {
        self.staff.update(&id, details).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, "staff details updated");
        Ok(())
    }

    pub fn merge_menu_catalogs(&mut self, other: impl IntoIterator<Item = MenuItem>) -> usize {
        let inserted = self.menu.merge(other);
        info!(inserted, "menu catalogs merged");
        inserted
    }

    pub fn merge_staff_catalogs(&mut self, other: impl IntoIterator<Item = StaffMember>) -> usize {
        let inserted = self.staff.merge(other);
        info!(inserted, "staff catalogs merged");
        inserted
    }

    pub fn get_all_menu_item_ids(&self) -> Vec<u32> {
        self.menu.keys()
    }

    pub fn get_all_staff_ids(&self) -> Vec<u32> {
        self.staff.keys()
    }

    /// Table id -> free for seating
    pub fn table_assignments(&self) -> BTreeMap<u32, bool> {
        self.tables.iter().map(|table| (table.id, table.available)).collect()
    }

    /// Mark a table free or taken
    pub fn set_table_availability(&mut self, id: u32, available: bool) -> CatalogResult<()> {
        let capacity = self.tables.get(&id).map_or(0, |table| table.capacity);
        self.tables
            .update(&id, Table::new(id, capacity, available))
            .inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, available, "table availability changed");
        Ok(())
    }

    pub fn clear_menu_catalog(&mut self) {
        self.menu.clear();
        info!("menu catalog cleared");
    }

    pub fn clear_staff_catalog(&mut self) {
        self.staff.clear();
        info!("staff catalog cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_price_extremes() {
        let restaurant = RestaurantManagement::new();

        assert_eq!(restaurant.find_max_min_price(), Ok((12.0, 5.0)));
        assert_eq!(restaurant.find_max_min_age_staff(), Ok((40, 25)));
        assert_eq!(restaurant.sort_menu_items_by_price()[0].name, "Tacos");
    }

    #[test]
    fn test_new_cuisine_is_unique() {
        let mut restaurant = RestaurantManagement::new();

        restaurant.add_menu_item(MenuItem::new(6, "Pho", "Vietnamese", 9.0, true)).unwrap();

        assert_eq!(restaurant.count_menu_items_by_cuisine("Vietnamese"), 1);
        assert_eq!(
            restaurant.find_unique_cuisines().into_iter().collect::<Vec<_>>(),
            vec!["Vietnamese"]
        );
        assert_eq!(
            restaurant.add_menu_item(MenuItem::new(6, "Pho", "Vietnamese", 9.0, true)),
            Err(CatalogError::already_exists("menu item", 6))
        );
    }

    #[test]
    fn test_table_assignments_follow_tables() {
        let mut restaurant = RestaurantManagement::new();

        assert_eq!(restaurant.table_assignments().get(&2), Some(&false));
        restaurant.set_table_availability(2, true).unwrap();
        assert_eq!(restaurant.table_assignments().get(&2), Some(&true));
        assert_eq!(restaurant.tables().get(&2).map(|t| t.capacity), Some(2));
        assert!(restaurant.set_table_availability(9, true).is_err());
    }

    #[test]
    fn test_staff_by_role() {
        let mut restaurant = RestaurantManagement::new();

        assert_eq!(restaurant.count_staff_by_role("Waiter"), 2);
        restaurant.update_staff_details(102, StaffMember::new(102, "Bob", 26, "Manager")).unwrap();
        assert_eq!(restaurant.count_staff_by_role("Waiter"), 1);
        let managers: Vec<_> =
            restaurant.list_staff_by_role("Manager").iter().map(|m| m.id).collect();
        assert_eq!(managers, vec![102, 103]);
    }
}
