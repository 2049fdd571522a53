//! Inventory management: products and their suppliers
//!
//! Stock levels are read straight off the product records rather than kept in
//! a side table, so updating a product is the only way to change its stock.

use crate::catalog::EntityCatalog;
use crate::error::CatalogResult;
use roster_types::inventory::{CATEGORIES, PRODUCT_NAMES};
use roster_types::{Product, Supplier};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Categories carried since the store opened
pub const BASELINE_CATEGORIES: [&str; 3] = ["Electronics", "Furniture", "Stationery"];

fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", "Electronics", 101, 1000.0, 50),
        Product::new(2, "Smartphone", "Electronics", 102, 500.0, 200),
        Product::new(3, "Desk Chair", "Furniture", 103, 150.0, 100),
        Product::new(4, "Notebook", "Stationery", 104, 2.0, 500),
        Product::new(5, "Pen", "Stationery", 104, 1.0, 1000),
    ]
}

fn seed_suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new(101, "Tech Supplies Inc.", "123-456-7890"),
        Supplier::new(102, "Mobile World", "234-567-8901"),
        Supplier::new(103, "Office Furniture Co.", "345-678-9012"),
        Supplier::new(104, "Stationery Hub", "456-789-0123"),
    ]
}

/// Products, suppliers and the category/name tag sets
#[derive(Debug, Clone, Serialize)]
pub struct InventoryManagement {
    products: EntityCatalog<Product>,
    suppliers: EntityCatalog<Supplier>,
}

impl Default for InventoryManagement {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryManagement {
    pub fn new() -> Self {
        Self::with_records(seed_products(), seed_suppliers())
    }

    pub fn with_records(products: Vec<Product>, suppliers: Vec<Supplier>) -> Self {
        Self { products: EntityCatalog::new(products), suppliers: EntityCatalog::new(suppliers) }
    }

    pub fn products(&self) -> &EntityCatalog<Product> {
        &self.products
    }

    pub fn suppliers(&self) -> &EntityCatalog<Supplier> {
        &self.suppliers
    }

    pub fn find_product_index(&self, id: u32) -> Option<usize> {
        self.products.find_index(&id)
    }

    pub fn find_supplier_index(&self, id: u32) -> Option<usize> {
        self.suppliers.find_index(&id)
    }

    pub fn sort_products_by_price(&self) -> Vec<Product> {
        self.products.sorted_by_key(|p| p.price)
    }

    pub fn reverse_suppliers(&self) -> Vec<Supplier> {
        self.suppliers.reversed()
    }

    /// `(max, min)` unit price
    pub fn find_max_min_price(&self) -> CatalogResult<(f64, f64)> {
        self.products.min_max_by(|p| p.price)
    }

    pub fn count_category_occurrences(&self, category: &str) -> usize {
        self.products.count_where(|p| p.category == category)
    }

    pub fn add_category(&mut self, category: &str) {
        self.products.add_tag(CATEGORIES, category);
        info!(category, "category added");
    }

    pub fn remove_category(&mut self, category: &str) {
        self.products.remove_tag(CATEGORIES, category);
        info!(category, "category removed");
    }

    pub fn list_all_categories(&self) -> Vec<&str> {
        self.products.list_tags(CATEGORIES)
    }

    pub fn add_product_name(&mut self, name: &str) {
        self.products.add_tag(PRODUCT_NAMES, name);
        info!(name, "product name added");
    }

    pub fn remove_product_name(&mut self, name: &str) {
        self.products.remove_tag(PRODUCT_NAMES, name);
        info!(name, "product name removed");
    }

    pub fn list_all_product_names(&self) -> Vec<&str> {
        self.products.list_tags(PRODUCT_NAMES)
    }

    pub fn find_common_categories<I, S>(&self, other: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.products.intersect_tags(CATEGORIES, other)
    }

    pub fn find_unique_categories(&self) -> BTreeSet<String> {
        self.products.difference_tags(CATEGORIES, BASELINE_CATEGORIES)
    }

    pub fn clear_categories(&mut self) {
        self.products.clear_tags(CATEGORIES);
        info!("all categories cleared");
    }

    pub fn add_product(&mut self, product: Product) -> CatalogResult<()> {
        let (id, name) = (product.id, product.name.clone());
        self.products.add(product).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, %name, "product added");
        Ok(())
    }

    pub fn remove_product(&mut self, id: u32) -> CatalogResult<Product> {
        let removed = self.products.remove(&id).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, name = %removed.name, "product removed");
        Ok(removed)
    }

    pub fn get_product_details(&self, id: u32) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn list_products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products.records_by_group(category)
    }

    pub fn count_products_by_category(&self, category: &str) -> usize {
        self.products.count_by_group(category)
    }

    pub fn add_supplier(&mut self, supplier: Supplier) -> CatalogResult<()> {
        let (id, name) = (supplier.id, supplier.name.clone());
        self.suppliers.add(supplier).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, %name, "supplier added");
        Ok(())
    }

    pub fn remove_supplier(&mut self, id: u32) -> CatalogResult<Supplier> {
        let removed = self.suppliers.remove(&id).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, name = %removed.name, "supplier removed");
        Ok(removed)
    }

    pub fn get_supplier_details(&self, id: u32) -> Option<&Supplier> {
        self.suppliers.get(&id)
    }

    pub fn update_product_details(&mut self, id: u32, details: Product) -> CatalogResult<()> {
        self.products.update(&id, details).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, "product details updated");
        Ok(())
    }

    pub fn update_supplier_details(&mut self, id: u32, details: Supplier) -> CatalogResult<()> {
        self.suppliers.update(&id, details).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, "supplier details updated");
        Ok(())
    }

    pub fn merge_product_catalogs(&mut self, other: impl IntoIterator<Item = Product>) -> usize {
        let inserted = self.products.merge(other);
        info!(inserted, "product catalogs merged");
        inserted
    }

    pub fn merge_supplier_catalogs(&mut self, other: impl IntoIterator<Item = Supplier>) -> usize {
        let inserted = self.suppliers.merge(other);
        info!(inserted, "supplier catalogs merged");
        inserted
    }

    pub fn get_all_product_ids(&self) -> Vec<u32> {
        self.products.keys()
    }

    pub fn get_all_supplier_ids(&self) -> Vec<u32> {
        self.suppliers.keys()
    }

    /// `(product id, units in stock)` in catalog order
    pub fn stock_levels(&self) -> Vec<(u32, u32)> {
        self.products.iter().map(|p| (p.id, p.stock)).collect()
    }

    pub fn stock_level(&self, id: u32) -> Option<u32> {
        self.products.get(&id).map(|p| p.stock)
    }

    pub fn clear_product_catalog(&mut self) {
        self.products.clear();
        info!("product catalog cleared");
    }

    pub fn clear_supplier_catalog(&mut self) {
        self.suppliers.clear();
        info!("supplier catalog cleared");
    }
}
