use crate::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Tag set fed by [`Product::category`].
pub const CATEGORIES: &str = "categories";
/// Tag set fed by [`Product::name`].
pub const PRODUCT_NAMES: &str = "product_names";

/// A stocked product, grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: u32,
    /// Product name
    pub name: String,
    /// Category label
    pub category: String,
    /// Supplier providing the product
    pub supplier_id: u32,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock: u32,
}

impl Product {
    /// Build a product from borrowed parts.
    #[must_use]
    pub fn new(id: u32, name: &str, category: &str, supplier_id: u32, price: f64, stock: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            supplier_id,
            price,
            stock,
        }
    }
}

impl Record for Product {
    type Key = u32;

    const KIND: &'static str = "product";

    fn key(&self) -> &u32 {
        &self.id
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn group(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn tags(&self) -> Vec<(&'static str, &str)> {
        vec![(CATEGORIES, self.category.as_str()), (PRODUCT_NAMES, self.name.as_str())]
    }
}

/// A supplier of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier id
    pub id: u32,
    /// Company name
    pub name: String,
    /// Phone contact
    pub contact: String,
}

impl Supplier {
    /// Build a supplier from borrowed parts.
    #[must_use]
    pub fn new(id: u32, name: &str, contact: &str) -> Self {
        Self { id, name: name.to_string(), contact: contact.to_string() }
    }
}

impl Record for Supplier {
    type Key = u32;

    const KIND: &'static str = "supplier";

    fn key(&self) -> &u32 {
        &self.id
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }
}
