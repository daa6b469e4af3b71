use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A priced entry in the fixed menu. Immutable once the catalog is built;
/// lookups hand out copies, never references into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: String,
    pub price_cents: i64,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, price_cents: i64) -> Self {
        debug_assert!(price_cents >= 0, "catalog prices are non-negative");
        Self {
            name: name.into(),
            price_cents,
        }
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Item not found: {0}")]
    NotFound(String),
}

/// Static name→item lookup table. Built eagerly at startup and read-only
/// afterwards. An absent name is a `NotFound` error, not a zero price: the
/// catalog distinguishes "we don't sell that" from "that is free".
#[derive(Debug, Clone)]
pub struct Catalog {
    items: HashMap<String, CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.name.clone(), item))
            .collect();
        Self { items }
    }

    /// The fixed pizzeria menu.
    pub fn standard() -> Self {
        Self::new(vec![
            CatalogItem::new("Pepperoni Pizza", 1700),
            CatalogItem::new("Cheese Pizza", 1500),
            CatalogItem::new("4 Season Pizza", 1900),
            CatalogItem::new("Coca-cola", 600),
            CatalogItem::new("Water", 400),
            CatalogItem::new("French Fries", 600),
            CatalogItem::new("Country Potatoes", 800),
            CatalogItem::new("Cappuccino", 790),
            CatalogItem::new("Latte", 890),
            CatalogItem::new("Tiramisu", 1350),
            CatalogItem::new("Brownie", 900),
        ])
    }

    /// Look up an item by exact name. Returns a copy owned by the caller.
    pub fn lookup(&self, name: &str) -> Result<CatalogItem, CatalogError> {
        self.items
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// All items in the catalog, sorted by name for stable display.
    pub fn items(&self) -> Vec<CatalogItem> {
        let mut items: Vec<CatalogItem> = self.items.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
