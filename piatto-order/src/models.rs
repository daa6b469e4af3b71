use chrono::{DateTime, Utc};
use piatto_catalog::CatalogItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Menu categories a line item can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Pizza,
    Drink,
    Snack,
    Coffee,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Pizza,
        Category::Drink,
        Category::Snack,
        Category::Coffee,
        Category::Dessert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Pizza => "Pizza",
            Category::Drink => "Drink",
            Category::Snack => "Snack",
            Category::Coffee => "Coffee",
            Category::Dessert => "Dessert",
        }
    }
}

/// How a finalized order reaches the customer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryChoice {
    ToAddress,
    Pickup,
}

/// A catalog item copy placed into an order, possibly modifier-transformed
/// before placement. Owned exclusively by its order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub category: Category,
    pub name: String,
    pub price_cents: i64,
}

impl LineItem {
    pub fn from_catalog(category: Category, item: CatalogItem) -> Self {
        Self {
            category,
            name: item.name,
            price_cents: item.price_cents,
        }
    }
}

/// A customer's order under composition. Mutable while items are being
/// selected; logically immutable once the total is computed and a delivery
/// choice is resolved, at which point it is handed to the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    items: Vec<LineItem>,
    pub address: Option<String>,
    pub total_cents: i64,
    pub delivery: Option<DeliveryChoice>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            items: Vec::new(),
            address: None,
            total_cents: 0,
            delivery: None,
            created_at: Utc::now(),
        }
    }

    /// Add a selected item under its category. The stored total is not
    /// touched here: totals are always recomputed by a pricing strategy over
    /// the current items, never incrementally patched, so a modifier applied
    /// before placement can never leave a stale sum behind.
    pub fn add_line_item(&mut self, category: Category, item: CatalogItem) {
        self.items.push(LineItem::from_catalog(category, item));
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }

    /// Line items in category order, preserving insertion order within each
    /// category.
    pub fn items(&self) -> Vec<&LineItem> {
        let mut grouped = Vec::with_capacity(self.items.len());
        for category in Category::ALL {
            grouped.extend(self.items.iter().filter(|i| i.category == category));
        }
        grouped
    }

    /// Line items of a single category, in insertion order.
    pub fn items_in(&self, category: Category) -> Vec<&LineItem> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line item prices across every category, before discount.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.price_cents).sum()
    }

    /// An order is complete once it has a computed total and exactly one
    /// delivery resolution.
    pub fn is_finalized(&self) -> bool {
        self.delivery.is_some()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
