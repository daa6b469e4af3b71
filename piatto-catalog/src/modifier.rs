use crate::menu::CatalogItem;

/// A pure transformation of a priced item: adjusted name, adjusted price,
/// nothing else. Modifiers must compose — an implementation may never assume
/// it is the first in a chain, so every `apply` starts from the incoming
/// item's name and price.
pub trait ItemModifier: Send + Sync {
    fn apply(&self, item: &CatalogItem) -> CatalogItem;
}

/// Adds a topping: appends a description to the item name and a surcharge to
/// its price.
#[derive(Debug, Clone)]
pub struct ExtraTopping {
    pub label: String,
    pub surcharge_cents: i64,
}

impl ExtraTopping {
    pub fn new(label: impl Into<String>, surcharge_cents: i64) -> Self {
        Self {
            label: label.into(),
            surcharge_cents,
        }
    }
}

impl ItemModifier for ExtraTopping {
    fn apply(&self, item: &CatalogItem) -> CatalogItem {
        CatalogItem {
            name: format!("{}, with {}", item.name, self.label),
            price_cents: item.price_cents + self.surcharge_cents,
        }
    }
}

/// The extra-cheese topping from the standard menu.
pub fn extra_cheese() -> ExtraTopping {
    ExtraTopping::new("extra cheese", 200)
}
