pub mod menu;
pub mod modifier;

pub use menu::{Catalog, CatalogError, CatalogItem};
pub use modifier::{extra_cheese, ExtraTopping, ItemModifier};
