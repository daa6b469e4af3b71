pub mod models;

pub use models::events::{OrderPlacedEvent, PromoBroadcastEvent};
