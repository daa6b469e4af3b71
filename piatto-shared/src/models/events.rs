use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OrderPlacedEvent {
    pub order_id: Uuid,
    pub item_count: usize,
    pub total_cents: i64,
    pub delivery: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct PromoBroadcastEvent {
    pub message: String,
    pub subscriber_count: usize,
    pub failed_count: usize,
    pub timestamp: i64,
}
