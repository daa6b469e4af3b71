use crate::delivery::{available_methods, select_method, AddressSource, DeliveryError};
use crate::models::Order;
use crate::pricing::{PricingError, PricingStrategy};
use crate::registry::OrderRegistry;
use piatto_shared::OrderPlacedEvent;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Finalize an order: compute its total with the given strategy, resolve the
/// delivery method selected by 1-based ordinal, and record the order in the
/// registry. Any failure discards the order; it never reaches the registry.
pub fn checkout(
    mut order: Order,
    strategy: &dyn PricingStrategy,
    discount: f64,
    delivery_ordinal: usize,
    input: &mut dyn AddressSource,
    registry: &OrderRegistry,
) -> Result<Order, CheckoutError> {
    order.total_cents = strategy.compute_total(&order, discount)?;

    let methods = available_methods();
    let method = select_method(&methods, delivery_ordinal)?;
    let resolution = method.resolve(&mut order, input);

    let event = OrderPlacedEvent {
        order_id: order.id,
        item_count: order.item_count(),
        total_cents: order.total_cents,
        delivery: format!("{:?}", resolution.choice),
        timestamp: chrono::Utc::now().timestamp(),
    };
    tracing::info!(
        event = %serde_json::to_string(&event).unwrap_or_default(),
        "order placed"
    );

    registry.add_order(order.clone());
    Ok(order)
}
