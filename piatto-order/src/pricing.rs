use crate::models::Order;

/// Pricing-related errors
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Discount factor {0} is outside [0, 1]")]
    InvalidDiscount(f64),
}

/// Pluggable total-computation algorithm. Implementations must be stateless
/// with respect to the order: computing the same unchanged order twice yields
/// the same result, and the order never learns which strategy ran.
pub trait PricingStrategy: Send + Sync {
    fn compute_total(&self, order: &Order, discount: f64) -> Result<i64, PricingError>;
}

/// Sums every line item across all categories, then applies the discount
/// factor. A factor outside [0, 1] is a caller error and is surfaced, not
/// clamped.
#[derive(Debug, Clone, Default)]
pub struct StandardPricing;

impl PricingStrategy for StandardPricing {
    fn compute_total(&self, order: &Order, discount: f64) -> Result<i64, PricingError> {
        if !(0.0..=1.0).contains(&discount) {
            return Err(PricingError::InvalidDiscount(discount));
        }

        let subtotal = order.subtotal_cents();
        Ok((subtotal as f64 * (1.0 - discount)).round() as i64)
    }
}
