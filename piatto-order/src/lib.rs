pub mod checkout;
pub mod delivery;
pub mod models;
pub mod pricing;
pub mod registry;

pub use checkout::{checkout, CheckoutError};
pub use delivery::{
    available_methods, select_method, AddressSource, DeliverToAddress, DeliveryError,
    DeliveryMethod, Pickup, Resolution,
};
pub use models::{Category, DeliveryChoice, LineItem, Order};
pub use pricing::{PricingError, PricingStrategy, StandardPricing};
pub use registry::{BroadcastReport, Customer, NotifyError, OrderRegistry, Subscriber};
