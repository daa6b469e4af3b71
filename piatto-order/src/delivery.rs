use crate::models::{DeliveryChoice, Order};

/// Delivery-related errors
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Delivery option {selected} is out of range (1-{available})")]
    InvalidSelection { selected: usize, available: usize },
}

/// Where an address comes from when a delivery method needs one. The core
/// never reads stdin itself; the surrounding collaborator implements this.
pub trait AddressSource {
    /// `None` means the customer supplied nothing usable.
    fn read_address(&mut self) -> Option<String>;
}

/// Outcome of resolving a delivery method against an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub choice: DeliveryChoice,
    pub address_requested: bool,
}

/// Pluggable finalization step: a human label plus a resolution that may
/// mutate the order's address.
pub trait DeliveryMethod: Send + Sync {
    fn describe(&self) -> String;
    fn resolve(&self, order: &mut Order, input: &mut dyn AddressSource) -> Resolution;
}

/// Deliver to the customer's address. Asks the input collaborator for an
/// address; if none is supplied the order's address simply stays empty
/// rather than failing the checkout.
pub struct DeliverToAddress;

impl DeliveryMethod for DeliverToAddress {
    fn describe(&self) -> String {
        "Deliver to address".to_string()
    }

    fn resolve(&self, order: &mut Order, input: &mut dyn AddressSource) -> Resolution {
        match input.read_address() {
            Some(address) => order.set_address(address),
            None => {
                tracing::warn!(order_id = %order.id, "no address supplied, leaving it empty");
            }
        }
        order.delivery = Some(DeliveryChoice::ToAddress);
        Resolution {
            choice: DeliveryChoice::ToAddress,
            address_requested: true,
        }
    }
}

/// Pick up at the counter. Acknowledgment only.
pub struct Pickup;

impl DeliveryMethod for Pickup {
    fn describe(&self) -> String {
        "Pick up at the pizzeria".to_string()
    }

    fn resolve(&self, order: &mut Order, _input: &mut dyn AddressSource) -> Resolution {
        order.delivery = Some(DeliveryChoice::Pickup);
        Resolution {
            choice: DeliveryChoice::Pickup,
            address_requested: false,
        }
    }
}

/// The ordered list of delivery methods offered at checkout.
pub fn available_methods() -> Vec<Box<dyn DeliveryMethod>> {
    vec![Box::new(DeliverToAddress), Box::new(Pickup)]
}

/// Select a method by 1-based ordinal, as presented to the customer. An
/// out-of-range ordinal aborts the checkout attempt.
pub fn select_method(
    methods: &[Box<dyn DeliveryMethod>],
    ordinal: usize,
) -> Result<&dyn DeliveryMethod, DeliveryError> {
    if ordinal == 0 || ordinal > methods.len() {
        return Err(DeliveryError::InvalidSelection {
            selected: ordinal,
            available: methods.len(),
        });
    }
    Ok(methods[ordinal - 1].as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAddress(Option<String>);

    impl AddressSource for FixedAddress {
        fn read_address(&mut self) -> Option<String> {
            self.0.take()
        }
    }

    #[test]
    fn test_deliver_to_address_stores_address() {
        let mut order = Order::new();
        let mut input = FixedAddress(Some("12 Baker Street".to_string()));

        let resolution = DeliverToAddress.resolve(&mut order, &mut input);

        assert!(resolution.address_requested);
        assert_eq!(order.address.as_deref(), Some("12 Baker Street"));
        assert_eq!(order.delivery, Some(DeliveryChoice::ToAddress));
        assert!(order.is_finalized());
    }

    #[test]
    fn test_missing_address_fails_softly() {
        let mut order = Order::new();
        let mut input = FixedAddress(None);

        DeliverToAddress.resolve(&mut order, &mut input);

        assert_eq!(order.address, None);
        assert_eq!(order.delivery, Some(DeliveryChoice::ToAddress));
    }

    #[test]
    fn test_pickup_does_not_touch_address() {
        let mut order = Order::new();
        let mut input = FixedAddress(Some("should not be read".to_string()));

        let resolution = Pickup.resolve(&mut order, &mut input);

        assert!(!resolution.address_requested);
        assert_eq!(order.address, None);
        assert_eq!(order.delivery, Some(DeliveryChoice::Pickup));
    }

    #[test]
    fn test_select_method_by_ordinal() {
        let methods = available_methods();
        assert_eq!(methods.len(), 2);
        assert_eq!(select_method(&methods, 1).unwrap().describe(), "Deliver to address");
        assert_eq!(select_method(&methods, 2).unwrap().describe(), "Pick up at the pizzeria");
    }

    #[test]
    fn test_out_of_range_ordinal_is_rejected() {
        let methods = available_methods();
        assert!(matches!(
            select_method(&methods, 3),
            Err(DeliveryError::InvalidSelection { selected: 3, available: 2 })
        ));
        assert!(select_method(&methods, 0).is_err());
    }
}
