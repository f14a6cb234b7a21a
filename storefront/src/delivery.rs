//! Delivery eligibility rule
//!
//! Delivery is only offered for orders of more than two bottles. The selection
//! state machine has two states, `Pickup` (initial) and `Delivery`; it may
//! enter `Delivery` only while eligible and falls back to `Pickup` as soon as
//! eligibility is lost.

use shared::DeliveryMethod;

/// Delivery unlocks once the total quantity exceeds this value
pub const DELIVERY_MIN_EXCLUSIVE: u32 = 2;

pub fn is_delivery_available(total_quantity: u32) -> bool {
    total_quantity > DELIVERY_MIN_EXCLUSIVE
}

/// The method that is actually legal for `total_quantity`
pub fn clamp_method(requested: DeliveryMethod, total_quantity: u32) -> DeliveryMethod {
    match requested {
        DeliveryMethod::Delivery if !is_delivery_available(total_quantity) => DeliveryMethod::Pickup,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!is_delivery_available(0));
        assert!(!is_delivery_available(2));
        assert!(is_delivery_available(3));
        assert!(is_delivery_available(40));
    }

    #[test]
    fn test_clamp_method() {
        assert_eq!(clamp_method(DeliveryMethod::Delivery, 2), DeliveryMethod::Pickup);
        assert_eq!(clamp_method(DeliveryMethod::Delivery, 3), DeliveryMethod::Delivery);
        assert_eq!(clamp_method(DeliveryMethod::Pickup, 3), DeliveryMethod::Pickup);
        assert_eq!(clamp_method(DeliveryMethod::Pickup, 0), DeliveryMethod::Pickup);
    }
}
