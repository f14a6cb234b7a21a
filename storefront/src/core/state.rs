use shared::{
    AppError, AppResult, DeliveryMethod, ErrorCode, PickupLocation, Product, UserDetails,
    UserField,
};

use crate::cart::{Cart, CartTotals};
use crate::delivery;

/// Everything a shopping session holds
///
/// Created blank at start, mutated only through the methods below, and reset
/// after a submitted order. Each mutation re-checks delivery eligibility, so
/// `delivery_method == Delivery` implies `total_quantity > 2` after every
/// public call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopState {
    cart: Cart,
    user_details: UserDetails,
    delivery_method: DeliveryMethod,
    pickup_location: PickupLocation,
}

impl ShopState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn user_details(&self) -> &UserDetails {
        &self.user_details
    }

    pub fn delivery_method(&self) -> DeliveryMethod {
        self.delivery_method
    }

    pub fn pickup_location(&self) -> PickupLocation {
        self.pickup_location
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn is_delivery_available(&self) -> bool {
        delivery::is_delivery_available(self.cart.total_quantity())
    }

    /// Adjust a product's quantity; returns the resulting quantity
    pub fn change_quantity(&mut self, product: &Product, delta: i32) -> u32 {
        let quantity = self.cart.change_quantity(product, delta);
        tracing::debug!(
            product_id = product.id,
            delta,
            quantity,
            total_quantity = self.cart.total_quantity(),
            "Cart changed"
        );
        self.enforce_delivery_rule();
        quantity
    }

    /// Choose delivery or pickup
    ///
    /// Asking for delivery while the cart is not eligible is refused and the
    /// selection stays on pickup.
    pub fn select_delivery_method(&mut self, method: DeliveryMethod) -> AppResult<()> {
        if method == DeliveryMethod::Delivery && !self.is_delivery_available() {
            return Err(AppError::with_message(
                ErrorCode::DeliveryUnavailable,
                format!(
                    "Delivery needs more than {} items",
                    delivery::DELIVERY_MIN_EXCLUSIVE
                ),
            )
            .with_detail("total_quantity", self.cart.total_quantity()));
        }
        self.delivery_method = method;
        self.enforce_delivery_rule();
        Ok(())
    }

    pub fn select_pickup_location(&mut self, location: PickupLocation) {
        self.pickup_location = location;
    }

    pub fn set_user_field(&mut self, field: UserField, value: impl Into<String>) {
        self.user_details.set(field, value);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.set_user_field(UserField::Name, name);
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.set_user_field(UserField::Phone, phone);
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.set_user_field(UserField::Address, address);
    }

    /// Back to the state of a fresh session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn enforce_delivery_rule(&mut self) {
        let clamped = delivery::clamp_method(self.delivery_method, self.cart.total_quantity());
        if clamped != self.delivery_method {
            tracing::debug!("Delivery no longer available, switching to pickup");
            self.delivery_method = clamped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn lemon() -> Product {
        Catalog::builtin().get(1).cloned().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = ShopState::new();
        assert!(state.cart().is_empty());
        assert_eq!(state.user_details(), &UserDetails::default());
        assert_eq!(state.delivery_method(), DeliveryMethod::Pickup);
        assert_eq!(
            state.pickup_location(),
            PickupLocation::TheOfficeBusinessCenter
        );
        assert!(!state.is_delivery_available());
    }

    #[test]
    fn test_eligibility_flips_at_three() {
        let mut state = ShopState::new();
        state.change_quantity(&lemon(), 2);
        assert!(!state.is_delivery_available());

        state.change_quantity(&lemon(), 1);
        assert!(state.is_delivery_available());

        state.change_quantity(&lemon(), -1);
        assert!(!state.is_delivery_available());
    }

    #[test]
    fn test_delivery_refused_when_ineligible() {
        let mut state = ShopState::new();
        state.change_quantity(&lemon(), 2);

        let err = state
            .select_delivery_method(DeliveryMethod::Delivery)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DeliveryUnavailable);
        assert_eq!(state.delivery_method(), DeliveryMethod::Pickup);
    }

    #[test]
    fn test_dropping_below_threshold_forces_pickup() {
        let mut state = ShopState::new();
        state.change_quantity(&lemon(), 3);
        state
            .select_delivery_method(DeliveryMethod::Delivery)
            .unwrap();
        assert_eq!(state.delivery_method(), DeliveryMethod::Delivery);

        state.change_quantity(&lemon(), -1);
        assert_eq!(state.delivery_method(), DeliveryMethod::Pickup);

        // Regaining eligibility does not re-select delivery
        state.change_quantity(&lemon(), 1);
        assert_eq!(state.delivery_method(), DeliveryMethod::Pickup);
    }

    #[test]
    fn test_pickup_always_allowed() {
        let mut state = ShopState::new();
        assert!(state.select_delivery_method(DeliveryMethod::Pickup).is_ok());
        state.select_pickup_location(PickupLocation::SigmaShoppingCenter);
        assert_eq!(state.pickup_location(), PickupLocation::SigmaShoppingCenter);
    }

    #[test]
    fn test_user_fields() {
        let mut state = ShopState::new();
        state.set_name("Ana");
        state.set_phone("0722");
        state.set_address("Str. Lunga 5");
        assert_eq!(state.user_details().name, "Ana");
        assert_eq!(state.user_details().phone, "0722");
        assert_eq!(state.user_details().address, "Str. Lunga 5");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = ShopState::new();
        state.change_quantity(&lemon(), 4);
        state.set_name("Ana");
        state
            .select_delivery_method(DeliveryMethod::Delivery)
            .unwrap();
        state.select_pickup_location(PickupLocation::SigmaShoppingCenter);

        state.reset();
        assert_eq!(state, ShopState::new());
    }
}
