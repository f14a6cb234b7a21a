//! Order composer
//!
//! Turns the cart and the customer's details into the subject and plain-text
//! body of the order email.

use shared::{AppError, AppResult, DeliveryMethod, PickupLocation, UserDetails};
use std::fmt::Write;

use crate::cart::Cart;
use crate::delivery;
use crate::money::format_lei;

const BODY_HEADING: &str = "New Kombucha Pre-Order!";
const SEPARATOR: &str = "-------------------------";

/// Composed order email, ready to be put in a mailto link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEmail {
    pub subject: String,
    pub body: String,
}

/// Compose the order email for the current selection
///
/// Fails with `OrderEmpty` when nothing is in the cart.
pub fn compose_order(
    cart: &Cart,
    user_details: &UserDetails,
    delivery_method: DeliveryMethod,
    pickup_location: PickupLocation,
) -> AppResult<OrderEmail> {
    let totals = cart.totals();
    if totals.quantity == 0 {
        return Err(AppError::order_empty());
    }

    let subject = format!("New Pre-Order from {}", user_details.name);

    let summary = cart
        .items()
        .map(|item| {
            format!(
                "- {} x{} ({})",
                item.product.name,
                item.quantity,
                format_lei(item.line_total())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut body = String::new();
    // Writing to a String cannot fail
    let _ = write!(
        body,
        "{BODY_HEADING}\n\n\
         CUSTOMER DETAILS:\n\
         Name: {name}\n\
         Phone: {phone}\n\
         {delivery}\n\n\
         {SEPARATOR}\n\n\
         ORDER SUMMARY:\n\
         {summary}\n\n\
         {SEPARATOR}\n\n\
         TOTAL: {total}",
        name = user_details.name,
        phone = user_details.phone,
        delivery = delivery_block(
            user_details,
            delivery_method,
            pickup_location,
            delivery::is_delivery_available(totals.quantity),
        ),
        total = format_lei(totals.price),
    );

    Ok(OrderEmail {
        subject,
        body: body.trim().to_string(),
    })
}

/// The address is only used for an eligible delivery; a delivery selection
/// that has gone stale falls through to the pickup location.
fn delivery_block(
    user_details: &UserDetails,
    delivery_method: DeliveryMethod,
    pickup_location: PickupLocation,
    delivery_available: bool,
) -> String {
    match delivery_method {
        DeliveryMethod::Delivery if delivery_available => {
            format!("Delivery Address: {}", user_details.address)
        }
        _ => format!("Pickup Location: {}", pickup_location.name()),
    }
}
