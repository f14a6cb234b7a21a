//! Shared types for the storefront
//!
//! Domain model types (products, cart items, customer details, delivery
//! selection) and the unified error system used by the storefront crate.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CartItem, DeliveryMethod, PickupLocation, Product, UserDetails, UserField};
pub use serde::{Deserialize, Serialize};
