//! Data models
//!
//! Shared between the storefront library and its terminal front end.
//! Product ids are `u32`; prices are `Decimal`.

pub mod customer;
pub mod delivery;
pub mod product;

// Re-exports
pub use customer::*;
pub use delivery::*;
pub use product::*;
