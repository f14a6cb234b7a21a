//! Core module - configuration and shop state
//!
//! - [`Config`] - storefront configuration
//! - [`ShopState`] - the single owned state of a shopping session

pub mod config;
pub mod state;

pub use config::Config;
pub use state::ShopState;
