//! Homemade Kombucha storefront
//!
//! Browse a fixed catalog, pick quantities, fill in contact details and send
//! the pre-order through the user's own email client.
//!
//! # Module layout
//!
//! ```text
//! storefront/src/
//! ├── catalog.rs     # fixed product list (built-in or JSON file)
//! ├── cart.rs        # quantities per product, derived totals
//! ├── delivery.rs    # delivery eligibility rule
//! ├── core/          # configuration, shop state
//! ├── checkout/      # order composer, mailto link, handoff, notices
//! ├── money.rs       # 2-decimal "lei" formatting
//! ├── tui/           # terminal front end
//! └── utils/         # logging
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod delivery;
pub mod money;
pub mod tui;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, ShopState};
pub use cart::{Cart, CartTotals};
pub use catalog::Catalog;
pub use checkout::{
    Checkout, MailHandoff, MailtoLink, Notice, NoticeQueue, Notifier, OrderEmail, PendingReset,
    SubmittedOrder, SystemMailer, compose_order,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file, init_tui_logger};

/// Load `.env` into the process environment, if present
pub fn setup_environment() {
    if let Ok(path) = dotenv::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }
}

pub fn print_banner() {
    println!(
        r#"
  _  __              _                _
 | |/ /___  _ __ ___| |__  _   _  ___| |__   __ _
 | ' // _ \| '_ ` _ \ '_ \| | | |/ __| '_ \ / _` |
 | . \ (_) | | | | | | |_) | |_| | (__| | | | (_| |
 |_|\_\___/|_| |_| |_|_.__/ \__,_|\___|_| |_|\__,_|
              Pre-order your favorite brew!
    "#
    );
}
