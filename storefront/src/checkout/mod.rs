//! Order submission
//!
//! # Flow
//!
//! ```text
//! submit ─┬─ empty cart ──► EmptyCart notice, Err(OrderEmpty), nothing else
//!         └─ compose ─► mailto link ─► MailHandoff ─► PendingReset(deadline)
//!                                                         │ handoff delay
//!                                                         ▼
//!                                   complete ─► OrderReady notice ─► ShopState::reset
//! ```
//!
//! The delay gives the mail client time to come up before the notice is
//! shown. It is never cancelled; if the program exits first the reset simply
//! does not happen.

pub mod composer;
pub mod handoff;
pub mod mailto;
pub mod notice;

pub use composer::{OrderEmail, compose_order};
pub use handoff::{HandoffError, HandoffResult, MailHandoff, SystemMailer};
pub use mailto::MailtoLink;
pub use notice::{Notice, NoticeKind, NoticeQueue, Notifier};

use shared::{AppError, AppResult, ErrorCode};
use std::time::Duration;
use tokio::time::Instant;

use crate::cart::CartTotals;
use crate::core::{Config, ShopState};

/// What was handed to the mail client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedOrder {
    pub email: OrderEmail,
    pub link: MailtoLink,
    pub totals: CartTotals,
}

/// A handed-off order whose completion notice and reset are still due
#[derive(Debug, Clone)]
pub struct PendingReset {
    pub order: SubmittedOrder,
    pub deadline: Instant,
}

impl PendingReset {
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Submission settings
#[derive(Debug, Clone)]
pub struct Checkout {
    recipient: String,
    handoff_delay: Duration,
}

impl Checkout {
    pub fn new(recipient: impl Into<String>, handoff_delay: Duration) -> Self {
        Self {
            recipient: recipient.into(),
            handoff_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.recipient.clone(), config.handoff_delay())
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn handoff_delay(&self) -> Duration {
        self.handoff_delay
    }

    /// Compose the order and hand it to the mail client
    ///
    /// An empty cart raises the empty-cart notice and aborts before any link
    /// is built. The state is not touched here; call [`Checkout::complete`]
    /// once the returned deadline has passed.
    pub fn submit(
        &self,
        state: &ShopState,
        mailer: &dyn MailHandoff,
        notifier: &mut dyn Notifier,
    ) -> AppResult<PendingReset> {
        let email = match compose_order(
            state.cart(),
            state.user_details(),
            state.delivery_method(),
            state.pickup_location(),
        ) {
            Ok(email) => email,
            Err(e) if e.code == ErrorCode::OrderEmpty => {
                tracing::warn!("Submit attempted with an empty cart");
                notifier.notify(Notice::empty_cart());
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let link = MailtoLink::new(&self.recipient, &email);
        if let Err(e) = mailer.hand_off(&link) {
            tracing::error!(error = %e, "Mail handoff failed");
            notifier.notify(Notice::handoff_failed(&e, link.as_str()));
            return Err(AppError::from(e));
        }

        let totals = state.totals();
        tracing::info!(
            customer = %state.user_details().name,
            method = state.delivery_method().label(),
            quantity = totals.quantity,
            total = %crate::money::format_amount(totals.price),
            "Order handed to mail client"
        );

        Ok(PendingReset {
            order: SubmittedOrder {
                email,
                link,
                totals,
            },
            deadline: Instant::now() + self.handoff_delay,
        })
    }

    /// Show the completion notice and start a fresh session
    pub fn complete(&self, state: &mut ShopState, notifier: &mut dyn Notifier) {
        notifier.notify(Notice::order_ready());
        state.reset();
        tracing::info!("Shop state reset after submission");
    }

    /// [`Checkout::submit`], wait out the handoff delay, then
    /// [`Checkout::complete`]
    pub async fn submit_and_reset(
        &self,
        state: &mut ShopState,
        mailer: &dyn MailHandoff,
        notifier: &mut dyn Notifier,
    ) -> AppResult<SubmittedOrder> {
        let pending = self.submit(state, mailer, notifier)?;
        tokio::time::sleep_until(pending.deadline).await;
        self.complete(state, notifier);
        Ok(pending.order)
    }
}
