//! User-facing notices
//!
//! Notices are modal: the front end shows them until the user dismisses them.

use std::collections::VecDeque;

pub const EMPTY_CART_NOTICE: &str = "Your cart is empty. Please add some products to pre-order.";

pub const ORDER_READY_NOTICE: &str = "Your order is ready to be sent!\n\nPlease click 'Send' in your email client to finalize your pre-order.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    EmptyCart,
    OrderReady,
    HandoffFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn empty_cart() -> Self {
        Self {
            kind: NoticeKind::EmptyCart,
            message: EMPTY_CART_NOTICE.to_string(),
        }
    }

    pub fn order_ready() -> Self {
        Self {
            kind: NoticeKind::OrderReady,
            message: ORDER_READY_NOTICE.to_string(),
        }
    }

    pub fn handoff_failed(reason: impl std::fmt::Display, link: &str) -> Self {
        Self {
            kind: NoticeKind::HandoffFailed,
            message: format!(
                "Could not open your email client ({}).\n\nOpen this link manually:\n{}",
                reason, link
            ),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::EmptyCart => "Cart is empty",
            NoticeKind::OrderReady => "Order ready",
            NoticeKind::HandoffFailed => "Email client",
        }
    }
}

/// Receiver of notices
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Notices waiting to be shown, oldest first
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notice currently on screen
    pub fn current(&self) -> Option<&Notice> {
        self.pending.front()
    }

    /// Dismiss the notice on screen
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, notice: Notice) {
        tracing::debug!(kind = ?notice.kind, "Notice raised");
        self.pending.push_back(notice);
    }
}
