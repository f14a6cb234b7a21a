use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shared::{DeliveryMethod, PickupLocation, Product, UserField};
use tokio::time::Instant;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::catalog::Catalog;
use crate::checkout::{Checkout, MailHandoff, NoticeQueue, PendingReset, SystemMailer};
use crate::core::ShopState;

/// Element of the page that receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Product card, by position in the catalog
    Product(usize),
    Field(UserField),
    Method(DeliveryMethod),
    Location(PickupLocation),
    Submit,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

pub struct App {
    pub state: ShopState,
    pub catalog: Catalog,
    pub checkout: Checkout,
    pub notices: NoticeQueue,
    pub focus: Focus,
    pub input: Input,
    pub input_mode: InputMode,
    pub pending: Option<PendingReset>,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
    mailer: Box<dyn MailHandoff>,
}

impl App {
    pub fn new(catalog: Catalog, checkout: Checkout) -> Self {
        Self::with_mailer(catalog, checkout, Box::new(SystemMailer::new()))
    }

    pub fn with_mailer(catalog: Catalog, checkout: Checkout, mailer: Box<dyn MailHandoff>) -> Self {
        let focus = if catalog.is_empty() {
            Focus::Field(UserField::Name)
        } else {
            Focus::Product(0)
        };
        Self {
            state: ShopState::new(),
            catalog,
            checkout,
            notices: NoticeQueue::new(),
            focus,
            input: Input::default(),
            input_mode: InputMode::Normal,
            pending: None,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
            mailer,
        }
    }

    /// Focusable elements in page order
    ///
    /// The address field only exists while delivery is selected, the pickup
    /// locations only while pickup is.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = (0..self.catalog.len()).map(Focus::Product).collect();
        order.push(Focus::Field(UserField::Name));
        order.push(Focus::Field(UserField::Phone));
        match self.state.delivery_method() {
            DeliveryMethod::Delivery => order.push(Focus::Field(UserField::Address)),
            DeliveryMethod::Pickup => {}
        }
        order.push(Focus::Method(DeliveryMethod::Delivery));
        order.push(Focus::Method(DeliveryMethod::Pickup));
        if self.state.delivery_method() == DeliveryMethod::Pickup {
            order.extend(PickupLocation::ALL.into_iter().map(Focus::Location));
        }
        order.push(Focus::Submit);
        order
    }

    pub fn focused_product(&self) -> Option<&Product> {
        match self.focus {
            Focus::Product(index) => self.catalog.products().get(index),
            _ => None,
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            self.handle_key(*key);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Notices are modal
        if self.notices.current().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notices.dismiss();
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab => self.move_focus(1),
            KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Char('+') | KeyCode::Right => self.adjust_focused_product(1),
            KeyCode::Char('-') | KeyCode::Left => self.adjust_focused_product(-1),
            KeyCode::Char(' ') => self.select_focused_option(),
            KeyCode::Enter => match self.focus {
                Focus::Field(field) => self.start_editing(field),
                Focus::Submit => self.submit(),
                _ => self.select_focused_option(),
            },
            KeyCode::Char('s') => self.submit(),
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            KeyCode::Up => self.logger_state.transition(TuiWidgetEvent::UpKey),
            KeyCode::Down => self.logger_state.transition(TuiWidgetEvent::DownKey),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.input_mode = InputMode::Normal;
                if key.code == KeyCode::Tab {
                    self.move_focus(1);
                }
            }
            _ => {
                if self.input.handle_event(&Event::Key(key)).is_some()
                    && let Focus::Field(field) = self.focus
                {
                    self.state.set_user_field(field, self.input.value());
                }
            }
        }
    }

    fn start_editing(&mut self, field: UserField) {
        self.input = Input::new(self.state.user_details().get(field).to_string());
        self.input_mode = InputMode::Editing;
    }

    pub fn move_focus(&mut self, step: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let position = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (position + step).rem_euclid(len);
        self.focus = order[next as usize];
    }

    fn adjust_focused_product(&mut self, delta: i32) {
        if let Some(product) = self.focused_product().cloned() {
            self.state.change_quantity(&product, delta);
            self.refocus();
        }
    }

    fn select_focused_option(&mut self) {
        match self.focus {
            Focus::Method(method) => {
                if let Err(e) = self.state.select_delivery_method(method) {
                    tracing::warn!(code = %e.code, "{}", e.message);
                }
                self.refocus();
            }
            Focus::Location(location) => self.state.select_pickup_location(location),
            _ => {}
        }
    }

    /// Keep focus on an element that is still on the page
    fn refocus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::Method(DeliveryMethod::Pickup);
        }
    }

    pub fn submit(&mut self) {
        if self.pending.is_some() {
            tracing::info!("Previous order is still being handed off");
            return;
        }
        if let Ok(pending) = self
            .checkout
            .submit(&self.state, self.mailer.as_ref(), &mut self.notices)
        {
            self.pending = Some(pending);
        }
    }

    /// Complete a handed-off order once its delay has passed
    pub fn tick(&mut self, now: Instant) {
        if self.pending.as_ref().is_some_and(|p| p.is_due(now)) {
            self.pending = None;
            self.checkout.complete(&mut self.state, &mut self.notices);
            self.input = Input::default();
            self.input_mode = InputMode::Normal;
            self.refocus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{HandoffResult, MailtoLink, Notice};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct SharedMailer(Rc<RefCell<Vec<String>>>);

    impl MailHandoff for SharedMailer {
        fn hand_off(&self, link: &MailtoLink) -> HandoffResult<()> {
            self.0.borrow_mut().push(link.to_string());
            Ok(())
        }
    }

    fn app() -> (App, SharedMailer) {
        let mailer = SharedMailer::default();
        let app = App::with_mailer(
            Catalog::builtin(),
            Checkout::new("orders@yourkombucha.com", Duration::from_millis(500)),
            Box::new(mailer.clone()),
        );
        (app, mailer)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_plus_minus_on_product_card() {
        let (mut app, _) = app();
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.cart().quantity_of(1), 2);

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.cart().quantity_of(1), 0);
        assert!(app.state.cart().is_empty());
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let (mut app, _) = app();
        let order = app.focus_order();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, *order.last().unwrap());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Product(0));
    }

    #[test]
    fn test_address_only_offered_for_delivery() {
        let (mut app, _) = app();
        assert!(!app.focus_order().contains(&Focus::Field(UserField::Address)));
        assert!(app.focus_order().contains(&Focus::Location(PickupLocation::SigmaShoppingCenter)));

        for _ in 0..3 {
            press(&mut app, KeyCode::Char('+'));
        }
        app.focus = Focus::Method(DeliveryMethod::Delivery);
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.state.delivery_method(), DeliveryMethod::Delivery);
        assert!(app.focus_order().contains(&Focus::Field(UserField::Address)));
        assert!(!app.focus_order().contains(&Focus::Location(PickupLocation::SigmaShoppingCenter)));
    }

    #[test]
    fn test_disabled_delivery_stays_on_pickup() {
        let (mut app, _) = app();
        press(&mut app, KeyCode::Char('+'));
        app.focus = Focus::Method(DeliveryMethod::Delivery);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.state.delivery_method(), DeliveryMethod::Pickup);
    }

    #[test]
    fn test_losing_eligibility_moves_focus_off_address() {
        let (mut app, _) = app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('+'));
        }
        app.state
            .select_delivery_method(DeliveryMethod::Delivery)
            .unwrap();
        app.focus = Focus::Product(0);
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.state.delivery_method(), DeliveryMethod::Pickup);
        assert_eq!(app.focus, Focus::Product(0));

        app.focus = Focus::Field(UserField::Address);
        app.refocus();
        assert_eq!(app.focus, Focus::Method(DeliveryMethod::Pickup));
    }

    #[test]
    fn test_editing_writes_through_to_state() {
        let (mut app, _) = app();
        app.focus = Focus::Field(UserField::Name);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "Ana q");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state.user_details().name, "Ana");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_empty_submit_shows_modal_notice() {
        let (mut app, mailer) = app();
        press(&mut app, KeyCode::Char('s'));

        assert!(mailer.0.borrow().is_empty());
        assert!(app.pending.is_none());
        assert_eq!(app.notices.current(), Some(&Notice::empty_cart()));

        // Other keys are swallowed while the notice is up
        press(&mut app, KeyCode::Char('+'));
        assert!(app.state.cart().is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_submit_then_tick_resets() {
        let (mut app, mailer) = app();
        press(&mut app, KeyCode::Char('+'));
        app.focus = Focus::Field(UserField::Name);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(mailer.0.borrow().len(), 1);
        let deadline = app.pending.as_ref().unwrap().deadline;

        // A second submit while pending is ignored
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(mailer.0.borrow().len(), 1);

        app.tick(deadline - Duration::from_millis(1));
        assert!(app.pending.is_some());
        assert_eq!(app.state.cart().quantity_of(1), 1);

        app.tick(deadline);
        assert!(app.pending.is_none());
        assert_eq!(app.state, ShopState::new());
        assert_eq!(app.notices.current(), Some(&Notice::order_ready()));
    }
}
