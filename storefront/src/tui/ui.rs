use ratatui::{prelude::*, widgets::*};
use shared::{DeliveryMethod, PickupLocation, UserField};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::app::{App, Focus, InputMode};
use crate::money::format_lei;

pub const DELIVERY_HINT: &str = "Delivery available for orders of 3 or more";

const LABEL_WIDTH: u16 = 10;
const CARD_HEIGHT: u16 = 6;

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(1),    // Shop
            Constraint::Length(8), // Logs
        ])
        .split(f.area());

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(13), Constraint::Min(1)])
        .split(main_chunks[1]);

    render_header(f, chunks[0]);
    render_products(f, app, main_chunks[0]);
    render_form(f, app, right_chunks[0]);
    render_summary(f, app, right_chunks[1]);
    render_logs(f, app, chunks[2]);

    if let Some(notice) = app.notices.current() {
        let area = centered_rect(60, 40, f.area());
        let popup = Paragraph::new(vec![
            Line::from(notice.message.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] OK",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", notice.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(Clear, area);
        f.render_widget(popup, area);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Homemade Kombucha",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pre-order your favorite brew!",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title_bottom(
                Line::from(" Tab move | +/- qty | Enter edit | Space select | s submit | q quit ")
                    .style(Style::default().fg(Color::DarkGray))
                    .right_aligned(),
            ),
    );
    f.render_widget(header, area);
}

fn render_products(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Our Flavors ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> = app
        .catalog
        .products()
        .iter()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, product) in app.catalog.products().iter().enumerate() {
        let focused = app.focus == Focus::Product(index);
        let quantity = app.state.cart().quantity_of(product.id);

        let lines = vec![
            Line::from(Span::styled(
                product.description.as_str(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                product.image_url.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(vec![
                Span::styled(
                    format_lei(product.price),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    [-] "),
                Span::styled(
                    quantity.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" [+]"),
            ]),
        ];

        let card = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", product.name))
                .borders(Borders::ALL)
                .border_style(focus_style(focused)),
        );
        f.render_widget(card, cards[index]);
    }
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Your Order ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let state = &app.state;
    let delivery_available = state.is_delivery_available();
    let mut rows: Vec<Line> = Vec::new();
    let mut cursor: Option<(u16, usize)> = None;

    for field in UserField::ALL {
        if field == UserField::Address && state.delivery_method() != DeliveryMethod::Delivery {
            continue;
        }
        let focused = app.focus == Focus::Field(field);
        let editing = focused && app.input_mode == InputMode::Editing;
        let value_style = if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        if editing {
            cursor = Some((rows.len() as u16, app.input.visual_cursor()));
        }
        rows.push(Line::from(vec![
            marker(focused),
            Span::raw(format!(
                "{:<width$}",
                format!("{}:", field.label()),
                width = LABEL_WIDTH as usize - 2
            )),
            Span::styled(state.user_details().get(field).to_string(), value_style),
        ]));
    }

    rows.push(Line::from(""));
    for method in [DeliveryMethod::Delivery, DeliveryMethod::Pickup] {
        let enabled = method == DeliveryMethod::Pickup || delivery_available;
        let style = if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        rows.push(Line::from(vec![
            marker(app.focus == Focus::Method(method)),
            Span::styled(
                format!("{} {}", radio(state.delivery_method() == method), method.label()),
                style,
            ),
        ]));
    }
    if !delivery_available {
        rows.push(Line::from(Span::styled(
            format!("  {}", DELIVERY_HINT),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    if state.delivery_method() == DeliveryMethod::Pickup {
        for location in PickupLocation::ALL {
            rows.push(Line::from(vec![
                marker(app.focus == Focus::Location(location)),
                Span::raw(format!(
                    "  {} {}",
                    radio(state.pickup_location() == location),
                    location.name()
                )),
            ]));
        }
    }

    rows.push(Line::from(""));
    rows.push(Line::from(vec![
        marker(app.focus == Focus::Submit),
        Span::styled(
            format!(" Pre-order ({} items) ", state.totals().quantity),
            if app.pending.is_some() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            },
        ),
    ]));

    f.render_widget(Paragraph::new(rows), inner);

    if let Some((row, column)) = cursor {
        let max_column = inner.width.saturating_sub(LABEL_WIDTH + 1);
        let column = (column as u16).min(max_column);
        f.set_cursor_position((inner.x + LABEL_WIDTH + column, inner.y + row));
    }
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let totals = app.state.totals();
    let block = Block::default()
        .title(" Order Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if app.state.cart().is_empty() {
        let empty = Paragraph::new("Your cart is empty")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut items: Vec<ListItem> = app
        .state
        .cart()
        .items()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} x{}  ", item.product.name, item.quantity)),
                Span::styled(format_lei(item.line_total()), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();
    items.push(ListItem::new(Line::from("")));
    items.push(ListItem::new(Line::from(vec![
        Span::styled("Total: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format_lei(totals.price),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])));

    f.render_widget(List::new(items).block(block), area);
}

fn render_logs(f: &mut Frame, app: &App, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("> ", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("  ")
    }
}

fn radio(selected: bool) -> &'static str {
    if selected { "(o)" } else { "( )" }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::checkout::{Checkout, HandoffResult, MailHandoff, MailtoLink};
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    struct NullMailer;

    impl MailHandoff for NullMailer {
        fn hand_off(&self, _link: &MailtoLink) -> HandoffResult<()> {
            Ok(())
        }
    }

    fn app() -> App {
        App::with_mailer(
            Catalog::builtin(),
            Checkout::new("orders@yourkombucha.com", Duration::from_millis(500)),
            Box::new(NullMailer),
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_storefront() {
        let screen = render(&app());
        assert!(screen.contains("Homemade Kombucha"));
        assert!(screen.contains("Our Flavors"));
        assert!(screen.contains("Lemon & Ginger"));
        assert!(screen.contains("100.00 lei"));
        assert!(screen.contains(DELIVERY_HINT));
        assert!(screen.contains("The Office Business Center"));
        assert!(screen.contains("Your cart is empty"));
        assert!(!screen.contains("Address:"));
    }

    #[test]
    fn test_renders_summary_and_unlocked_delivery() {
        let mut app = app();
        let catalog = Catalog::builtin();
        app.state.change_quantity(catalog.get(1).unwrap(), 2);
        app.state.change_quantity(catalog.get(2).unwrap(), 1);
        app.state
            .select_delivery_method(DeliveryMethod::Delivery)
            .unwrap();

        let screen = render(&app);
        assert!(screen.contains("Lemon & Ginger x2  74.00 lei"));
        assert!(screen.contains("Mango x1  37.00 lei"));
        assert!(screen.contains("111.00 lei"));
        assert!(screen.contains("Address:"));
        assert!(!screen.contains(DELIVERY_HINT));
        assert!(!screen.contains("Sigma Shopping Center"));
    }

    #[test]
    fn test_renders_notice_popup() {
        let mut app = app();
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Cart is empty"));
        assert!(screen.contains("[Enter] OK"));
    }
}
