use crate::ui::theme::{BADGE_BG, GLOBAL_BORDER, TEXT, TEXT_DIM};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const TITLE: &str = "Shop";

/// Badge overlay text for the cart icon: `None` when the cart is empty,
/// otherwise the count. A count of exactly 0 shows no badge.
pub fn badge_text(cart_count: u64) -> Option<String> {
    (cart_count > 0).then(|| cart_count.to_string())
}

/// Top bar: menu affordance, centered title, cart affordance with badge.
///
/// Menu and cart are display-only here; their key activations are wired as
/// no-op intents upstream.
pub struct AppBar {
    cart_count: u64,
}

impl AppBar {
    pub fn new(cart_count: u64) -> Self {
        Self { cart_count }
    }
}

impl Widget for AppBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_style = Style::default().fg(TEXT);
        let dim_style = Style::default().fg(TEXT_DIM);

        let left = " ☰ ";
        let mut right_spans = vec![Span::styled("Cart", text_style)];
        match badge_text(self.cart_count) {
            Some(count) => {
                right_spans.push(Span::raw(" "));
                right_spans.push(Span::styled(
                    format!(" {count} "),
                    Style::default().bg(BADGE_BG).fg(TEXT).add_modifier(Modifier::BOLD),
                ));
            }
            None => right_spans.push(Span::styled("  ", dim_style)),
        }
        right_spans.push(Span::raw(" "));

        // Center the title between the two affordances by char count.
        // Top/bottom borders cost no columns, so the full width is usable.
        let content_width = area.width as usize;
        let left_width = left.chars().count();
        let right_width: usize = right_spans
            .iter()
            .map(|span| span.content.chars().count())
            .sum();
        let remaining = content_width
            .saturating_sub(left_width)
            .saturating_sub(right_width)
            .saturating_sub(TITLE.chars().count());
        let pad_left = remaining / 2;
        let pad_right = remaining - pad_left;

        let mut spans = vec![
            Span::styled(left, text_style),
            Span::raw(" ".repeat(pad_left)),
            Span::styled(TITLE, text_style.add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(pad_right)),
        ];
        spans.extend(right_spans);

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(area, buf);
    }
}
