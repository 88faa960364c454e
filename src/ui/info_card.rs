use crate::catalog::Product;
use crate::ui::theme::{GLOBAL_BORDER, STAR, TEXT, TEXT_DIM};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap};

/// Static product card: name, price, star row, description.
///
/// Everything here comes straight from the catalog literals. The star row is
/// a fixed render of four filled stars and one half star; it is not computed
/// from any rating value on purpose.
pub struct InfoCard {
    product: Product,
}

impl InfoCard {
    pub fn new(product: Product) -> Self {
        Self { product }
    }
}

impl Widget for InfoCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let star_style = Style::default().fg(STAR);
        let stars = Line::from(vec![
            Span::styled("★ ★ ★ ★ ", star_style),
            Span::styled("½", star_style.add_modifier(Modifier::DIM)),
        ]);

        let lines = vec![
            Line::styled(
                self.product.name,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.product.price, Style::default().fg(TEXT_DIM)),
            stars,
            Line::raw(""),
            Line::styled(self.product.description, Style::default().fg(TEXT_DIM)),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER))
                    .padding(Padding::horizontal(1)),
            )
            .render(area, buf);
    }
}
