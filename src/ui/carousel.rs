use crate::catalog;
use crate::ui::indicator::PageIndicator;
use crate::ui::theme::{GLOBAL_BORDER, TEXT, TEXT_DIM};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Horizontally paged image region plus its dot indicator.
///
/// Renders exactly one image per page: the one at `selected`. Paging is not
/// handled here — the reducer owns the index, this widget just draws the
/// snapshot it's given.
pub struct Carousel {
    images: &'static [&'static str],
    selected: usize,
}

impl Carousel {
    pub fn new(images: &'static [&'static str], selected: usize) -> Self {
        Self { images, selected }
    }
}

impl Widget for Carousel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let panel = Rect {
            height: area.height - 1,
            ..area
        };
        let dots = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };

        let id = self.images.get(self.selected).copied().unwrap_or("");
        let lines: Vec<Line> = match catalog::art_for(id) {
            Some(art) => art
                .iter()
                .map(|row| Line::styled(*row, Style::default().fg(TEXT)))
                .collect(),
            // Unresolvable identifier: the placeholder panel stands in for
            // whatever the host image loader would have shown.
            None => vec![Line::styled(
                format!("[ image: {id} ]"),
                Style::default().fg(TEXT_DIM),
            )],
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(panel, buf);

        PageIndicator::new(self.images.len(), self.selected).render(dots, buf);
    }
}
