use crate::ui::theme::{DOT_ACTIVE, DOT_INACTIVE};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// Dot row beneath the carousel.
///
/// Pure function of `(count, current)`: the dot at `current` is filled, the
/// rest are hollow. Display-only; the dots take no input.
pub struct PageIndicator {
    count: usize,
    current: usize,
}

impl PageIndicator {
    pub fn new(count: usize, current: usize) -> Self {
        Self { count, current }
    }
}

impl Widget for PageIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.count * 2);
        for index in 0..self.count {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let (symbol, color) = if index == self.current {
                ("●", DOT_ACTIVE)
            } else {
                ("○", DOT_INACTIVE)
            };
            spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
