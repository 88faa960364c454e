use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed height of the carousel's image region, indicator row excluded.
pub const CAROUSEL_HEIGHT: u16 = 11;

/// The five vertical regions of the shopping page, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct PageRegions {
    pub app_bar: Rect,
    pub carousel: Rect,
    pub info_card: Rect,
    pub button: Rect,
    pub footer: Rect,
}

pub fn page_regions(area: Rect) -> PageRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            // Image panel plus the indicator row beneath it.
            Constraint::Length(CAROUSEL_HEIGHT + 1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    PageRegions {
        app_bar: chunks[0],
        carousel: chunks[1],
        info_card: chunks[2],
        button: chunks[3],
        footer: chunks[4],
    }
}

/// Horizontally centers a region of the given width inside `area`.
pub fn centered_horizontal(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
