use crate::ui::app::App;
use crate::ui::appbar::AppBar;
use crate::ui::carousel::Carousel;
use crate::ui::info_card::InfoCard;
use crate::ui::layout::{centered_horizontal, page_regions};
use crate::ui::theme::{ACCENT, TEXT, TEXT_DIM};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const BUTTON_LABEL: &str = "Add to Cart";
const BUTTON_WIDTH: u16 = 28;

/// Assembles the full shopping page from the current state snapshot.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = page_regions(frame.area());
    let shop = app.shop();
    let product = app.product();

    frame.render_widget(AppBar::new(shop.cart_count), regions.app_bar);
    frame.render_widget(
        Carousel::new(product.images, shop.selected_image),
        regions.carousel,
    );
    frame.render_widget(InfoCard::new(product), regions.info_card);

    let button_area = centered_horizontal(BUTTON_WIDTH, regions.button);
    let button = Paragraph::new(Line::styled(
        BUTTON_LABEL,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(button, button_area);

    let hints = " a/Enter: Add to Cart │ ←/→: Browse images │ q: Quit";
    frame.render_widget(
        Paragraph::new(Line::styled(hints, Style::default().fg(TEXT_DIM))),
        regions.footer,
    );
}
