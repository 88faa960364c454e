use crate::ui::app::App;
use crate::ui::shop::ShopIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a key event to an intent dispatch (or quit).
///
/// Key map: `a`/Enter/Space add to cart, Left/`h` and Right/`l` page the
/// carousel, `m` and `c` hit the (unwired) menu and cart affordances,
/// `q`/Esc/Ctrl+C quit.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('a') | KeyCode::Enter | KeyCode::Char(' ') => {
            app.dispatch(ShopIntent::AddToCart)
        }
        KeyCode::Right | KeyCode::Char('l') => app.dispatch(ShopIntent::NextImage),
        KeyCode::Left | KeyCode::Char('h') => app.dispatch(ShopIntent::PrevImage),
        KeyCode::Char('m') => app.dispatch(ShopIntent::MenuPressed),
        KeyCode::Char('c') => app.dispatch(ShopIntent::CartPressed),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
