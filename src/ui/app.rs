use crate::catalog::{Product, PRODUCT};
use crate::ui::mvi::Reducer;
use crate::ui::shop::{ShopIntent, ShopReducer, ShopState};

/// Composition root state.
///
/// Owns the page's only mutable state ([`ShopState`]) and the quit flag.
/// Widgets never hold references into this; each frame they get copies of
/// whatever they need to draw.
pub struct App {
    shop: ShopState,
    product: Product,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            shop: ShopState::default(),
            product: PRODUCT,
            should_quit: false,
        }
    }

    /// Run an intent through the reducer and store the resulting state.
    pub fn dispatch(&mut self, intent: ShopIntent) {
        self.shop = ShopReducer::reduce(self.shop, intent);
    }

    pub fn shop(&self) -> ShopState {
        self.shop
    }

    pub fn product(&self) -> Product {
        self.product
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Periodic tick. Nothing animates on this screen, so this is a hook
    /// with no current behavior.
    pub fn on_tick(&mut self) {}
}
