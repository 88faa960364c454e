use crate::catalog::PRODUCT;
use crate::ui::mvi::UiState;

/// The shopping page's mutable state: two integers, nothing else.
///
/// Owned exclusively by [`crate::ui::app::App`]; widgets see read-only
/// copies. Lives as long as the process and starts fresh every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopState {
    /// Items added to the cart this session. Only ever incremented.
    pub cart_count: u64,
    /// Index of the carousel image currently shown, always in
    /// `[0, image_count)`.
    pub selected_image: usize,
    /// Length of the product's image list; fixed for the life of the state.
    pub image_count: usize,
}

impl Default for ShopState {
    fn default() -> Self {
        Self::with_image_count(PRODUCT.images.len())
    }
}

impl UiState for ShopState {}

impl ShopState {
    pub fn with_image_count(image_count: usize) -> Self {
        Self {
            cart_count: 0,
            selected_image: 0,
            image_count,
        }
    }

    /// Whether the app bar should show a cart badge at all.
    pub fn has_badge(&self) -> bool {
        self.cart_count > 0
    }
}
