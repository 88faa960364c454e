use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopIntent {
    /// "Add to Cart" activated: cart count goes up by exactly one.
    AddToCart,
    /// Page the carousel forward; clamps at the last image, no wraparound.
    NextImage,
    /// Page the carousel backward; clamps at the first image.
    PrevImage,
    /// Jump straight to an image index. Out-of-range indices are ignored.
    SelectImage(usize),
    /// Menu affordance activated. Deliberately unwired; state is unchanged.
    MenuPressed,
    /// Cart affordance activated. Deliberately unwired; state is unchanged.
    CartPressed,
}

impl Intent for ShopIntent {}
