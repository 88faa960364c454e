pub mod app;
pub mod appbar;
pub mod carousel;
pub mod events;
pub mod indicator;
pub mod info_card;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod shop;
pub mod terminal_guard;
pub mod theme;
