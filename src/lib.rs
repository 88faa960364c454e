//! vitrine: a single-screen terminal storefront.
//!
//! One product, one screen: an image carousel, a static info card, a cart
//! badge in the app bar and an add-to-cart control. All mutable state is two
//! integers owned by the composition root and driven through a reducer; see
//! [`ui::mvi`] for the data-flow contract.

pub mod args;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod ui;
