mod intent;
mod reducer;
mod state;

pub use intent::ShopIntent;
pub use reducer::ShopReducer;
pub use state::ShopState;
