use crate::ui::mvi::Reducer;
use crate::ui::shop::intent::ShopIntent;
use crate::ui::shop::state::ShopState;

pub struct ShopReducer;

impl Reducer for ShopReducer {
    type State = ShopState;
    type Intent = ShopIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShopIntent::AddToCart => ShopState {
                cart_count: state.cart_count + 1,
                ..state
            },
            ShopIntent::NextImage => ShopState {
                selected_image: (state.selected_image + 1)
                    .min(state.image_count.saturating_sub(1)),
                ..state
            },
            ShopIntent::PrevImage => ShopState {
                selected_image: state.selected_image.saturating_sub(1),
                ..state
            },
            ShopIntent::SelectImage(index) => {
                if index < state.image_count {
                    ShopState {
                        selected_image: index,
                        ..state
                    }
                } else {
                    state
                }
            }
            ShopIntent::MenuPressed => {
                // Known incompleteness: the menu goes nowhere yet.
                tracing::debug!("menu pressed (no-op)");
                state
            }
            ShopIntent::CartPressed => {
                tracing::debug!("cart pressed (no-op)");
                state
            }
        }
    }
}
