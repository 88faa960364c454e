use vitrine::ui::mvi::Reducer;
use vitrine::ui::shop::{ShopIntent, ShopReducer, ShopState};

fn fresh() -> ShopState {
    ShopState::with_image_count(3)
}

fn reduce_all(state: ShopState, intents: &[ShopIntent]) -> ShopState {
    intents
        .iter()
        .fold(state, |state, intent| ShopReducer::reduce(state, *intent))
}

#[test]
fn fresh_state_is_empty_cart_first_image() {
    let state = fresh();
    assert_eq!(state.cart_count, 0);
    assert_eq!(state.selected_image, 0);
    assert!(!state.has_badge());
}

#[test]
fn add_to_cart_increments_by_exactly_one() {
    let state = ShopReducer::reduce(fresh(), ShopIntent::AddToCart);
    assert_eq!(state.cart_count, 1);
}

#[test]
fn n_activations_yield_count_n() {
    for n in [1usize, 2, 5, 17] {
        let state = reduce_all(fresh(), &vec![ShopIntent::AddToCart; n]);
        assert_eq!(state.cart_count, n as u64);
    }
}

#[test]
fn badge_shown_iff_cart_nonempty() {
    let mut state = fresh();
    assert!(!state.has_badge());
    for _ in 0..5 {
        state = ShopReducer::reduce(state, ShopIntent::AddToCart);
        assert!(state.has_badge());
    }
}

#[test]
fn next_image_advances_and_clamps_at_end() {
    let state = reduce_all(fresh(), &[ShopIntent::NextImage]);
    assert_eq!(state.selected_image, 1);

    let state = reduce_all(fresh(), &[ShopIntent::NextImage; 10]);
    assert_eq!(state.selected_image, 2, "no wraparound past the last image");
}

#[test]
fn prev_image_clamps_at_start() {
    let state = reduce_all(fresh(), &[ShopIntent::PrevImage; 4]);
    assert_eq!(state.selected_image, 0);
}

#[test]
fn index_stays_in_range_under_any_paging_sequence() {
    let sequence = [
        ShopIntent::NextImage,
        ShopIntent::NextImage,
        ShopIntent::NextImage,
        ShopIntent::PrevImage,
        ShopIntent::NextImage,
        ShopIntent::NextImage,
        ShopIntent::PrevImage,
        ShopIntent::PrevImage,
        ShopIntent::PrevImage,
        ShopIntent::PrevImage,
    ];
    let mut state = fresh();
    for intent in sequence {
        state = ShopReducer::reduce(state, intent);
        assert!(state.selected_image < 3, "index escaped [0, 3)");
    }
}

#[test]
fn select_image_in_range_jumps() {
    let state = ShopReducer::reduce(fresh(), ShopIntent::SelectImage(2));
    assert_eq!(state.selected_image, 2);
}

#[test]
fn select_image_out_of_range_is_ignored() {
    let state = ShopReducer::reduce(fresh(), ShopIntent::SelectImage(3));
    assert_eq!(state.selected_image, 0);
}

#[test]
fn paging_does_not_touch_the_cart() {
    let state = reduce_all(
        fresh(),
        &[
            ShopIntent::AddToCart,
            ShopIntent::NextImage,
            ShopIntent::PrevImage,
        ],
    );
    assert_eq!(state.cart_count, 1);
}

#[test]
fn menu_and_cart_presses_change_nothing() {
    let before = reduce_all(fresh(), &[ShopIntent::AddToCart, ShopIntent::NextImage]);
    let after = reduce_all(before, &[ShopIntent::MenuPressed, ShopIntent::CartPressed]);
    assert_eq!(before, after);
}

#[test]
fn single_image_list_never_pages() {
    let state = ShopState::with_image_count(1);
    let state = reduce_all(state, &[ShopIntent::NextImage, ShopIntent::PrevImage]);
    assert_eq!(state.selected_image, 0);
}
