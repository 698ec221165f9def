#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::wasm_bindgen_test;

use our_story::audio::Playback;
use our_story::components::decorations::{
    heart_markers, sparkle_markers, HEART_COUNT, SPARKLE_COUNT,
};
use our_story::components::scroll_reveal::RevealState;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn heart_markers_from_real_randomness_stay_in_range() {
    let markers = heart_markers(HEART_COUNT, js_sys::Math::random);
    assert_eq!(markers.len(), HEART_COUNT);
    for marker in markers {
        assert!((0.0..100.0).contains(&marker.left));
        assert!((0.0..100.0).contains(&marker.top));
        assert!((0.0..6.0).contains(&marker.delay));
        assert!((5.0..10.0).contains(&marker.duration));
        assert!((12.0..32.0).contains(&marker.size));
    }
}

#[wasm_bindgen_test]
fn sparkle_markers_from_real_randomness_stay_in_range() {
    let markers = sparkle_markers(SPARKLE_COUNT, js_sys::Math::random);
    assert_eq!(markers.len(), SPARKLE_COUNT);
    for marker in markers {
        assert!((0.0..100.0).contains(&marker.left));
        assert!((0.0..100.0).contains(&marker.top));
        assert!((0.0..3.0).contains(&marker.delay));
        assert!((2.0..5.0).contains(&marker.duration));
    }
}

#[wasm_bindgen_test]
fn reveal_latch_holds_under_wasm() {
    let revealed = RevealState::Hidden.observe(true);
    assert!(revealed.is_visible());
    assert!(revealed.observe(false).is_visible());
}

#[wasm_bindgen_test]
fn playback_unlock_then_mute_cycle() {
    let playing = Playback::NotStarted.start_succeeded();
    assert_eq!(playing, Playback::Playing { muted: false });
    let muted = playing.toggled();
    assert!(muted.is_muted());
    assert_eq!(muted.toggled(), playing);
}
