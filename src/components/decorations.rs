use yew::prelude::*;

pub const HEART_COUNT: usize = 15;
pub const SPARKLE_COUNT: usize = 20;

/// Placement and timing for one floating marker. All values come from a
/// uniform source so a re-render may reshuffle them; nothing depends on
/// the exact draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Percent of the container width, [0, 100).
    pub left: f64,
    /// Percent of the container height, [0, 100).
    pub top: f64,
    /// Animation delay in seconds.
    pub delay: f64,
    /// Animation duration in seconds.
    pub duration: f64,
    /// Font size in pixels; only the hearts use it.
    pub size: f64,
}

/// Drifting hearts: slow (5-10s) with staggered starts up to 6s and sizes
/// between 12 and 32 px.
pub fn heart_markers(count: usize, mut uniform: impl FnMut() -> f64) -> Vec<Marker> {
    (0..count)
        .map(|_| Marker {
            left: uniform() * 100.0,
            top: uniform() * 100.0,
            delay: uniform() * 6.0,
            duration: 5.0 + uniform() * 5.0,
            size: 12.0 + uniform() * 20.0,
        })
        .collect()
}

/// Twinkling sparkles: quicker (2-5s) with starts staggered up to 3s.
pub fn sparkle_markers(count: usize, mut uniform: impl FnMut() -> f64) -> Vec<Marker> {
    (0..count)
        .map(|_| Marker {
            left: uniform() * 100.0,
            top: uniform() * 100.0,
            delay: uniform() * 3.0,
            duration: 2.0 + uniform() * 3.0,
            size: 0.0,
        })
        .collect()
}

/// Full-screen layer of drifting hearts behind the page content.
#[function_component(FloatingHearts)]
pub fn floating_hearts() -> Html {
    let markers = use_memo(|_| heart_markers(HEART_COUNT, js_sys::Math::random), ());

    html! {
        <div class="floating-hearts">
            { for markers.iter().map(|marker| {
                let style = format!(
                    "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; \
                     animation-duration: {:.2}s; font-size: {:.1}px;",
                    marker.left, marker.top, marker.delay, marker.duration, marker.size,
                );
                html! { <span class="heart" {style}>{"❤"}</span> }
            }) }
        </div>
    }
}

/// Sparkle layer scoped to whatever section it is rendered inside.
#[function_component(Sparkles)]
pub fn sparkles() -> Html {
    let markers = use_memo(|_| sparkle_markers(SPARKLE_COUNT, js_sys::Math::random), ());

    html! {
        <div class="sparkles">
            { for markers.iter().map(|marker| {
                let style = format!(
                    "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; \
                     animation-duration: {:.2}s;",
                    marker.left, marker.top, marker.delay, marker.duration,
                );
                html! { <span class="sparkle" {style}></span> }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Walks the whole [0, 1) interval including both edges of each draw.
    fn scripted(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn produces_exactly_count_markers() {
        assert_eq!(heart_markers(HEART_COUNT, scripted(&[0.5])).len(), HEART_COUNT);
        assert_eq!(sparkle_markers(SPARKLE_COUNT, scripted(&[0.5])).len(), SPARKLE_COUNT);
        assert!(heart_markers(0, scripted(&[0.5])).is_empty());
    }

    #[test]
    fn heart_values_stay_in_designed_ranges() {
        for markers in [
            heart_markers(HEART_COUNT, scripted(&[0.0])),
            heart_markers(HEART_COUNT, scripted(&[0.999_999])),
            heart_markers(HEART_COUNT, scripted(&[0.0, 0.3, 0.7, 0.999_999])),
        ] {
            for marker in markers {
                assert!((0.0..100.0).contains(&marker.left));
                assert!((0.0..100.0).contains(&marker.top));
                assert!((0.0..6.0).contains(&marker.delay));
                assert!((5.0..10.0).contains(&marker.duration));
                assert!((12.0..32.0).contains(&marker.size));
            }
        }
    }

    #[test]
    fn sparkle_values_stay_in_designed_ranges() {
        for markers in [
            sparkle_markers(SPARKLE_COUNT, scripted(&[0.0])),
            sparkle_markers(SPARKLE_COUNT, scripted(&[0.999_999])),
            sparkle_markers(SPARKLE_COUNT, scripted(&[0.1, 0.9, 0.4])),
        ] {
            for marker in markers {
                assert!((0.0..100.0).contains(&marker.left));
                assert!((0.0..100.0).contains(&marker.top));
                assert!((0.0..3.0).contains(&marker.delay));
                assert!((2.0..5.0).contains(&marker.duration));
            }
        }
    }

    #[test]
    fn markers_draw_independently() {
        let markers = heart_markers(2, scripted(&[0.1, 0.2, 0.3, 0.4, 0.5]));
        assert_ne!(markers[0], markers[1]);
    }
}
