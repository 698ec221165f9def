use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Margin applied to the viewport before a section counts as visible, so
/// content only reveals once it is well inside the screen.
const REVEAL_MARGIN: &str = "-80px";

/// One-way visibility latch. A section that has revealed stays revealed,
/// even if it is scrolled back out of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn observe(self, intersecting: bool) -> RevealState {
        match (self, intersecting) {
            (RevealState::Hidden, true) => RevealState::Visible,
            (state, _) => state,
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, RevealState::Visible)
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps a block of content and fades it up into place the first time it
/// scrolls into the viewport. The observer disconnects after that first
/// reveal, so later intersection changes are never even delivered.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node_ref = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let node_ref = node_ref.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node_ref.cast::<web_sys::Element>() {
                    let on_intersect = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|entry| entry.is_intersecting())
                                    .unwrap_or(false)
                            });
                            let revealed = (*state).observe(intersecting);
                            if revealed.is_visible() {
                                state.set(revealed);
                                observer.disconnect();
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(REVEAL_MARGIN);

                    if let Ok(obs) = IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        obs.observe(&element);
                        observer = Some(obs);
                    }
                    callback = Some(on_intersect);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    let class = classes!(
        "reveal",
        state.is_visible().then(|| "revealed"),
        props.class.clone()
    );

    html! {
        <div ref={node_ref} class={class}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_first_intersection() {
        let state = RevealState::default();
        assert!(!state.is_visible());
        assert_eq!(state.observe(false), RevealState::Hidden);
        assert_eq!(state.observe(true), RevealState::Visible);
    }

    #[test]
    fn reveal_is_permanent() {
        let state = RevealState::Hidden.observe(true);
        assert_eq!(state.observe(false), RevealState::Visible);
        assert_eq!(state.observe(true), RevealState::Visible);
    }

    #[test]
    fn repeated_intersections_change_nothing() {
        let mut state = RevealState::default();
        for intersecting in [true, true, false, true, false, false] {
            state = state.observe(intersecting);
            assert!(state.is_visible());
        }
    }
}
