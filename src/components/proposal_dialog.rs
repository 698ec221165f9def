use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[derive(Properties, PartialEq)]
pub struct ProposalDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Modal with the closing sentiment. The dialog owns its dismissal:
/// backdrop click, the close button, and Escape all emit `on_close`.
#[function_component(ProposalDialog)]
pub fn proposal_dialog(props: &ProposalDialogProps) -> Html {
    let open = props.open;

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let mut listener = None;
                if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                            if event.key() == "Escape" {
                                on_close.emit(());
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                        listener = Some((document, on_keydown));
                    }
                }
                move || {
                    if let Some((document, on_keydown)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            open,
        );
    }

    if !open {
        return html! {};
    }

    let close_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-backdrop" onclick={close_backdrop}>
            <div class="dialog-card" onclick={swallow_click}>
                <button class="dialog-close" aria-label="Close" onclick={close_button}>
                    {"×"}
                </button>
                <div class="dialog-title">{"❤️"}</div>
                <p class="dialog-lead">{"You are my home, Mounika."}</p>
                <p class="dialog-line">{"My today."}</p>
                <p class="dialog-line">{"My tomorrow."}</p>
                <p class="dialog-forever">{"My forever."}</p>
            </div>
        </div>
    }
}
