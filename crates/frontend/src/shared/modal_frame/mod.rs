use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Overlay plus a positioned surface with an optional title bar.
///
/// `closable` hides the close button and ignores overlay clicks while false;
/// hosts that also guard their own state (the ad gate) may leave it unset.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click or close button).
    on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] closable: Option<Signal<bool>>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let closable = closable.unwrap_or_else(|| Signal::derive(|| true));
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so selecting text inside the modal never closes it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            closable.get_untracked() && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Next tick: the overlay is removed by the close itself.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {title.map(|title| view! {
                    <div class="modal-header">
                        <h2 class="modal-title">{title}</h2>
                        <Show when=move || closable.get()>
                            <button
                                class="button button--icon modal__close"
                                title="Close"
                                on:click=move |_| on_close.run(())
                            >
                                {icon("x")}
                            </button>
                        </Show>
                    </div>
                })}
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
