use contracts::shared::video::youtube_embed_url;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use super::state::{AdGate, GateStep};
use crate::shared::modal_frame::ModalFrame;

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("failed to open {}: {:?}", url, e);
        }
    }
}

/// Ad gate dialog. While the gate counts down, a one-second interval ticks
/// it; the interval is dropped as soon as counting stops, the gate closes or
/// the component is torn down.
#[component]
pub fn AdGateModal(
    gate: RwSignal<AdGate>,
    /// Ad video address as entered by the admin.
    #[prop(into)]
    ad_url: Signal<String>,
    /// Called with the download link when the visitor takes it.
    on_download: Callback<String>,
) -> impl IntoView {
    let ticker = StoredValue::new_local(None::<Interval>);

    Effect::new(move |_| {
        if gate.with(AdGate::is_counting) {
            if ticker.with_value(Option::is_none) {
                ticker.set_value(Some(Interval::new(1_000, move || {
                    gate.try_update(|g| {
                        g.tick();
                    });
                })));
            }
        } else {
            ticker.set_value(None);
        }
    });

    on_cleanup(move || {
        let _ = ticker.try_set_value(None);
    });

    let close = Callback::new(move |_| {
        gate.update(|g| {
            g.dismiss();
        });
    });

    let visit_post_ad = move |_| {
        if let Some(url) = gate.try_update(AdGate::visit_post_ad).flatten() {
            open_in_new_tab(&url);
        }
    };

    let take_download = move |_| {
        if let Some(url) = gate.try_update(AdGate::take_download).flatten() {
            open_in_new_tab(&url);
            on_download.run(url);
        }
    };

    let video = move || {
        let url = ad_url.get();
        match youtube_embed_url(&url) {
            Some(src) => view! {
                <iframe
                    class="ad-gate__video"
                    src=src
                    title="Advertisement"
                    allow="autoplay; encrypted-media"
                    allowfullscreen=true
                ></iframe>
            }
            .into_any(),
            None => view! {
                <a class="ad-gate__link" href=url target="_blank" rel="noopener noreferrer">
                    "Open the ad"
                </a>
            }
            .into_any(),
        }
    };

    view! {
        <Show when=move || gate.with(AdGate::is_open)>
            <ModalFrame on_close=close modal_class="ad-gate".to_string()>
                {video}
                <div class="ad-gate__actions">
                    {move || match gate.with(AdGate::step) {
                        GateStep::Counting(n) => view! {
                            <p class="ad-gate__countdown">
                                {format!("The download link will be ready in {} s", n)}
                            </p>
                        }
                        .into_any(),
                        GateStep::PostAd => view! {
                            <button class="button button--primary" on:click=visit_post_ad>
                                "Continue"
                            </button>
                        }
                        .into_any(),
                        GateStep::Download => view! {
                            <button class="button button--primary" on:click=take_download>
                                "Download"
                            </button>
                        }
                        .into_any(),
                    }}
                    <Show when=move || gate.with(AdGate::can_dismiss)>
                        <button class="button button--ghost" on:click=move |_| close.run(())>
                            "Close"
                        </button>
                    </Show>
                </div>
            </ModalFrame>
        </Show>
    }
}
