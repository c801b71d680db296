use leptos::prelude::*;

use crate::layout::global_context::{use_global_context, InfoTopic};
use crate::shared::config_sync::use_config;
use crate::shared::modal_frame::ModalFrame;

/// Site "about" and "advertise" texts from the document.
#[component]
pub fn InfoModal() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_config();

    let text = move |topic: InfoTopic| {
        config
            .with_config(|c| match topic {
                InfoTopic::About => c.site_about.clone(),
                InfoTopic::Advertise => c.advertise_info.clone(),
            })
            .flatten()
            .unwrap_or_default()
    };

    view! {
        {move || {
            ctx.info.get().map(|topic| {
                view! {
                    <ModalFrame
                        on_close=Callback::new(move |_| ctx.close_info())
                        title=topic.title()
                        modal_class="info-modal".to_string()
                    >
                        <p class="info-modal__text">{text(topic)}</p>
                    </ModalFrame>
                }
            })
        }}
    }
}
