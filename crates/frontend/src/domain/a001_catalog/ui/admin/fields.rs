use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::file_reader::{read_as_data_url, take_selected_file};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] secret: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                rows="4"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=if secret { "password" } else { "text" }
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="form-group">
            <span class="form-group__label">{label}</span>
            {input}
        </label>
    }
}

/// Image reference: a URL typed in, or an uploaded file embedded as a data URL.
#[component]
pub fn ImageField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let toasts = use_toasts();

    let on_file = move |ev: web_sys::Event| {
        let Some(file) = take_selected_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data_url) => on_change.run(data_url),
                Err(e) => {
                    log::error!("image upload failed: {}", e);
                    toasts.error(e);
                }
            }
        });
    };

    view! {
        <div class="form-group image-field">
            <span class="form-group__label">{label}</span>
            <div class="image-field__row">
                <input
                    type="text"
                    placeholder="https://..."
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
                <label class="button button--secondary image-field__upload">
                    {icon("upload")}
                    "Upload"
                    <input type="file" accept="image/*" style="display: none;" on:change=on_file />
                </label>
            </div>
            <Show when=move || !value.get().is_empty()>
                <img class="image-field__preview" src=move || value.get() alt="" />
            </Show>
        </div>
    }
}
