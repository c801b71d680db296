use contracts::domain::a001_catalog::AdField;
use leptos::prelude::*;

use super::fields::{ImageField, TextField};
use super::view_model::confirm;
use crate::shared::config_sync::ConfigContext;
use crate::shared::icons::icon;

#[component]
pub fn AdEditor(config: ConfigContext) -> impl IntoView {
    let ad_ids = move || {
        config
            .with_config(|c| c.ads.iter().map(|ad| ad.id.clone()).collect::<Vec<_>>())
            .unwrap_or_default()
    };

    view! {
        <div class="admin-section">
            <button
                class="button button--secondary"
                on:click=move |_| {
                    config.update(|c| {
                        c.add_ad();
                    });
                }
            >
                {icon("plus")}
                "Add ad"
            </button>
            <For
                each=ad_ids
                key=|id| id.clone()
                children=move |id| view! { <AdBlock config=config ad_id=id /> }
            />
        </div>
    }
}

#[component]
fn AdBlock(config: ConfigContext, ad_id: String) -> impl IntoView {
    let id = StoredValue::new(ad_id);

    let bind = move |field: AdField| {
        let value = Signal::derive(move || {
            let id = id.get_value();
            config
                .with_config(|c| c.ad(&id).map(|ad| ad.field(field)))
                .flatten()
                .unwrap_or_default()
        });
        let on_change = Callback::new(move |v: String| {
            let id = id.get_value();
            config.update(|c| {
                if let Some(ad) = c.ad_mut(&id) {
                    ad.set_field(field, v);
                }
            });
        });
        (value, on_change)
    };

    let (name, set_name) = bind(AdField::Name);
    let (description, set_description) = bind(AdField::Description);
    let (link, set_link) = bind(AdField::Link);
    let (image, set_image) = bind(AdField::Image);

    let delete = move |_| {
        if confirm(&format!("Delete ad \"{}\"?", name.get_untracked())) {
            let id = id.get_value();
            config.update(|c| {
                c.remove_ad(&id);
            });
        }
    };

    view! {
        <section class="admin-ad">
            <TextField label="Name" value=name on_change=set_name />
            <TextField label="Description" value=description on_change=set_description multiline=true />
            <TextField label="Link" value=link on_change=set_link />
            <ImageField label="Image" value=image on_change=set_image />
            <button class="button button--danger" on:click=delete>
                {icon("trash")}
                "Delete ad"
            </button>
        </section>
    }
}
