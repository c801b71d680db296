use contracts::domain::a001_catalog::Ad;
use leptos::prelude::*;

use crate::shared::config_sync::use_config;

/// Promotional ads listed above the catalog.
#[component]
pub fn AdsStrip() -> impl IntoView {
    let config = use_config();
    let ads = move || config.with_config(|c| c.ads.clone()).unwrap_or_default();

    view! {
        <Show when=move || !ads().is_empty()>
            <section class="ads-strip">
                <For each=ads key=|ad| ad.id.clone() children=|ad| view! { <AdCard ad=ad /> } />
            </section>
        </Show>
    }
}

#[component]
fn AdCard(ad: Ad) -> impl IntoView {
    view! {
        <a class="ad-card" href=ad.link target="_blank" rel="noopener noreferrer sponsored">
            <img class="ad-card__image" src=ad.image alt=ad.name.clone() loading="lazy" />
            <div class="ad-card__body">
                <h3 class="ad-card__title">{ad.name}</h3>
                <p class="ad-card__description">{ad.description}</p>
            </div>
        </a>
    }
}
