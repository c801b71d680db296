use contracts::domain::a001_catalog::Program;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::shared::ad_gate::{AdGate, AdGateModal};
use crate::shared::app_settings::use_settings;
use crate::shared::config_sync::use_config;
use crate::shared::downloads::{count_for, record_download};
use crate::shared::icons::icon;
use crate::shared::storage::LocalStorage;

/// `/program/:slug`. The first program whose name slugifies to `slug` is shown.
#[component]
pub fn ProgramPage() -> impl IntoView {
    let params = use_params_map();
    let config = use_config();
    let settings = use_settings();
    let gate = RwSignal::new(AdGate::with_countdown(settings.timing.ad_countdown_secs));
    let downloads_key = settings.storage.download_counts;

    let found = Memo::new(move |_| {
        let slug = params.with(|p| p.get("slug").unwrap_or_default());
        config
            .with_config(|c| {
                c.find_by_slug(&slug).map(|program| {
                    let category = c.category_of(&program.id).map(|cat| cat.name.clone());
                    (program.clone(), category)
                })
            })
            .flatten()
    });

    view! {
        {move || match found.get() {
            Some((program, category)) => view! {
                <ProgramDetails
                    program=program
                    category=category
                    gate=gate
                    downloads_key=downloads_key.clone()
                />
            }
            .into_any(),
            None => view! { <ProgramNotFound /> }.into_any(),
        }}
    }
}

#[component]
fn ProgramDetails(
    program: Program,
    category: Option<String>,
    gate: RwSignal<AdGate>,
    downloads_key: String,
) -> impl IntoView {
    let downloads = RwSignal::new(count_for(&LocalStorage, &downloads_key, &program.id));

    let program_id = program.id.clone();
    let on_download = Callback::new(move |_url: String| {
        downloads.set(record_download(&LocalStorage, &downloads_key, &program_id));
    });

    let gated = program.clone();
    let open_gate = move |_| gate.update(|g| g.open_for(&gated));

    view! {
        <article class="program-page">
            <A href="/">
                <span class="program-page__back">"← Back to catalog"</span>
            </A>
            <header class="program-page__header">
                <img class="program-page__image" src=program.image alt=program.name.clone() />
                <div>
                    <h1 class="program-page__name">
                        {program.name}
                        {program.badge.map(|badge| view! { <span class="badge">{badge}</span> })}
                    </h1>
                    {category.map(|name| view! { <p class="program-page__category">{name}</p> })}
                    <p class="program-page__downloads">
                        {move || format!("Downloads: {}", downloads.get())}
                    </p>
                </div>
            </header>
            <p class="program-page__description">{program.long_description}</p>
            <button class="button button--primary program-page__download" on:click=open_gate>
                {icon("download")}
                "Download"
            </button>
            <AdGateModal gate=gate ad_url=program.ad_url on_download=on_download />
        </article>
    }
}

#[component]
fn ProgramNotFound() -> impl IntoView {
    let config = use_config();

    view! {
        <Show
            when=move || !config.is_loading()
            fallback=|| view! { <p class="loading">"Loading..."</p> }
        >
            <div class="not-found">
                <h1>"Program not found"</h1>
                <p>"The program you are looking for does not exist or was renamed."</p>
                <A href="/">"Back to catalog"</A>
            </div>
        </Show>
    }
}
