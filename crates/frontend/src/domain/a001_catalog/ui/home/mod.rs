use contracts::domain::a001_catalog::{Category, Program};
use contracts::shared::slug::slugify;
use leptos::prelude::*;
use leptos_router::components::A;

use super::ads::AdsStrip;
use crate::shared::config_sync::use_config;
use crate::shared::list_utils::{filter_categories, highlight_matches, SearchInput};

#[component]
pub fn CatalogHome() -> impl IntoView {
    let config = use_config();
    let (filter, set_filter) = signal(String::new());

    let visible = move || {
        config
            .with_config(|c| filter_categories(&c.categories, &filter.get()))
            .unwrap_or_default()
    };

    view! {
        <section class="catalog">
            <AdsStrip />
            <div class="catalog__search">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
            </div>
            {move || {
                let categories = visible();
                if categories.is_empty() {
                    view! { <p class="catalog__empty">"No programs match your search."</p> }
                        .into_any()
                } else {
                    categories
                        .into_iter()
                        .map(|category| view! { <CategoryCard category=category filter=filter /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn CategoryCard(category: Category, filter: ReadSignal<String>) -> impl IntoView {
    view! {
        <div class="category-card">
            <h2 class="category-card__title">{category.name}</h2>
            <div class="program-grid">
                {category
                    .programs
                    .into_iter()
                    .map(|program| view! { <ProgramCard program=program filter=filter /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProgramCard(program: Program, filter: ReadSignal<String>) -> impl IntoView {
    let href = format!("/program/{}", slugify(&program.name));
    let name = program.name.clone();
    let short_description = program.short_description;

    view! {
        <A href=href>
            <div class="program-card">
                <img class="program-card__image" src=program.image alt=program.name loading="lazy" />
                {program.badge.map(|badge| view! { <span class="badge">{badge}</span> })}
                <h3 class="program-card__name">{move || highlight_matches(&name, &filter.get())}</h3>
                <p class="program-card__summary">
                    {move || highlight_matches(&short_description, &filter.get())}
                </p>
            </div>
        </A>
    }
}
