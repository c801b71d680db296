use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::global_context::{use_global_context, InfoTopic};
use crate::shared::config_sync::use_config;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_config();

    let site_name = move || config.with_config(|c| c.site_name.clone()).unwrap_or_default();
    let site_logo = move || {
        config
            .with_config(|c| c.site_logo.clone())
            .filter(|logo| !logo.is_empty())
    };
    let has_about = move || config.with_config(|c| c.site_about.is_some()).unwrap_or(false);
    let has_advertise = move || {
        config
            .with_config(|c| c.advertise_info.is_some())
            .unwrap_or(false)
    };

    view! {
        <header class="header">
            <A href="/">
                <span class="header__brand">
                    {move || site_logo().map(|logo| view! { <img class="header__logo" src=logo alt="" /> })}
                    <span class="header__title">{site_name}</span>
                </span>
            </A>
            <div class="header__actions">
                <Show when=has_about>
                    <button
                        class="button button--icon header__action"
                        title="About"
                        on:click=move |_| ctx.show_info(InfoTopic::About)
                    >
                        {icon("info")}
                    </button>
                </Show>
                <Show when=has_advertise>
                    <button
                        class="button button--icon header__action"
                        title="Advertise with us"
                        on:click=move |_| ctx.show_info(InfoTopic::Advertise)
                    >
                        {icon("megaphone")}
                    </button>
                </Show>
                <ThemeToggle />
                <button
                    class="button button--icon header__action"
                    title="Admin"
                    on:click=move |_| ctx.open_admin()
                >
                    {icon("lock")}
                </button>
            </div>
        </header>
    }
}
