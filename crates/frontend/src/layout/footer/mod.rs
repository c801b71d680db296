use chrono::Datelike;
use leptos::prelude::*;

use crate::shared::config_sync::use_config;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let year = chrono::Utc::now().year();

    let notice = move || {
        config
            .with_config(|c| {
                let mut text = format!("© {} {}", year, c.site_name);
                if !c.developer.trim().is_empty() {
                    text.push_str(&format!(" · Developed by {}", c.developer));
                }
                text
            })
            .unwrap_or_default()
    };

    view! {
        <footer class="footer">
            <span class="footer__text">{notice}</span>
        </footer>
    }
}
