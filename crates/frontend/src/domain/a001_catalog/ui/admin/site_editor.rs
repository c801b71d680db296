use contracts::domain::a001_catalog::SiteField;
use leptos::prelude::*;

use super::fields::{ImageField, TextField};
use crate::shared::config_sync::ConfigContext;

fn bind(config: ConfigContext, field: SiteField) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || {
        config
            .with_config(|c| c.site_field(field))
            .unwrap_or_default()
    });
    let on_change = Callback::new(move |v: String| {
        config.update(|c| c.set_site_field(field, v));
    });
    (value, on_change)
}

#[component]
pub fn SiteEditor(config: ConfigContext) -> impl IntoView {
    let (site_name, set_site_name) = bind(config, SiteField::SiteName);
    let (site_logo, set_site_logo) = bind(config, SiteField::SiteLogo);
    let (developer, set_developer) = bind(config, SiteField::Developer);
    let (about, set_about) = bind(config, SiteField::SiteAbout);
    let (advertise, set_advertise) = bind(config, SiteField::AdvertiseInfo);
    let (username, set_username) = bind(config, SiteField::AdminUsername);
    let (password, set_password) = bind(config, SiteField::AdminPassword);

    view! {
        <div class="admin-section">
            <h3>"Site"</h3>
            <TextField label="Site name" value=site_name on_change=set_site_name />
            <ImageField label="Logo" value=site_logo on_change=set_site_logo />
            <TextField label="Developer" value=developer on_change=set_developer />
            <TextField label="About" value=about on_change=set_about multiline=true />
            <TextField
                label="Advertise with us"
                value=advertise
                on_change=set_advertise
                multiline=true
            />

            <h3>"Admin credentials"</h3>
            <p class="hint">"Stored in plain text inside the configuration document."</p>
            <TextField label="Username" value=username on_change=set_username />
            <TextField label="Password" value=password on_change=set_password secret=true />
        </div>
    }
}
