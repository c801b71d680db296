use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::app_settings::AppSettings;
use crate::shared::config_sync::provide_config;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::ToastContext;
use crate::system::auth::provide_admin_session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let settings = AppSettings::default();

    provide_context(settings.clone());
    provide_context(AppGlobalContext::new());
    provide_context(ToastContext::new(settings.timing.toast_lifetime_ms));
    provide_admin_session();

    // Starts the cache → bundled → remote acquisition in the background.
    provide_config(&settings);

    view! {
        <ThemeProvider storage_key=settings.storage.theme.clone()>
            <AppRoutes />
        </ThemeProvider>
    }
}
