//! Dark / light theme, persisted in the durable store.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::storage::{KeyValueStore, LocalStorage};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Unknown or missing values fall back to dark.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

pub fn load_theme<S: KeyValueStore>(store: &S, key: &str) -> Theme {
    store.get(key).map(|s| Theme::parse(&s)).unwrap_or_default()
}

pub fn save_theme<S: KeyValueStore>(store: &S, key: &str, theme: Theme) {
    if let Err(e) = store.set(key, theme.as_str()) {
        log::warn!("failed to persist theme: {}", e);
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme(&LocalStorage, &self.storage_key.get_value(), theme);
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

#[component]
pub fn ThemeProvider(#[prop(into)] storage_key: String, children: Children) -> impl IntoView {
    let initial_theme = load_theme(&LocalStorage, &storage_key);
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
        storage_key: StoredValue::new(storage_key),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="button button--icon header__action"
            title=move || match ctx.theme.get() {
                Theme::Dark => "Switch to light theme",
                Theme::Light => "Switch to dark theme",
            }
            on:click=move |_| ctx.toggle()
        >
            {move || match ctx.theme.get() {
                Theme::Dark => crate::shared::icons::icon("sun"),
                Theme::Light => crate::shared::icons::icon("moon"),
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn test_theme_persists() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store, "catalog.theme"), Theme::Dark);
        save_theme(&store, "catalog.theme", Theme::Dark.toggled());
        assert_eq!(load_theme(&store, "catalog.theme"), Theme::Light);
        store.set("catalog.theme", "forest").unwrap();
        assert_eq!(load_theme(&store, "catalog.theme"), Theme::Dark);
    }
}
