use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::shared::app_settings::{use_settings, AppSettings};
use crate::shared::config_sync::export::export_configuration;
use crate::shared::config_sync::import::read_configuration_file;
use crate::shared::config_sync::{use_config, ConfigContext};
use crate::shared::storage::LocalStorage;
use crate::shared::toast::{use_toasts, ToastContext, ToastKind};
use crate::system::auth::{use_admin_session, AdminSession};
use crate::system::sync::storage::{
    clear_credentials, get_access_token, get_remote_document_url, save_credentials,
};
use crate::system::sync::{GistClient, Publisher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Site,
    Categories,
    Ads,
    Sync,
}

impl AdminTab {
    pub fn all() -> [AdminTab; 4] {
        [AdminTab::Site, AdminTab::Categories, AdminTab::Ads, AdminTab::Sync]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Site => "Site",
            AdminTab::Categories => "Categories & programs",
            AdminTab::Ads => "Ads",
            AdminTab::Sync => "Sync",
        }
    }
}

/// Ask before deleting anything from the document.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub login_error: RwSignal<Option<String>>,
    pub tab: RwSignal<AdminTab>,
    pub publishing: RwSignal<bool>,
    pub sync_url: RwSignal<String>,
    pub sync_token: RwSignal<String>,
    pub config: ConfigContext,
    pub session: AdminSession,
    toasts: ToastContext,
    settings: StoredValue<AppSettings>,
}

impl AdminViewModel {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            login_error: RwSignal::new(None),
            tab: RwSignal::new(AdminTab::Site),
            publishing: RwSignal::new(false),
            sync_url: RwSignal::new(String::new()),
            sync_token: RwSignal::new(String::new()),
            config: use_config(),
            session: use_admin_session(),
            toasts: use_toasts(),
            settings: StoredValue::new(use_settings()),
        }
    }

    pub fn login_command(&self) {
        let Some(admin) = self.config.snapshot().map(|c| c.admin) else {
            self.login_error.set(Some("Configuration is not loaded yet".to_string()));
            return;
        };

        match self.session.login(
            &admin,
            &self.username.get_untracked(),
            &self.password.get_untracked(),
        ) {
            Ok(()) => {
                self.login_error.set(None);
                self.password.set(String::new());
                self.load_sync_settings();
            }
            Err(e) => self.login_error.set(Some(e)),
        }
    }

    /// Locks the editor again and forgets whatever was typed.
    pub fn reset(&self) {
        self.session.logout();
        self.username.set(String::new());
        self.password.set(String::new());
        self.login_error.set(None);
        self.tab.set(AdminTab::Site);
    }

    pub fn export_command(&self) {
        let Some(config) = self.config.snapshot() else {
            return;
        };
        let filename = self.settings.with_value(|s| s.documents.export_file_name.clone());
        match export_configuration(&config, &filename) {
            Ok(()) => {
                self.toasts.success(format!("Exported {}", filename));
            }
            Err(e) => {
                log::error!("export failed: {}", e);
                self.toasts.error(format!("Export failed: {}", e));
            }
        }
    }

    /// Replaces the whole document with the file's content once it validates.
    pub fn import_command(&self, file: File) {
        let config = self.config;
        let toasts = self.toasts;
        spawn_local(async move {
            match read_configuration_file(&file).await {
                Ok(imported) => {
                    config.replace(imported);
                    toasts.success("Configuration imported");
                }
                Err(e) => {
                    toasts.error(e);
                }
            }
        });
    }

    /// One publish attempt. Retrying is left to the admin.
    pub fn publish_command(&self) {
        if self.publishing.get_untracked() {
            return;
        }
        let Some(config) = self.config.snapshot() else {
            return;
        };

        let publishing = self.publishing;
        let toasts = self.toasts;
        let (api_base, keys) = self
            .settings
            .with_value(|s| (s.documents.store_api_base.clone(), s.storage.clone()));
        let guard = self.config.guard();

        publishing.set(true);
        let toast = toasts.loading("Publishing configuration...");
        spawn_local(async move {
            let publisher = Publisher::new(LocalStorage, GistClient, api_base, keys, guard);
            let result = publisher.publish(&config).await;
            let _ = publishing.try_set(false);
            match result {
                Ok(()) => toasts.resolve(toast, ToastKind::Success, "Configuration published"),
                Err(e) => toasts.resolve(toast, ToastKind::Error, e.to_string()),
            }
        });
    }

    pub fn load_sync_settings(&self) {
        let keys = self.settings.with_value(|s| s.storage.clone());
        self.sync_url
            .set(get_remote_document_url(&LocalStorage, &keys).unwrap_or_default());
        self.sync_token
            .set(get_access_token(&LocalStorage, &keys).unwrap_or_default());
    }

    pub fn clear_sync_command(&self) {
        if !confirm("Forget the remote document URL and access token?") {
            return;
        }
        let keys = self.settings.with_value(|s| s.storage.clone());
        clear_credentials(&LocalStorage, &keys);
        self.sync_url.set(String::new());
        self.sync_token.set(String::new());
        self.toasts.success("Sync settings cleared");
    }

    pub fn save_sync_command(&self) {
        let keys = self.settings.with_value(|s| s.storage.clone());
        match save_credentials(
            &LocalStorage,
            &keys,
            &self.sync_url.get_untracked(),
            &self.sync_token.get_untracked(),
        ) {
            Ok(()) => {
                self.toasts.success("Sync settings saved");
            }
            Err(e) => {
                log::warn!("failed to save sync settings: {}", e);
                self.toasts.error(format!("Could not save sync settings: {}", e));
            }
        }
    }
}
