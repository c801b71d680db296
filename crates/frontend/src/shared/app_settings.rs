use serde::Deserialize;

/// Application settings: document locations, timings and storage keys.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub documents: DocumentSettings,
    pub timing: TimingSettings,
    pub storage: StorageKeys,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DocumentSettings {
    /// Bundled default document served next to the app.
    pub bootstrap_path: String,
    /// Base URL of the document store API used for publishing.
    pub store_api_base: String,
    /// File name offered by the local export.
    pub export_file_name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimingSettings {
    pub ad_countdown_secs: u32,
    pub toast_lifetime_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageKeys {
    pub config: String,
    pub remote_document_url: String,
    pub access_token: String,
    pub download_counts: String,
    pub theme: String,
}

/// Default settings embedded in the bundle
const DEFAULT_SETTINGS: &str = r#"
[documents]
bootstrap_path = "/config.json"
store_api_base = "https://api.github.com"
export_file_name = "config.json"

[timing]
ad_countdown_secs = 20
toast_lifetime_ms = 5000

[storage]
config = "catalog.config"
remote_document_url = "catalog.sync.remoteDocumentUrl"
access_token = "catalog.sync.accessToken"
download_counts = "catalog.downloadCounts"
theme = "catalog.theme"
"#;

impl AppSettings {
    /// Parses the embedded defaults.
    pub fn load() -> Result<Self, String> {
        toml::from_str(DEFAULT_SETTINGS).map_err(|e| format!("invalid embedded settings: {}", e))
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::error!("{}", e);
            Self {
                documents: DocumentSettings {
                    bootstrap_path: "/config.json".into(),
                    store_api_base: "https://api.github.com".into(),
                    export_file_name: "config.json".into(),
                },
                timing: TimingSettings {
                    ad_countdown_secs: 20,
                    toast_lifetime_ms: 5000,
                },
                storage: StorageKeys {
                    config: "catalog.config".into(),
                    remote_document_url: "catalog.sync.remoteDocumentUrl".into(),
                    access_token: "catalog.sync.accessToken".into(),
                    download_counts: "catalog.downloadCounts".into(),
                    theme: "catalog.theme".into(),
                },
            }
        })
    }
}

pub fn use_settings() -> AppSettings {
    leptos::prelude::use_context::<AppSettings>().expect("AppSettings not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = AppSettings::load();
        assert!(settings.is_ok());
        let settings = settings.unwrap();
        assert_eq!(settings.documents.bootstrap_path, "/config.json");
        assert_eq!(settings.timing.ad_countdown_secs, 20);
    }

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys = AppSettings::default().storage;
        let all = [
            &keys.config,
            &keys.remote_document_url,
            &keys.access_token,
            &keys.download_counts,
            &keys.theme,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
