use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_catalog::{Configuration, DocumentError};

/// Remote document URL and access token, kept outside the catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncCredentials {
    pub remote_document_url: String,
    pub access_token: String,
}

impl SyncCredentials {
    /// Both parts present and non-blank.
    pub fn from_parts(url: Option<String>, token: Option<String>) -> Option<Self> {
        let remote_document_url = url.filter(|u| !u.trim().is_empty())?;
        let access_token = token.filter(|t| !t.trim().is_empty())?;
        Some(Self {
            remote_document_url: remote_document_url.trim().to_string(),
            access_token: access_token.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub content: String,
}

/// Partial-update body: `{ "files": { "<name>": { "content": "..." } } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    pub files: BTreeMap<String, FileContent>,
}

impl PublishRequest {
    pub fn replace_file(file_name: &str, config: &Configuration) -> Result<Self, DocumentError> {
        let mut files = BTreeMap::new();
        files.insert(
            file_name.to_string(),
            FileContent {
                content: config.to_pretty_json()?,
            },
        );
        Ok(Self { files })
    }
}
