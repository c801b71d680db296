use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::validation::{self, DocumentError};

// ============================================================================
// Entities
// ============================================================================

/// Admin credential pair, compared in plaintext.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AdminCredentials {
    /// A document without a password never accepts a login.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.as_deref() == Some(password)
    }
}

/// Downloadable program shown on the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub download_url: String,
    #[serde(default)]
    pub ad_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_ad_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Program {
    pub fn new_placeholder() -> Self {
        Self {
            id: new_id("prog"),
            name: "New program".to_string(),
            short_description: "Short description".to_string(),
            long_description: "Long description".to_string(),
            image: "https://via.placeholder.com/128".to_string(),
            download_url: "#".to_string(),
            ad_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            post_ad_url: None,
            badge: None,
        }
    }

    /// Secondary link visited after the ad, if one is declared.
    pub fn post_ad_link(&self) -> Option<&str> {
        self.post_ad_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub programs: Vec<Program>,
}

impl Category {
    pub fn new_placeholder() -> Self {
        Self {
            id: new_id("cat"),
            name: "New category".to_string(),
            programs: Vec::new(),
        }
    }
}

/// Promotional ad listed on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: String,
}

impl Ad {
    pub fn new_placeholder() -> Self {
        Self {
            id: new_id("ad"),
            name: "New ad".to_string(),
            description: String::new(),
            link: "#".to_string(),
            image: "https://via.placeholder.com/300x150".to_string(),
        }
    }
}

fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// The whole catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub site_name: String,
    #[serde(default)]
    pub site_logo: String,
    #[serde(default)]
    pub developer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertise_info: Option<String>,
    pub admin: AdminCredentials,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub ads: Vec<Ad>,
}

impl Configuration {
    /// Pretty-printed (2-space) JSON, the format used for export, cache and publish.
    pub fn to_pretty_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Json(e.to_string()))
    }

    /// All programs in display order.
    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.categories.iter().flat_map(|c| c.programs.iter())
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn program(&self, program_id: &str) -> Option<&Program> {
        self.programs().find(|p| p.id == program_id)
    }

    pub fn ad(&self, ad_id: &str) -> Option<&Ad> {
        self.ads.iter().find(|a| a.id == ad_id)
    }

    pub fn category_of(&self, program_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.programs.iter().any(|p| p.id == program_id))
    }

    pub fn category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    pub fn program_mut(&mut self, program_id: &str) -> Option<&mut Program> {
        self.categories
            .iter_mut()
            .flat_map(|c| c.programs.iter_mut())
            .find(|p| p.id == program_id)
    }

    pub fn ad_mut(&mut self, ad_id: &str) -> Option<&mut Ad> {
        self.ads.iter_mut().find(|a| a.id == ad_id)
    }

    /// Appends a placeholder category and returns its id.
    pub fn add_category(&mut self) -> String {
        let category = Category::new_placeholder();
        let id = category.id.clone();
        self.categories.push(category);
        id
    }

    pub fn remove_category(&mut self, category_id: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != category_id);
        self.categories.len() != before
    }

    /// Appends a placeholder program to the category; `None` if the category is unknown.
    pub fn add_program(&mut self, category_id: &str) -> Option<String> {
        let category = self.category_mut(category_id)?;
        let program = Program::new_placeholder();
        let id = program.id.clone();
        category.programs.push(program);
        Some(id)
    }

    pub fn remove_program(&mut self, program_id: &str) -> bool {
        let mut removed = false;
        for category in &mut self.categories {
            let before = category.programs.len();
            category.programs.retain(|p| p.id != program_id);
            removed |= category.programs.len() != before;
        }
        removed
    }

    pub fn add_ad(&mut self) -> String {
        let ad = Ad::new_placeholder();
        let id = ad.id.clone();
        self.ads.push(ad);
        id
    }

    pub fn remove_ad(&mut self, ad_id: &str) -> bool {
        let before = self.ads.len();
        self.ads.retain(|a| a.id != ad_id);
        self.ads.len() != before
    }
}

// ============================================================================
// Bootstrap document
// ============================================================================

/// The bundled default document: a Configuration that may also carry a
/// `remoteDocumentUrl` pointer to the live document.
#[derive(Debug, Clone)]
pub struct BootstrapDocument {
    raw: Value,
}

impl BootstrapDocument {
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let raw: Value =
            serde_json::from_str(text).map_err(|e| DocumentError::Json(e.to_string()))?;
        if !raw.is_object() {
            return Err(DocumentError::NotAnObject);
        }
        Ok(Self { raw })
    }

    /// The live document address, when the bundled document declares one.
    pub fn remote_pointer(&self) -> Option<&str> {
        self.raw
            .get("remoteDocumentUrl")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// The bundled document itself, used when no remote document is reachable.
    pub fn into_configuration(self) -> Result<Configuration, DocumentError> {
        validation::configuration_from_value(self.raw, validation::BOOTSTRAP_RULES)
    }
}
