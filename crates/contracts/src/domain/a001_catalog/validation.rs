//! Structural checks applied before a JSON document is accepted as the
//! catalog Configuration.
//!
//! Each source has its own minimum: a cached copy only needs `siteName` and
//! `admin`, a remote document must also carry an array of `categories`, and an
//! admin import must name `siteName`, `categories` and `admin`.

use serde_json::Value;
use thiserror::Error;

use super::aggregate::Configuration;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("document is not valid JSON: {0}")]
    Json(String),

    #[error("document must be a JSON object")]
    NotAnObject,

    #[error("document is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must be an array")]
    NotAnArray(&'static str),

    #[error("document does not match the configuration shape: {0}")]
    Shape(String),
}

/// Fields a document must carry, and which of them must be arrays.
#[derive(Debug, Clone, Copy)]
pub struct ShapeRules {
    pub required: &'static [&'static str],
    pub arrays: &'static [&'static str],
}

pub const CACHE_RULES: ShapeRules = ShapeRules {
    required: &["siteName", "admin"],
    arrays: &[],
};

pub const BOOTSTRAP_RULES: ShapeRules = CACHE_RULES;

pub const REMOTE_RULES: ShapeRules = ShapeRules {
    required: &["siteName", "admin", "categories"],
    arrays: &["categories"],
};

pub const IMPORT_RULES: ShapeRules = ShapeRules {
    required: &["siteName", "categories", "admin"],
    arrays: &["categories"],
};

pub fn check_shape(value: &Value, rules: ShapeRules) -> Result<(), DocumentError> {
    let object = value.as_object().ok_or(DocumentError::NotAnObject)?;
    for field in rules.required {
        if !object.contains_key(*field) {
            return Err(DocumentError::MissingField(*field));
        }
    }
    for field in rules.arrays {
        if !object.get(*field).is_some_and(Value::is_array) {
            return Err(DocumentError::NotAnArray(*field));
        }
    }
    Ok(())
}

pub fn configuration_from_value(
    value: Value,
    rules: ShapeRules,
) -> Result<Configuration, DocumentError> {
    check_shape(&value, rules)?;
    serde_json::from_value(value).map_err(|e| DocumentError::Shape(e.to_string()))
}

fn configuration_from_str(text: &str, rules: ShapeRules) -> Result<Configuration, DocumentError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| DocumentError::Json(e.to_string()))?;
    configuration_from_value(value, rules)
}

/// A configuration read back from the durable cache.
pub fn parse_cached(text: &str) -> Result<Configuration, DocumentError> {
    configuration_from_str(text, CACHE_RULES)
}

/// A configuration fetched from the remote document store.
pub fn parse_remote(text: &str) -> Result<Configuration, DocumentError> {
    configuration_from_str(text, REMOTE_RULES)
}

/// A configuration file supplied by the admin.
pub fn parse_import(text: &str) -> Result<Configuration, DocumentError> {
    configuration_from_str(text, IMPORT_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "siteName": "Demo",
        "siteLogo": "",
        "developer": "Dev",
        "admin": { "username": "a", "password": "b" },
        "categories": [],
        "ads": []
    }"#;

    #[test]
    fn test_cache_needs_site_name_and_admin() {
        assert!(parse_cached(r#"{"siteName":"S","admin":{"username":"u"}}"#).is_ok());
        assert_eq!(
            parse_cached(r#"{"admin":{"username":"u"}}"#).unwrap_err(),
            DocumentError::MissingField("siteName")
        );
        assert_eq!(
            parse_cached(r#"{"siteName":"S"}"#).unwrap_err(),
            DocumentError::MissingField("admin")
        );
    }

    #[test]
    fn test_remote_rejects_array_and_missing_categories() {
        assert!(parse_remote(VALID).is_ok());
        assert_eq!(
            parse_remote(&format!("[{}]", VALID)).unwrap_err(),
            DocumentError::NotAnObject
        );
        assert_eq!(
            parse_remote(r#"{"siteName":"S","admin":{"username":"u"}}"#).unwrap_err(),
            DocumentError::MissingField("categories")
        );
        assert_eq!(
            parse_remote(r#"{"siteName":"S","admin":{"username":"u"},"categories":{}}"#)
                .unwrap_err(),
            DocumentError::NotAnArray("categories")
        );
    }

    #[test]
    fn test_import_names_the_missing_field() {
        let err = parse_import(r#"{"siteName":"S","admin":{"username":"u"}}"#).unwrap_err();
        assert_eq!(err.to_string(), "document is missing required field `categories`");
        assert!(matches!(parse_import("not json"), Err(DocumentError::Json(_))));
    }

    #[test]
    fn test_wrong_field_types_are_shape_errors() {
        let err = parse_import(r#"{"siteName":5,"admin":{"username":"u"},"categories":[]}"#)
            .unwrap_err();
        assert!(matches!(err, DocumentError::Shape(_)));
    }

    #[test]
    fn test_export_then_import_round_trips() {
        let mut config = parse_import(VALID).unwrap();
        let cat = config.add_category();
        let prog = config.add_program(&cat).unwrap();
        let program = config.program_mut(&prog).unwrap();
        program.post_ad_url = Some("https://post".into());
        program.badge = Some("New".into());
        config.site_about = Some("About us".into());
        config.add_ad();

        let exported = config.to_pretty_json().unwrap();
        assert_eq!(parse_import(&exported).unwrap(), config);
    }
}
