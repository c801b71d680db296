//! Named editable fields, so the admin editor can bind a form input to a
//! document field without a setter per input.
//!
//! Optional fields are stored as `None` when the edited value is empty.

use super::aggregate::{Ad, Configuration, Program};

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteField {
    SiteName,
    SiteLogo,
    Developer,
    SiteAbout,
    AdvertiseInfo,
    AdminUsername,
    AdminPassword,
}

impl Configuration {
    pub fn site_field(&self, field: SiteField) -> String {
        match field {
            SiteField::SiteName => self.site_name.clone(),
            SiteField::SiteLogo => self.site_logo.clone(),
            SiteField::Developer => self.developer.clone(),
            SiteField::SiteAbout => self.site_about.clone().unwrap_or_default(),
            SiteField::AdvertiseInfo => self.advertise_info.clone().unwrap_or_default(),
            SiteField::AdminUsername => self.admin.username.clone(),
            SiteField::AdminPassword => self.admin.password.clone().unwrap_or_default(),
        }
    }

    pub fn set_site_field(&mut self, field: SiteField, value: String) {
        match field {
            SiteField::SiteName => self.site_name = value,
            SiteField::SiteLogo => self.site_logo = value,
            SiteField::Developer => self.developer = value,
            SiteField::SiteAbout => self.site_about = optional(value),
            SiteField::AdvertiseInfo => self.advertise_info = optional(value),
            SiteField::AdminUsername => self.admin.username = value,
            SiteField::AdminPassword => self.admin.password = optional(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramField {
    Name,
    ShortDescription,
    LongDescription,
    Image,
    DownloadUrl,
    AdUrl,
    PostAdUrl,
    Badge,
}

impl ProgramField {
    pub fn all() -> [ProgramField; 8] {
        [
            ProgramField::Name,
            ProgramField::ShortDescription,
            ProgramField::LongDescription,
            ProgramField::Image,
            ProgramField::DownloadUrl,
            ProgramField::AdUrl,
            ProgramField::PostAdUrl,
            ProgramField::Badge,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgramField::Name => "Name",
            ProgramField::ShortDescription => "Short description",
            ProgramField::LongDescription => "Long description",
            ProgramField::Image => "Image",
            ProgramField::DownloadUrl => "Direct download link",
            ProgramField::AdUrl => "Ad video link (YouTube)",
            ProgramField::PostAdUrl => "Link after the ad (optional)",
            ProgramField::Badge => "Badge (optional)",
        }
    }
}

impl Program {
    pub fn field(&self, field: ProgramField) -> String {
        match field {
            ProgramField::Name => self.name.clone(),
            ProgramField::ShortDescription => self.short_description.clone(),
            ProgramField::LongDescription => self.long_description.clone(),
            ProgramField::Image => self.image.clone(),
            ProgramField::DownloadUrl => self.download_url.clone(),
            ProgramField::AdUrl => self.ad_url.clone(),
            ProgramField::PostAdUrl => self.post_ad_url.clone().unwrap_or_default(),
            ProgramField::Badge => self.badge.clone().unwrap_or_default(),
        }
    }

    pub fn set_field(&mut self, field: ProgramField, value: String) {
        match field {
            ProgramField::Name => self.name = value,
            ProgramField::ShortDescription => self.short_description = value,
            ProgramField::LongDescription => self.long_description = value,
            ProgramField::Image => self.image = value,
            ProgramField::DownloadUrl => self.download_url = value,
            ProgramField::AdUrl => self.ad_url = value,
            ProgramField::PostAdUrl => self.post_ad_url = optional(value),
            ProgramField::Badge => self.badge = optional(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdField {
    Name,
    Description,
    Link,
    Image,
}

impl Ad {
    pub fn field(&self, field: AdField) -> String {
        match field {
            AdField::Name => self.name.clone(),
            AdField::Description => self.description.clone(),
            AdField::Link => self.link.clone(),
            AdField::Image => self.image.clone(),
        }
    }

    pub fn set_field(&mut self, field: AdField, value: String) {
        match field {
            AdField::Name => self.name = value,
            AdField::Description => self.description = value,
            AdField::Link => self.link = value,
            AdField::Image => self.image = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_optional_fields_clear_on_empty() {
        let mut program = Program::new_placeholder();
        program.set_field(ProgramField::PostAdUrl, "https://post".into());
        assert_eq!(program.post_ad_url.as_deref(), Some("https://post"));
        program.set_field(ProgramField::PostAdUrl, String::new());
        assert_eq!(program.post_ad_url, None);
        assert_eq!(program.field(ProgramField::PostAdUrl), "");
    }

    #[test]
    fn test_every_program_field_reads_back() {
        let mut program = Program::new_placeholder();
        for (i, field) in ProgramField::all().into_iter().enumerate() {
            let value = format!("value-{}", i);
            program.set_field(field, value.clone());
            assert_eq!(program.field(field), value, "{:?}", field);
        }
    }

    #[test]
    fn test_site_fields() {
        let mut config: Configuration =
            serde_json::from_str(r#"{"siteName":"S","admin":{"username":"u"}}"#).unwrap();
        config.set_site_field(SiteField::AdminPassword, "secret".into());
        assert!(config.admin.matches("u", "secret"));
        config.set_site_field(SiteField::SiteAbout, "  ".into());
        assert_eq!(config.site_about, None);
        config.set_site_field(SiteField::SiteName, "Renamed".into());
        assert_eq!(config.site_field(SiteField::SiteName), "Renamed");
    }
}
