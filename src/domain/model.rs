use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw values read from the contact form. Missing inputs read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub services_needed: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        services_needed: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            services_needed: services_needed.into(),
        }
    }
}

/// One contact-form entry with the time it was captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(flatten)]
    pub fields: FormFields,
    pub timestamp: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn new(fields: FormFields, timestamp: DateTime<Utc>) -> Self {
        Self { fields, timestamp }
    }

    pub fn captured_now(fields: FormFields) -> Self {
        Self::new(fields, Utc::now())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// Anything other than `"success"` renders with the error palette.
    pub fn parse_lossy(kind: &str) -> Self {
        if kind.trim().eq_ignore_ascii_case("success") {
            Self::Success
        } else {
            Self::Error
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Success => Palette {
                background: "#d4edda",
                color: "#155724",
                border: "#c3e6cb",
            },
            Self::Error => Palette {
                background: "#f8d7da",
                color: "#721c24",
                border: "#f5c6cb",
            },
        }
    }
}

impl fmt::Display for BannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub color: &'static str,
    pub border: &'static str,
}

pub type BannerId = u64;

/// A transient status message shown immediately before the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub const ROLE_CLASS: &'static str = "form-message";

    pub fn class_name(&self) -> String {
        format!("{} {}", Self::ROLE_CLASS, self.kind)
    }

    pub fn css_text(&self) -> String {
        let palette = self.kind.palette();
        format!(
            "padding: 12px 14px; margin: 12px 0; border-radius: 6px; font-size: 0.9rem; \
             font-weight: 500; background: {}; color: {}; border: 1px solid {}; \
             animation: slideIn 0.3s ease-out;",
            palette.background, palette.color, palette.border
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_flat_with_camel_case_keys() {
        let fields = FormFields::new("Jo", "jo@x.co", "1234567890", "Lawn mowing weekly");
        let timestamp = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let value = serde_json::to_value(SubmissionRecord::new(fields, timestamp)).unwrap();

        assert_eq!(value["name"], "Jo");
        assert_eq!(value["servicesNeeded"], "Lawn mowing weekly");
        assert!(value["timestamp"].as_str().unwrap().starts_with("2024-05-01T10:00:00"));
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn test_partial_fields_default_to_empty() {
        let fields: FormFields = serde_json::from_str(r#"{"name": "Jo"}"#).unwrap();
        assert_eq!(fields.name, "Jo");
        assert_eq!(fields.email, "");
        assert_eq!(fields.services_needed, "");
    }

    #[test]
    fn test_banner_kind_parse_is_lossy() {
        assert_eq!(BannerKind::parse_lossy("success"), BannerKind::Success);
        assert_eq!(BannerKind::parse_lossy("Success "), BannerKind::Success);
        assert_eq!(BannerKind::parse_lossy("error"), BannerKind::Error);
        assert_eq!(BannerKind::parse_lossy("info"), BannerKind::Error);
    }

    #[test]
    fn test_banner_styling_follows_kind() {
        let banner = Banner {
            id: 1,
            kind: BannerKind::Success,
            text: "ok".to_string(),
        };
        assert_eq!(banner.class_name(), "form-message success");
        assert!(banner.css_text().contains("#d4edda"));
        assert!(banner.css_text().contains("1px solid #c3e6cb"));
    }
}
