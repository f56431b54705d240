use crate::domain::model::FormFields;
use crate::utils::error::{FieldError, Result, SiteError};
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_LEN: usize = 10;
pub const MIN_SERVICES_LEN: usize = 10;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Page whitespace: Unicode `White_Space` minus U+0085, plus the BOM (U+FEFF).
fn is_page_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{85}' && c.is_whitespace())
}

/// Length in UTF-16 code units after trimming, the way the browser measures it.
fn trimmed_len(value: &str) -> usize {
    value.trim_matches(is_page_whitespace).encode_utf16().count()
}

/// Checks the contact form rules in order and reports the first one broken.
///
/// Phone only has a length floor; digits are not counted.
pub fn validate_form(fields: &FormFields) -> std::result::Result<(), FieldError> {
    if trimmed_len(&fields.name) < MIN_NAME_LEN {
        return Err(FieldError::Name);
    }

    if !email_pattern().is_match(&fields.email) {
        return Err(FieldError::Email);
    }

    if trimmed_len(&fields.phone) < MIN_PHONE_LEN {
        return Err(FieldError::Phone);
    }

    if trimmed_len(&fields.services_needed) < MIN_SERVICES_LEN {
        return Err(FieldError::ServicesNeeded);
    }

    Ok(())
}

impl Validate for FormFields {
    fn validate(&self) -> Result<()> {
        validate_form(self).map_err(SiteError::from)
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
