use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Page behaviour knobs. Every section is optional; defaults match the live site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub navigation: NavigationConfig,
    pub scroll_spy: ScrollSpyConfig,
    pub form: FormConfig,
    pub banner: BannerConfig,
    pub enhancers: EnhancerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    /// Name of the debug object installed on `window`.
    pub api_global: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Sundaw Lawn Care LLC".to_string(),
            api_global: "sundawAPI".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub header_offset: f64,
    pub open_class: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_offset: 60.0,
            open_class: "nav-open".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    pub lookahead: f64,
    pub highlight: String,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            lookahead: 100.0,
            highlight: "rgba(255,255,255,0.2)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub submit_delay_ms: u64,
    pub pending_label: String,
    pub success_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            pending_label: "Sending...".to_string(),
            success_message:
                "Thank you! Your service request has been received. We'll contact you soon!"
                    .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub display_ms: u64,
    pub fade_ms: u64,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            display_ms: 6000,
            fade_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub rating: u8,
    pub prefill_delay_ms: u64,
    pub scroll_top_threshold: f64,
    pub signup_section: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            rating: 5,
            prefill_delay_ms: 800,
            scroll_top_threshold: 300.0,
            signup_section: "signup".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.form.submit_delay_ms)
    }

    pub fn banner_display(&self) -> Duration {
        Duration::from_millis(self.banner.display_ms)
    }

    pub fn banner_fade(&self) -> Duration {
        Duration::from_millis(self.banner.fade_ms)
    }

    pub fn prefill_delay(&self) -> Duration {
        Duration::from_millis(self.enhancers.prefill_delay_ms)
    }

    fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.api_global", &self.site.api_global)?;
        validate_non_empty_string("navigation.open_class", &self.navigation.open_class)?;
        validate_non_empty_string("form.pending_label", &self.form.pending_label)?;
        validate_non_empty_string("form.success_message", &self.form.success_message)?;
        validate_positive_number("banner.display_ms", self.banner.display_ms, 1)?;
        validate_range("enhancers.rating", self.enhancers.rating, 1, 10)?;

        for (field, value) in [
            ("navigation.header_offset", self.navigation.header_offset),
            ("scroll_spy.lookahead", self.scroll_spy.lookahead),
            ("enhancers.scroll_top_threshold", self.enhancers.scroll_top_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SiteError::ConfigValidationError {
                    field: field.to_string(),
                    message: format!("expected a non-negative offset, got {}", value),
                });
            }
        }

        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.navigation.header_offset, 60.0);
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.prefill_delay(), Duration::from_millis(800));
        assert_eq!(config.banner_display(), Duration::from_secs(6));
        assert_eq!(config.banner_fade(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let toml_content = r#"
[form]
pending_label = "Sending request..."

[enhancers]
rating = 4
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.form.pending_label, "Sending request...");
        assert_eq!(config.form.submit_delay_ms, 1500);
        assert_eq!(config.enhancers.rating, 4);
        assert_eq!(config.enhancers.signup_section, "signup");
        assert_eq!(config.site.api_global, "sundawAPI");
    }

    #[test]
    fn test_config_validation() {
        assert!(SiteConfig::from_toml_str("[enhancers]\nrating = 0").is_err());
        assert!(SiteConfig::from_toml_str("[banner]\ndisplay_ms = 0").is_err());
        assert!(SiteConfig::from_toml_str("[navigation]\nheader_offset = -1.0").is_err());
        assert!(SiteConfig::from_toml_str("[form]\npending_label = \"  \"").is_err());
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let err = SiteConfig::from_toml_str("[form\nsubmit_delay_ms = ").unwrap_err();
        assert!(matches!(err, SiteError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\nname = \"Sundaw Test\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.name, "Sundaw Test");
    }
}
