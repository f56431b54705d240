use chrono::{DateTime, Utc};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Coarse guess from the user agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        static MOBILE: OnceLock<Regex> = OnceLock::new();
        let pattern = MOBILE.get_or_init(|| Regex::new(r"(?i)Mobile|Android|iPhone").unwrap());
        if pattern.is_match(user_agent) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => f.write_str("Mobile"),
            Self::Desktop => f.write_str("Desktop"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub site_name: String,
    pub loaded_at: DateTime<Utc>,
    pub viewport: (f64, f64),
    pub device: DeviceClass,
}

impl LoadReport {
    pub fn new(site_name: &str, viewport: (f64, f64), user_agent: &str) -> Self {
        Self {
            site_name: site_name.to_string(),
            loaded_at: Utc::now(),
            viewport,
            device: DeviceClass::from_user_agent(user_agent),
        }
    }

    pub fn screen_size(&self) -> String {
        format!("{}x{}", self.viewport.0, self.viewport.1)
    }

    pub fn log(&self) {
        tracing::info!(
            load_time = %self.loaded_at.to_rfc3339(),
            screen = %self.screen_size(),
            device = %self.device,
            "🌿 {} - Website Loaded",
            self.site_name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_from_user_agent() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        let android = "Mozilla/5.0 (Linux; android 14; Pixel 8)";
        let desktop = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

        assert_eq!(DeviceClass::from_user_agent(iphone), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(android), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(desktop), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Desktop);
    }

    #[test]
    fn test_screen_size_formatting() {
        let report = LoadReport::new("Sundaw Lawn Care LLC", (1280.0, 720.0), "");
        assert_eq!(report.screen_size(), "1280x720");
        assert_eq!(report.device, DeviceClass::Desktop);
    }
}
