use crate::config::{EnhancerConfig, ScrollSpyConfig};

pub const STAR: &str = "⭐";
pub const DEFAULT_SERVICE_NAME: &str = "this service";

/// A page section as the scroll-spy sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    lookahead: f64,
}

impl ScrollSpy {
    pub fn new(config: &ScrollSpyConfig) -> Self {
        Self {
            lookahead: config.lookahead,
        }
    }

    /// The last section, in document order, whose top minus the lookahead
    /// has been scrolled past.
    pub fn active<'a>(&self, sections: &'a [SectionBounds], scroll_y: f64) -> Option<&'a str> {
        sections
            .iter()
            .filter(|section| scroll_y >= section.top - self.lookahead)
            .last()
            .map(|section| section.id.as_str())
    }

    pub fn is_highlighted(href: &str, active: Option<&str>) -> bool {
        match active {
            Some(id) => href.strip_prefix('#') == Some(id),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollTopButton {
    threshold: f64,
}

impl ScrollTopButton {
    pub fn new(config: &EnhancerConfig) -> Self {
        Self {
            threshold: config.scroll_top_threshold,
        }
    }

    pub fn is_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }
}

/// Service names come from the item's `<strong>` text, untouched.
pub fn service_name(label: Option<&str>) -> String {
    match label {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_SERVICE_NAME.to_string(),
    }
}

/// Text to drop into an empty services field; `None` leaves typed text alone.
pub fn prefill_text(current: &str, service: &str) -> Option<String> {
    if current.is_empty() {
        Some(format!("I'm interested in {}. ", service))
    } else {
        None
    }
}

pub fn star_row(rating: u8) -> String {
    STAR.repeat(usize::from(rating))
}

pub fn gallery_alert(item_text: &str) -> String {
    format!(
        "Viewing: {}\n\n(You can replace this with a lightbox/modal to show full images)",
        item_text
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLinkKind {
    Email,
    Phone,
}

impl ContactLinkKind {
    pub const SELECTOR: &'static str = "a[href^=\"mailto:\"], a[href^=\"tel:\"]";

    /// Classifies the raw `href` attribute by the same prefixes [`Self::SELECTOR`] matches.
    pub fn classify(href: &str) -> Option<Self> {
        if href.starts_with("mailto:") {
            Some(Self::Email)
        } else if href.starts_with("tel:") {
            Some(Self::Phone)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "📧 Email link clicked",
            Self::Phone => "📞 Phone link clicked",
        }
    }
}
