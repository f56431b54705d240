use thiserror::Error;

/// A single failed contact-form rule. Display is the banner text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter a valid name (at least 2 characters).")]
    Name,

    #[error("Please enter a valid email address.")]
    Email,

    #[error("Please enter a valid phone number (at least 10 digits).")]
    Phone,

    #[error("Please describe the services you need (at least 10 characters).")]
    ServicesNeeded,
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ServicesNeeded => "servicesNeeded",
        }
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(#[from] FieldError),

    #[error("Submission transport failed: {message}")]
    TransportError { message: String },

    #[error("DOM error: {message}")]
    DomError { message: String },
}

impl SiteError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportError {
            message: message.into(),
        }
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::DomError {
            message: message.into(),
        }
    }

    /// The text a visitor sees when this error ends up in a banner.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError(field) => field.to_string(),
            Self::TransportError { .. } => {
                "Sorry, we couldn't send your request. Please try again.".to_string()
            }
            _ => "Something went wrong. Please refresh the page and try again.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
