pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::SiteConfig;
pub use domain::model::{BannerKind, FormFields, SubmissionRecord};
pub use crate::core::{
    api::SiteApi,
    banner::BannerController,
    form::{ContactFormHandler, SubmitOutcome},
    store::SubmissionStore,
    transport::SimulatedTransport,
};
pub use utils::error::{FieldError, Result, SiteError};
