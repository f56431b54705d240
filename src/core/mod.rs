pub mod api;
pub mod banner;
pub mod diagnostics;
pub mod enhancers;
pub mod form;
pub mod navigation;
pub mod store;
pub mod transport;

pub use crate::domain::model::{Banner, BannerKind, FormFields, SubmissionRecord};
pub use crate::domain::ports::{BannerSurface, FormView, Scheduler, Sleeper, SubmissionTransport};
pub use crate::utils::error::Result;
