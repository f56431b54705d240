use crate::domain::model::{Banner, BannerId, FormFields, SubmissionRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

// Everything runs on the browser's UI thread, so none of these are Send.

/// Delivers a validated record somewhere. The page ships a simulated one.
#[async_trait(?Send)]
pub trait SubmissionTransport {
    async fn deliver(&self, record: &SubmissionRecord) -> Result<()>;
}

#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Fire-and-forget deferral, the `setTimeout` shape.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// The contact form as seen by the submit flow.
pub trait FormView {
    fn read_fields(&self) -> FormFields;
    fn submit_label(&self) -> String;
    fn set_submit_state(&self, label: &str, disabled: bool);
    fn reset(&self);
}

/// Where banners are drawn.
pub trait BannerSurface {
    /// Replace whatever banner is showing with `banner`.
    fn mount(&self, banner: &Banner);
    fn fade(&self, id: BannerId, duration: Duration);
    /// Removes the banner only if it is still attached.
    fn remove(&self, id: BannerId);
}
