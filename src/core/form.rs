use crate::config::FormConfig;
use crate::core::banner::BannerController;
use crate::core::store::SubmissionStore;
use crate::domain::model::SubmissionRecord;
use crate::domain::ports::{FormView, SubmissionTransport};
use crate::utils::error::{FieldError, SiteError};
use crate::utils::validation::validate_form;
use std::cell::Cell;

#[derive(Debug)]
pub enum SubmitOutcome {
    Stored(SubmissionRecord),
    Rejected(FieldError),
    Failed(SiteError),
    /// A previous submit has not settled yet.
    InFlight,
}

/// Drives the contact form from submit to banner.
pub struct ContactFormHandler<V: FormView, T: SubmissionTransport> {
    view: V,
    transport: T,
    store: SubmissionStore,
    banners: BannerController,
    config: FormConfig,
    in_flight: Cell<bool>,
}

impl<V: FormView, T: SubmissionTransport> ContactFormHandler<V, T> {
    pub fn new(
        view: V,
        transport: T,
        store: SubmissionStore,
        banners: BannerController,
        config: FormConfig,
    ) -> Self {
        Self {
            view,
            transport,
            store,
            banners,
            config,
            in_flight: Cell::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.in_flight.get() {
            tracing::debug!("submit ignored while a request is pending");
            return SubmitOutcome::InFlight;
        }

        let record = SubmissionRecord::captured_now(self.view.read_fields());

        if let Err(field) = validate_form(&record.fields) {
            tracing::debug!(field = field.field(), "service request rejected");
            self.banners.error(field.to_string());
            return SubmitOutcome::Rejected(field);
        }

        let original_label = self.view.submit_label();
        self.view.set_submit_state(&self.config.pending_label, true);
        self.in_flight.set(true);

        let delivered = self.transport.deliver(&record).await;

        self.in_flight.set(false);
        self.view.set_submit_state(&original_label, false);

        match delivered {
            Ok(()) => {
                self.store.append(record.clone());
                self.banners.success(self.config.success_message.clone());
                self.view.reset();
                log_submission(&record);
                SubmitOutcome::Stored(record)
            }
            Err(e) => {
                tracing::warn!("service request delivery failed: {}", e);
                self.banners.error(e.user_friendly_message());
                SubmitOutcome::Failed(e)
            }
        }
    }
}

fn log_submission(record: &SubmissionRecord) {
    tracing::info!(
        name = %record.fields.name,
        email = %record.fields.email,
        phone = %record.fields.phone,
        services_needed = %record.fields.services_needed,
        timestamp = %record.timestamp.to_rfc3339(),
        "=== SERVICE REQUEST SUBMITTED ==="
    );
}
