use crate::core::banner::BannerController;
use crate::core::store::SubmissionStore;
use crate::domain::model::{BannerKind, FormFields, SubmissionRecord};
use crate::utils::validation::validate_form;

/// Console-facing inspection surface, installed on `window` in the browser.
#[derive(Debug, Clone)]
pub struct SiteApi {
    store: SubmissionStore,
    banners: BannerController,
}

impl SiteApi {
    pub fn new(store: SubmissionStore, banners: BannerController) -> Self {
        Self { store, banners }
    }

    pub fn get_form_submissions(&self) -> Vec<SubmissionRecord> {
        self.store.all()
    }

    pub fn show_message(&self, text: &str, kind: &str) {
        self.banners.show(BannerKind::parse_lossy(kind), text);
    }

    /// Same rules as the form; a failure is shown as an error banner.
    pub fn validate_form(&self, fields: &FormFields) -> bool {
        match validate_form(fields) {
            Ok(()) => true,
            Err(field) => {
                self.banners.error(field.to_string());
                false
            }
        }
    }

    pub fn clear_submissions(&self) {
        self.store.clear();
    }
}
