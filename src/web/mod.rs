// Browser entry point and the DOM adapters behind the core ports.

pub mod api;
pub mod banner;
pub mod diagnostics;
pub mod dom;
pub mod enhancers;
pub mod form;
pub mod navigation;
pub mod timers;

use crate::config::SiteConfig;
use crate::core::api::SiteApi;
use crate::core::banner::BannerController;
use crate::core::form::ContactFormHandler;
use crate::core::store::SubmissionStore;
use crate::core::transport::SimulatedTransport;
use crate::domain::ports::{BannerSurface, Scheduler};
use crate::utils::logger;
use anyhow::Context;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

const CONFIG_ELEMENT_ID: &str = "sundaw-config";

/// Page config from an inline `<script type="application/toml" id="sundaw-config">`.
fn load_config() -> SiteConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match inline {
        Some(content) => SiteConfig::from_toml_str(&content).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("ignoring {}: {}", CONFIG_ELEMENT_ID, e).into());
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    }
}

fn step(name: &str, result: crate::Result<()>) {
    if let Err(e) = result {
        tracing::warn!(step = name, "page enhancement skipped: {}", e);
    }
}

fn run(config: SiteConfig) -> anyhow::Result<()> {
    let document = dom::document().context("page has no document")?;

    let scheduler: Rc<dyn Scheduler> = Rc::new(timers::BrowserScheduler);
    let surface: Rc<dyn BannerSurface> = Rc::new(banner::DomBannerSurface::new(document.clone()));
    let banners = BannerController::new(
        surface,
        Rc::clone(&scheduler),
        config.banner_display(),
        config.banner_fade(),
    );
    let store = SubmissionStore::new();

    step("navigation", navigation::install(&document, &config.navigation));

    match form::DomFormView::locate(&document).context("looking up contact form")? {
        Some(view) => {
            let transport =
                SimulatedTransport::new(Rc::new(timers::BrowserSleeper), config.submit_delay());
            let handler = ContactFormHandler::new(
                view,
                transport,
                store.clone(),
                banners.clone(),
                config.form.clone(),
            );
            step("contact form", form::install(Rc::new(handler)));
        }
        None => tracing::debug!("no contact form on this page"),
    }

    step("scroll spy", enhancers::scroll_spy(&document, &config));
    step("gallery", enhancers::gallery(&document));
    step("reviews", enhancers::reviews(&document, config.enhancers.rating));
    step("cta buttons", enhancers::cta_buttons(&document));
    step("services", enhancers::services(&document, &config, Rc::clone(&scheduler)));
    step("contact links", enhancers::contact_links(&document));
    step("scroll to top", enhancers::scroll_to_top(&document, &config));
    step("diagnostics", diagnostics::install(&config.site.name));

    api::install(SiteApi::new(store, banners), &config.site.api_global)
        .context("installing debug api")?;

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = load_config();
    logger::init_logger(&config.logging);

    run(config).map_err(|e| {
        tracing::error!("site script failed to start: {:#}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}
