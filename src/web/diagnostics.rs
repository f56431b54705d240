use crate::core::diagnostics::LoadReport;
use crate::utils::error::Result;
use crate::web::dom;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

fn report(site_name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dimension = |value: std::result::Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let viewport = (dimension(window.inner_width()), dimension(window.inner_height()));
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    LoadReport::new(site_name, viewport, &user_agent).log();
}

/// Logs the load report once the window has finished loading.
pub fn install(site_name: &str) -> Result<()> {
    let document = dom::document()?;
    let ready = Reflect::get(&document, &JsValue::from_str("readyState"))?
        .as_string()
        .unwrap_or_default();

    if ready == "complete" {
        report(site_name);
        return Ok(());
    }

    let site_name = site_name.to_string();
    let mut pending = true;
    dom::listen(&dom::window()?, "load", move |_| {
        if std::mem::take(&mut pending) {
            report(&site_name);
        }
    })
}
