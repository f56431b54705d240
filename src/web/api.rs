use crate::core::api::SiteApi;
use crate::domain::model::FormFields;
use crate::utils::error::Result;
use crate::web::dom;
use js_sys::{Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

fn set(object: &Object, name: &str, value: JsValue) -> Result<()> {
    Reflect::set(object, &JsValue::from_str(name), &value)?;
    Ok(())
}

/// Publishes the debug surface as `window[global]` for console use.
pub fn install(api: SiteApi, global: &str) -> Result<()> {
    let object = Object::new();

    let get = {
        let api = api.clone();
        Closure::wrap(Box::new(move || -> JsValue {
            // plain objects rather than Maps
            let serializer = Serializer::json_compatible();
            api.get_form_submissions()
                .serialize(&serializer)
                .unwrap_or(JsValue::NULL)
        }) as Box<dyn Fn() -> JsValue>)
    };
    set(&object, "getFormSubmissions", get.into_js_value())?;

    let show = {
        let api = api.clone();
        Closure::wrap(Box::new(move |text: JsValue, kind: JsValue| {
            let text = text.as_string().unwrap_or_default();
            let kind = kind.as_string().unwrap_or_default();
            api.show_message(&text, &kind);
        }) as Box<dyn Fn(JsValue, JsValue)>)
    };
    set(&object, "showMessage", show.into_js_value())?;

    let validate = {
        let api = api.clone();
        Closure::wrap(Box::new(move |data: JsValue| -> bool {
            let fields: FormFields = serde_wasm_bindgen::from_value(data).unwrap_or_default();
            api.validate_form(&fields)
        }) as Box<dyn Fn(JsValue) -> bool>)
    };
    set(&object, "validateForm", validate.into_js_value())?;

    let clear = Closure::wrap(Box::new(move || api.clear_submissions()) as Box<dyn Fn()>);
    set(&object, "clearSubmissions", clear.into_js_value())?;

    Reflect::set(&dom::window()?, &JsValue::from_str(global), &object)?;
    tracing::info!(
        "💡 TIP: Type \"{}.getFormSubmissions()\" in console to view all form submissions!",
        global
    );
    Ok(())
}
