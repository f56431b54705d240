use crate::utils::error::{Result, SiteError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList, Window,
};

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SiteError::dom(message)
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::dom("no global window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::dom("window has no document"))
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Sets inline style properties, ignoring ones the browser rejects.
pub fn set_styles(element: &Element, styles: &[(&str, &str)]) {
    if let Some(html) = as_html(element) {
        let style = html.style();
        for (name, value) in styles {
            style.set_property(name, value).ok();
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// Current value of an input-like element; anything else reads as empty.
pub fn field_value(element: Option<Element>) -> String {
    let Some(element) = element else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn set_field_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Registers a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}
