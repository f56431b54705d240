use crate::core::form::ContactFormHandler;
use crate::domain::model::FormFields;
use crate::domain::ports::{FormView, SubmissionTransport};
use crate::utils::error::Result;
use crate::web::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlFormElement};

/// The contact form: fields looked up by id, submit button inside the form.
#[derive(Debug, Clone)]
pub struct DomFormView {
    document: Document,
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
}

impl DomFormView {
    /// `None` when the page has no form.
    pub fn locate(document: &Document) -> Result<Option<Self>> {
        let Some(form) = document.query_selector("form")? else {
            return Ok(None);
        };
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            return Ok(None);
        };
        let button = form
            .query_selector("button[type=\"submit\"]")?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());

        Ok(Some(Self {
            document: document.clone(),
            form,
            button,
        }))
    }

    fn value_of(&self, id: &str) -> String {
        dom::field_value(self.document.get_element_by_id(id))
    }
}

impl FormView for DomFormView {
    fn read_fields(&self) -> FormFields {
        FormFields::new(
            self.value_of("name"),
            self.value_of("email"),
            self.value_of("phone"),
            self.value_of("servicesNeeded"),
        )
    }

    fn submit_label(&self) -> String {
        self.button
            .as_ref()
            .and_then(|b| b.text_content())
            .unwrap_or_default()
    }

    fn set_submit_state(&self, label: &str, disabled: bool) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(label));
            button.set_disabled(disabled);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// Takes over the form's submit event.
pub fn install<T>(handler: Rc<ContactFormHandler<DomFormView, T>>) -> Result<()>
where
    T: SubmissionTransport + 'static,
{
    let form = handler.view().form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let handler = Rc::clone(&handler);
        wasm_bindgen_futures::spawn_local(async move {
            handler.submit().await;
        });
    })
}
