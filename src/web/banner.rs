use crate::domain::model::{Banner, BannerId};
use crate::domain::ports::BannerSurface;
use crate::utils::error::Result;
use crate::web::dom;
use std::time::Duration;
use web_sys::{
    Document, Element, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

const ID_ATTR: &str = "data-banner-id";

/// Draws banners as a `div.form-message` directly before the page's form.
#[derive(Debug, Clone)]
pub struct DomBannerSurface {
    document: Document,
}

impl DomBannerSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn find(&self, id: BannerId) -> Option<Element> {
        let selector = format!(".{}[{}=\"{}\"]", Banner::ROLE_CLASS, ID_ATTR, id);
        self.document.query_selector(&selector).ok().flatten()
    }

    fn try_mount(&self, banner: &Banner) -> Result<()> {
        for existing in dom::query_all(&self.document, &format!(".{}", Banner::ROLE_CLASS))? {
            existing.remove();
        }

        let Some(form) = self.document.query_selector("form")? else {
            tracing::debug!("no form on page, banner dropped");
            return Ok(());
        };
        let Some(parent) = form.parent_node() else {
            return Ok(());
        };

        let element = self.document.create_element("div")?;
        element.set_class_name(&banner.class_name());
        element.set_text_content(Some(&banner.text));
        element.set_attribute("style", &banner.css_text())?;
        element.set_attribute(ID_ATTR, &banner.id.to_string())?;
        let anchor: &Node = &form;
        parent.insert_before(&element, Some(anchor))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

impl BannerSurface for DomBannerSurface {
    fn mount(&self, banner: &Banner) {
        if let Err(e) = self.try_mount(banner) {
            tracing::warn!("could not show banner: {}", e);
        }
    }

    fn fade(&self, id: BannerId, duration: Duration) {
        if let Some(element) = self.find(id) {
            let transition = format!("opacity {}s", duration.as_secs_f64());
            dom::set_styles(&element, &[("opacity", "0"), ("transition", &transition)]);
        }
    }

    fn remove(&self, id: BannerId) {
        if let Some(element) = self.find(id) {
            element.remove();
        }
    }
}
