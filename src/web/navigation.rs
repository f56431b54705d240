use crate::config::NavigationConfig;
use crate::core::navigation::{anchor_target, MenuClick, NavigationController};
use crate::utils::error::Result;
use crate::web::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, ScrollBehavior, ScrollToOptions};

fn apply(header: &Element, class: &str, open: bool) {
    let classes = header.class_list();
    let result = if open {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    result.ok();
}

/// Mobile menu toggle plus smooth in-page anchor scrolling.
pub fn install(document: &Document, config: &NavigationConfig) -> Result<()> {
    let controller = Rc::new(RefCell::new(NavigationController::new(config)));

    let header = document.query_selector("header")?;
    let nav = document.query_selector("nav")?;
    let toggle = document.query_selector(".nav-toggle")?;

    if let (Some(header), Some(nav), Some(toggle)) = (header, nav, toggle) {
        let class = config.open_class.clone();

        {
            let (controller, header, class) = (controller.clone(), header.clone(), class.clone());
            dom::listen(&toggle, "click", move |_| {
                let open = controller.borrow_mut().handle_click(MenuClick::Toggle);
                apply(&header, &class, open);
            })?;
        }

        for link in dom::elements(nav.query_selector_all("a")?) {
            let (controller, header, class) = (controller.clone(), header.clone(), class.clone());
            dom::listen(&link, "click", move |_| {
                let open = controller.borrow_mut().handle_click(MenuClick::NavLink);
                apply(&header, &class, open);
            })?;
        }

        let controller = controller.clone();
        dom::listen(document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let click = if header.contains(target.as_ref()) {
                MenuClick::InsideHeader
            } else {
                MenuClick::Outside
            };
            let open = controller.borrow_mut().handle_click(click);
            apply(&header, &class, open);
        })?;
    }

    for anchor in dom::query_all(document, "nav a[href^=\"#\"]")? {
        let controller = controller.clone();
        let document = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(section) = anchor_target(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };
            let top = section.get_bounding_client_rect().top();
            let target = controller.borrow().scroll_target(top, dom::scroll_y());

            let options = ScrollToOptions::new();
            options.set_top(target);
            options.set_behavior(ScrollBehavior::Smooth);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }

    Ok(())
}
