use crate::config::SiteConfig;
use crate::core::enhancers::{
    gallery_alert, prefill_text, service_name, star_row, ContactLinkKind, ScrollSpy,
    ScrollTopButton, SectionBounds,
};
use crate::domain::ports::Scheduler;
use crate::utils::error::Result;
use crate::web::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions,
};

const SCROLL_TOP_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; width: 45px; \
    height: 45px; border-radius: 50%; background: #205b2b; color: white; border: none; \
    font-size: 1.3rem; cursor: pointer; display: none; z-index: 1000; \
    box-shadow: 0 4px 8px rgba(0,0,0,0.2); transition: all 0.3s;";

const STAR_STYLE: &str = "color: #ffa500; font-size: 0.85rem; margin-bottom: 4px;";

type Styles = &'static [(&'static str, &'static str)];

fn hoverable(element: &Element, enter: Styles, leave: Styles) -> Result<()> {
    dom::set_styles(
        element,
        &[("cursor", "pointer"), ("transition", "transform 0.3s, box-shadow 0.3s")],
    );
    let target = element.clone();
    dom::listen(element, "mouseenter", move |_| dom::set_styles(&target, enter))?;
    let target = element.clone();
    dom::listen(element, "mouseleave", move |_| dom::set_styles(&target, leave))
}

/// Tints the nav link of the section currently in view.
pub fn scroll_spy(document: &Document, config: &SiteConfig) -> Result<()> {
    let spy = ScrollSpy::new(&config.scroll_spy);
    let highlight = config.scroll_spy.highlight.clone();
    let sections: Vec<HtmlElement> = dom::query_all(document, "section[id]")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    let links = dom::query_all(document, "nav a[href^=\"#\"]")?;

    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_| {
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|s| SectionBounds::new(s.id(), f64::from(s.offset_top())))
            .collect();
        let active = spy.active(&bounds, dom::scroll_y());

        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let background = if ScrollSpy::is_highlighted(&href, active) {
                highlight.as_str()
            } else {
                ""
            };
            dom::set_styles(link, &[("background", background)]);
        }
    })
}

pub fn gallery(document: &Document) -> Result<()> {
    for item in dom::query_all(document, ".gallery-grid div")? {
        hoverable(
            &item,
            &[("transform", "scale(1.05)"), ("box-shadow", "0 4px 12px rgba(0,0,0,0.15)")],
            &[("transform", "scale(1)"), ("box-shadow", "none")],
        )?;

        let target = item.clone();
        dom::listen(&item, "click", move |_| {
            let text = dom::text_of(&target);
            tracing::info!(item = %text, "Gallery item clicked");
            if let Some(window) = web_sys::window() {
                window.alert_with_message(&gallery_alert(&text)).ok();
            }
        })?;
    }
    Ok(())
}

/// Adds the star row after each review heading.
pub fn reviews(document: &Document, rating: u8) -> Result<()> {
    let stars = star_row(rating);
    for review in dom::query_all(document, ".review")? {
        let Some(heading) = review.query_selector("h3")? else {
            continue;
        };
        let row = document.create_element("div")?;
        row.set_attribute("style", STAR_STYLE)?;
        row.set_text_content(Some(&stars));
        heading.insert_adjacent_element("afterend", &row)?;
    }
    Ok(())
}

pub fn cta_buttons(document: &Document) -> Result<()> {
    for button in dom::query_all(document, ".btn")? {
        let target = button.clone();
        dom::listen(&button, "click", move |_| {
            let text = dom::text_of(&target);
            tracing::info!(button = %text.trim(), "🔘 CTA Button clicked");
        })?;
    }
    Ok(())
}

/// Clicking a service scrolls to the signup form and pre-fills the request.
pub fn services(
    document: &Document,
    config: &SiteConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<()> {
    let delay = config.prefill_delay();
    let signup = config.enhancers.signup_section.clone();

    for item in dom::query_all(document, ".service-item")? {
        hoverable(
            &item,
            &[("transform", "translateY(-4px)"), ("box-shadow", "0 6px 12px rgba(0,0,0,0.12)")],
            &[("transform", "translateY(0)"), ("box-shadow", "0 1px 3px rgba(0,0,0,0.06)")],
        )?;

        let target = item.clone();
        let document = document.clone();
        let scheduler = Rc::clone(&scheduler);
        let signup = signup.clone();
        dom::listen(&item, "click", move |_| {
            let label = target.query_selector("strong").ok().flatten().map(|s| dom::text_of(&s));
            let service = service_name(label.as_deref());
            tracing::info!(service = %service, "🌿 Service clicked");

            let Some(section) = document.get_element_by_id(&signup) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);

            let document = document.clone();
            scheduler.schedule(
                delay,
                Box::new(move || {
                    let Some(field) = document.get_element_by_id("servicesNeeded") else {
                        return;
                    };
                    let current = dom::field_value(Some(field.clone()));
                    if let Some(text) = prefill_text(&current, &service) {
                        dom::set_field_value(&field, &text);
                        if let Some(html) = dom::as_html(&field) {
                            html.focus().ok();
                        }
                    }
                }),
            );
        })?;
    }
    Ok(())
}

pub fn contact_links(document: &Document) -> Result<()> {
    for link in dom::query_all(document, ContactLinkKind::SELECTOR)? {
        let raw = link.get_attribute("href").unwrap_or_default();
        let Some(kind) = ContactLinkKind::classify(&raw) else {
            continue;
        };
        let Ok(anchor) = link.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };
        let target = anchor.clone();
        dom::listen(&anchor, "click", move |_| {
            tracing::info!(href = %target.href(), "{}", kind.label());
        })?;
    }
    Ok(())
}

/// Round fixed button that appears once the page is scrolled down.
pub fn scroll_to_top(document: &Document, config: &SiteConfig) -> Result<()> {
    let visibility = ScrollTopButton::new(&config.enhancers);
    let Some(body) = document.body() else {
        return Ok(());
    };

    let button = document.create_element("button")?;
    button.set_text_content(Some("↑"));
    button.set_attribute("style", SCROLL_TOP_STYLE)?;

    dom::listen(&button, "click", |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_scroll_to_options(&options);
        }
    })?;

    let target = button.clone();
    dom::listen(&button, "mouseenter", move |_| {
        dom::set_styles(&target, &[("background", "#1a4a23"), ("transform", "scale(1.1)")]);
    })?;
    let target = button.clone();
    dom::listen(&button, "mouseleave", move |_| {
        dom::set_styles(&target, &[("background", "#205b2b"), ("transform", "scale(1)")]);
    })?;

    body.append_child(&button)?;

    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_| {
        let display = if visibility.is_visible(dom::scroll_y()) {
            "block"
        } else {
            "none"
        };
        dom::set_styles(&button, &[("display", display)]);
    })
}
