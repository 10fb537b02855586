// anchors.rs - In-page links scroll smoothly instead of jumping

use crate::dom;
use wasm_bindgen::JsValue;
use web_sys::{console, Document, Element, ScrollBehavior, ScrollIntoViewOptions};

/// Selector for the section an in-page href points at. A bare `#` names
/// nothing and is skipped.
pub fn target_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

pub fn install(document: &Document) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, "a[href^=\"#\"]")? {
        let link = anchor.clone();
        let document = document.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            if let Err(err) = scroll_to_target(&document, &link) {
                console::warn_1(&err);
            }
        })?;
    }
    Ok(())
}

#[allow(deprecated)]
fn scroll_to_target(document: &Document, link: &Element) -> Result<(), JsValue> {
    let href = link.get_attribute("href").unwrap_or_default();
    let selector = match target_selector(&href) {
        Some(selector) => selector,
        None => return Ok(()),
    };

    if let Some(target) = document.query_selector(selector)? {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    Ok(())
}
