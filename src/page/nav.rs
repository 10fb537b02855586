// nav.rs - Nav bar tightens up once the page is scrolled

use crate::config::{
    NAV_COMPACT_BACKGROUND, NAV_COMPACT_PADDING, NAV_RELAXED_BACKGROUND, NAV_RELAXED_PADDING,
    NAV_SCROLL_THRESHOLD,
};
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, HtmlElement, Window};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavStyle {
    pub padding: &'static str,
    pub background: &'static str,
}

impl NavStyle {
    pub const COMPACT: NavStyle = NavStyle {
        padding: NAV_COMPACT_PADDING,
        background: NAV_COMPACT_BACKGROUND,
    };
    pub const RELAXED: NavStyle = NavStyle {
        padding: NAV_RELAXED_PADDING,
        background: NAV_RELAXED_BACKGROUND,
    };

    pub fn for_scroll(scroll_y: f64) -> NavStyle {
        if scroll_y > NAV_SCROLL_THRESHOLD {
            NavStyle::COMPACT
        } else {
            NavStyle::RELAXED
        }
    }

    pub fn apply(&self, nav: &HtmlElement) -> Result<(), JsValue> {
        let style = nav.style();
        style.set_property("padding", self.padding)?;
        style.set_property("background", self.background)
    }
}

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let scrolled = window.clone();
    let document = document.clone();
    dom::listen(window, "scroll", move |_| {
        if let Err(err) = restyle(&scrolled, &document) {
            console::warn_1(&err);
        }
    })
}

fn restyle(window: &Window, document: &Document) -> Result<(), JsValue> {
    let nav = match document.query_selector("nav")? {
        Some(nav) => nav.dyn_into::<HtmlElement>()?,
        None => return Ok(()),
    };
    NavStyle::for_scroll(window.scroll_y()?).apply(&nav)
}
