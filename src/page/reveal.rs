// reveal.rs - Sections fade in the first time they scroll into view

use crate::config::{ACTIVE_CLASS, REVEAL_THRESHOLD};
use crate::dom;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

#[allow(deprecated)]
pub fn install(document: &Document) -> Result<(), JsValue> {
    let on_intersect = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            // Never removed, a revealed section stays revealed
            if let Err(err) = entry.target().class_list().add_1(ACTIVE_CLASS) {
                console::warn_1(&err);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for element in dom::query_all(document, ".reveal")? {
        observer.observe(&element);
    }
    Ok(())
}
