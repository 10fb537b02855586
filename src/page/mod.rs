// page/ - Interaction effects for the rest of the landing page
//
// Each effect finds its elements once at startup and attaches listeners
// that live for the page lifetime. Missing elements simply mean no effect.

pub mod anchors;
pub mod dashboard;
pub mod nav;
pub mod reveal;
pub mod terminal;

pub use nav::NavStyle;
pub use terminal::TerminalLog;

use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    reveal::install(document)?;
    anchors::install(document)?;
    nav::install(window, document)?;

    let log = Rc::new(TerminalLog::find(document));
    dashboard::install(document, log.clone())?;
    terminal::start_rotation(log)
}
