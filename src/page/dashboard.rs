// dashboard.rs - Ribbon items switch the visible category panel

use super::terminal::TerminalLog;
use crate::config::ACTIVE_CLASS;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{console, Document, Element};

pub fn panel_id(category: &str) -> String {
    format!("category-{}", category)
}

pub fn module_init_line(category: &str) -> String {
    format!("MODULE_INIT: {}", category.to_uppercase())
}

pub fn install(document: &Document, log: Rc<TerminalLog>) -> Result<(), JsValue> {
    let items = Rc::new(dom::query_all(document, ".ribbon-item")?);
    let panels = Rc::new(dom::query_all(document, ".category-panel")?);

    for item in items.iter() {
        let clicked = item.clone();
        let items = items.clone();
        let panels = panels.clone();
        let log = log.clone();
        dom::listen(item, "click", move |_| {
            if let Err(err) = select(&clicked, &items, &panels, &log) {
                console::warn_1(&err);
            }
        })?;
    }
    Ok(())
}

fn select(
    clicked: &Element,
    items: &[Element],
    panels: &[Element],
    log: &TerminalLog,
) -> Result<(), JsValue> {
    let category = clicked.get_attribute("data-category").unwrap_or_default();

    for item in items {
        item.class_list().remove_1(ACTIVE_CLASS)?;
    }
    clicked.class_list().add_1(ACTIVE_CLASS)?;

    let wanted = panel_id(&category);
    for panel in panels {
        panel.class_list().remove_1(ACTIVE_CLASS)?;
        if panel.id() == wanted {
            panel.class_list().add_1(ACTIVE_CLASS)?;
        }
    }

    log.write(&module_init_line(&category))
}
