// terminal.rs - Single line status readout in the dashboard ribbon

use crate::config::{
    LOG_ENTRIES, LOG_FLASH_MS, LOG_FLASH_OPACITY, LOG_RESTING_OPACITY, LOG_ROTATE_MS,
};
use crate::dom;
use rand::Rng;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlElement};

pub const TERMINAL_ID: &str = "terminalLog";

pub fn log_line(text: &str) -> String {
    format!("> {}", text)
}

pub fn random_entry<R: Rng>(rng: &mut R) -> &'static str {
    LOG_ENTRIES[rng.gen_range(0, LOG_ENTRIES.len())]
}

/// Handle to `#terminalLog`, writes are no-ops when the page has none
pub struct TerminalLog {
    element: Option<HtmlElement>,
}

impl TerminalLog {
    pub fn find(document: &Document) -> TerminalLog {
        let element = document
            .get_element_by_id(TERMINAL_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        TerminalLog { element }
    }

    /// Replace the line and flash it, it settles back after LOG_FLASH_MS
    pub fn write(&self, text: &str) -> Result<(), JsValue> {
        let element = match &self.element {
            Some(element) => element,
            None => return Ok(()),
        };

        element.set_inner_html(&log_line(text));
        element.style().set_property("opacity", LOG_FLASH_OPACITY)?;

        let fading = element.clone();
        let settle = Closure::once_into_js(move || {
            if let Err(err) = fading.style().set_property("opacity", LOG_RESTING_OPACITY) {
                console::warn_1(&err);
            }
        });
        dom::window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(settle.unchecked_ref(), LOG_FLASH_MS)?;
        Ok(())
    }
}

/// Write a random entry every LOG_ROTATE_MS for the rest of the page lifetime
pub fn start_rotation(log: Rc<TerminalLog>) -> Result<(), JsValue> {
    let mut rng = rand::thread_rng();
    let rotate = Closure::wrap(Box::new(move || {
        if let Err(err) = log.write(random_entry(&mut rng)) {
            console::warn_1(&err);
        }
    }) as Box<dyn FnMut()>);
    dom::window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        rotate.as_ref().unchecked_ref(),
        LOG_ROTATE_MS,
    )?;
    rotate.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn lines_get_a_prompt() {
        assert_eq!(log_line("HEARTBEAT_STABLE: 60BPM"), "> HEARTBEAT_STABLE: 60BPM");
    }

    #[test]
    fn random_entries_come_from_the_list() {
        let mut rng = StdRng::seed_from_u64(4);
        let seen: HashSet<&str> = (0..500).map(|_| random_entry(&mut rng)).collect();
        assert!(seen.iter().all(|entry| LOG_ENTRIES.contains(entry)));
        assert_eq!(seen.len(), LOG_ENTRIES.len());
    }
}
