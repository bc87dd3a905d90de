use std::rc::Rc;

use web_sys::HtmlElement;

use super::PageController;
use super::events::{after, html_element_by_id, listen, log_err};
use crate::util::theme_storage;

const SPIN_TRANSFORM: &str = "rotate(360deg)";

impl PageController {
    pub(super) fn wire_theme(&self) {
        self.state.borrow_mut().theme = theme_storage::restore(&self.config.theme_storage_key);

        let Some(toggle) = html_element_by_id(&self.document, &self.config.ids.theme_toggle) else {
            return;
        };
        let state = Rc::clone(&self.state);
        let config = Rc::clone(&self.config);
        let button = toggle.clone();
        listen(&toggle, "click", move |_| {
            let theme = theme_storage::cycle(&mut state.borrow_mut().theme, &config.theme_storage_key);
            log::debug!("theme: switched to {theme}");
            spin(&button, config.toggle_spin_ms);
        });
    }
}

fn spin(toggle: &HtmlElement, reset_ms: u32) {
    log_err(toggle.style().set_property("transform", SPIN_TRANSFORM), "theme toggle spin");
    let toggle = toggle.clone();
    after(reset_ms, move || {
        log_err(toggle.style().remove_property("transform"), "theme toggle reset");
    });
}
