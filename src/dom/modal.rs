use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, EventTarget};

use super::PageController;
use super::events::{element_by_id, listen, log_err};
use crate::state::PageState;
use crate::state::modal::ModalState;

impl PageController {
    pub(super) fn wire_modal(&self) {
        let ids = &self.config.ids;
        let Some(modal) = element_by_id(&self.document, &ids.modal) else {
            return;
        };
        let markup = modal.get_attribute("aria-hidden");
        let seeded = ModalState::from_aria_hidden(markup.as_deref());
        self.state.borrow_mut().modal = seeded;
        if seeded.needs_sync(markup.as_deref()) {
            log_err(modal.set_attribute("aria-hidden", seeded.aria_hidden()), "modal: seed aria-hidden");
        }

        for id in &ids.modal_open {
            let Some(trigger) = element_by_id(&self.document, id) else {
                continue;
            };
            let state = Rc::clone(&self.state);
            let dialog = modal.clone();
            listen(&trigger, "click", move |event| {
                event.prevent_default();
                transition(&state, &dialog, ModalState::open);
            });
        }

        if let Some(close) = element_by_id(&self.document, &ids.modal_close) {
            let state = Rc::clone(&self.state);
            let dialog = modal.clone();
            listen(&close, "click", move |_| {
                transition(&state, &dialog, ModalState::close);
            });
        }

        let state = Rc::clone(&self.state);
        let dialog = modal.clone();
        let backdrop: EventTarget = modal.clone().into();
        listen(&modal, "click", move |event| {
            let on_backdrop = event.target().as_ref() == Some(&backdrop);
            transition(&state, &dialog, |m| {
                m.click(on_backdrop);
            });
        });
    }
}

fn transition(state: &Rc<RefCell<PageState>>, dialog: &Element, apply: impl FnOnce(&mut ModalState)) {
    let (before, after) = {
        let mut page = state.borrow_mut();
        let before = page.modal;
        apply(&mut page.modal);
        (before, page.modal)
    };
    if before != after {
        log::debug!("modal: {before:?} -> {after:?}");
    }
    log_err(dialog.set_attribute("aria-hidden", after.aria_hidden()), "modal: aria-hidden");
}
