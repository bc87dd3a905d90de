use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, FormData, HtmlFormElement};

use super::PageController;
use super::events::{after, element_by_id, html_element_by_id, listen, log_err};
use crate::config::PageConfig;
use crate::net::api;
use crate::state::contact::{ContactEffect, ContactSubmission};

impl PageController {
    pub(super) fn wire_contact_form(&self) {
        let Some(el) = element_by_id(&self.document, &self.config.ids.contact_form) else {
            return;
        };
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            log::debug!("#{} is not a form, skipping", self.config.ids.contact_form);
            return;
        };

        let document = self.document.clone();
        let config = Rc::clone(&self.config);
        let state = Rc::clone(&self.state);
        let target = form.clone();
        listen(&target, "submit", move |event| {
            event.prevent_default();
            let started = state.borrow_mut().contact.begin();
            if let Err(notice) = started {
                apply_effects(&document, &config, &form, &[notice]);
                return;
            }
            let submission = collect_fields(&form);
            log::debug!("contact: submitting {} field(s)", submission.len());

            let document = document.clone();
            let config = Rc::clone(&config);
            let state = Rc::clone(&state);
            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::submit_contact(&config.contact_endpoint, &submission).await;
                let effects = state.borrow_mut().contact.settle(&result, config.success_hide_ms);
                apply_effects(&document, &config, &form, &effects);
            });
        });
    }
}

/// Named text fields of the form; later duplicates overwrite earlier ones.
fn collect_fields(form: &HtmlFormElement) -> ContactSubmission {
    let mut submission = ContactSubmission::new();
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("contact: reading form failed: {err:?}");
            return submission;
        }
    };
    let entries = match js_sys::try_iter(&data) {
        Ok(Some(entries)) => entries,
        Ok(None) => return submission,
        Err(err) => {
            log::warn!("contact: iterating form failed: {err:?}");
            return submission;
        }
    };
    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        let pair = js_sys::Array::from(&entry);
        let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) else {
            log::debug!("contact: skipping non-text field");
            continue;
        };
        submission.insert(name, value);
    }
    submission
}

fn apply_effects(document: &Document, config: &PageConfig, form: &HtmlFormElement, effects: &[ContactEffect]) {
    for effect in effects {
        match effect {
            ContactEffect::ResetForm => form.reset(),
            ContactEffect::ShowSuccess => {
                if let Some(success) = html_element_by_id(document, &config.ids.contact_success) {
                    success.set_hidden(false);
                }
            }
            ContactEffect::HideSuccessAfter { ms } => {
                if let Some(success) = html_element_by_id(document, &config.ids.contact_success) {
                    after(*ms, move || success.set_hidden(true));
                }
            }
            ContactEffect::Alert(message) => {
                if let Some(window) = web_sys::window() {
                    log_err(window.alert_with_message(message), "contact: alert");
                }
            }
        }
    }
}
