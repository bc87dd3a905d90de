//! Browser wiring for the page controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`PageController`] is built once at start. It owns the [`PageState`] and
//! the [`PageConfig`] behind `Rc`s; each behavior module adds a `wire_*`
//! method that attaches its listeners and hands them clones of those `Rc`s.
//!
//! Borrows of the state are never held across an `.await` or a blocking
//! `alert`, so handlers cannot observe a held `RefCell`.

mod contact;
mod events;
mod modal;
mod nav;
mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::state::PageState;

pub struct PageController {
    document: Document,
    config: Rc<PageConfig>,
    state: Rc<RefCell<PageState>>,
}

impl PageController {
    /// Wire every behavior into the current document.
    ///
    /// Returns `None` when there is no document to attach to.
    pub fn mount(config: PageConfig) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let controller = Self {
            document,
            config: Rc::new(config),
            state: Rc::new(RefCell::new(PageState::default())),
        };
        controller.wire_theme();
        controller.wire_fragment_links();
        controller.wire_scroll_tracker();
        controller.wire_modal();
        controller.wire_contact_form();
        log::info!("page controller mounted");
        Some(controller)
    }
}

/// Run `f` once on `DOMContentLoaded`.
pub fn on_ready<F>(document: &Document, f: F)
where
    F: FnOnce() + 'static,
{
    let mut pending = Some(f);
    events::listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}

/// Defaults, overridden by a `#page-config` JSON block when present.
#[must_use]
pub fn load_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using defaults");
            PageConfig::default()
        }
    }
}
