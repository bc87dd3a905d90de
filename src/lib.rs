//! # page-controller
//!
//! WASM controller for the landing page: smooth-scroll navigation, active
//! nav highlighting on scroll, the AI modal toggle, the contact form POST and
//! the persisted theme switcher.
//!
//! `state` holds the behavior logic and compiles natively for tests. `dom`,
//! `net` and `util` talk to the browser and are only live with the `browser`
//! feature; the WASM start hook mounts a [`dom::PageController`] once the
//! document is parsed.

pub mod config;
#[cfg(feature = "browser")]
pub mod dom;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_ok() {
        log::debug!("console logging at {level}");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; page controller not mounted");
        return;
    };
    if document.ready_state() == web_sys::DocumentReadyState::Loading {
        let doc = document.clone();
        dom::on_ready(&document, move || mount(&doc));
    } else {
        mount(&document);
    }
}

#[cfg(feature = "browser")]
fn mount(document: &web_sys::Document) {
    let config = dom::load_config(document);
    if dom::PageController::mount(config).is_none() {
        log::warn!("page controller not mounted");
    }
}
