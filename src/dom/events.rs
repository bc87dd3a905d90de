//! Small wrappers over `web-sys` for listener wiring, element lookup and
//! deferred callbacks.

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// Attach `handler` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("listen {event}: {err:?}");
        return;
    }
    // Listeners are never removed; the closure must outlive this frame.
    cb.forget();
}

/// Log a failed DOM call instead of propagating it.
pub(crate) fn log_err<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what}: {err:?}");
    }
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        log::debug!("#{id} not present, skipping");
    }
    found
}

pub(crate) fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    match element_by_id(document, id)?.dyn_into::<HtmlElement>() {
        Ok(el) => Some(el),
        Err(_) => {
            log::debug!("#{id} is not an html element, skipping");
            None
        }
    }
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("query {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    // querySelectorAll only ever yields elements.
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(JsCast::unchecked_into::<Element>)
        .collect()
}

/// Run `f` once after `ms` milliseconds without blocking the event loop.
pub(crate) fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(ms))).await;
        f();
    });
}
