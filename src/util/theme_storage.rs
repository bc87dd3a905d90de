//! Theme persistence and application.
//!
//! Reads the saved theme from `localStorage` and applies it as a `data-theme`
//! attribute on the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage may be disabled (private browsing,
//! sandboxed iframes) and then the page simply starts from the default theme
//! each load. Native builds no-op so state logic stays testable.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::{Theme, ThemeState};

#[cfg(feature = "browser")]
const THEME_ATTRIBUTE: &str = "data-theme";

/// Read the raw saved theme value, if storage is available and holds one.
#[cfg(feature = "browser")]
pub fn read_saved(storage_key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let Ok(Some(storage)) = window.local_storage() else {
        return None;
    };
    match storage.get_item(storage_key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("theme: reading {storage_key:?} failed: {err:?}");
            None
        }
    }
}

#[cfg(not(feature = "browser"))]
pub fn read_saved(_storage_key: &str) -> Option<String> {
    None
}

/// Set `data-theme` on the `<html>` element.
#[cfg(feature = "browser")]
pub fn apply(theme: Theme) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Err(err) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            log::warn!("theme: applying {theme} failed: {err:?}");
        }
    }
}

#[cfg(not(feature = "browser"))]
pub fn apply(_theme: Theme) {}

/// Write the theme back to storage.
#[cfg(feature = "browser")]
pub fn persist(storage_key: &str, theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(err) = storage.set_item(storage_key, theme.as_str()) {
                log::warn!("theme: persisting {theme} failed: {err:?}");
            }
        }
    }
}

#[cfg(not(feature = "browser"))]
pub fn persist(_storage_key: &str, _theme: Theme) {}

/// Restore the saved theme (or the default) and apply it.
pub fn restore(storage_key: &str) -> ThemeState {
    let state = ThemeState::from_saved(read_saved(storage_key).as_deref());
    apply(state.current());
    log::debug!("theme: restored {}", state.current());
    state
}

/// Advance to the next theme, apply and persist it.
pub fn cycle(state: &mut ThemeState, storage_key: &str) -> Theme {
    let next = state.advance();
    apply(next);
    persist(storage_key, next);
    next
}
