//! Page controller configuration.
//!
//! Every tunable the controller reads (endpoint, storage key, timings, element
//! ids and selectors) lives in [`PageConfig`]. The defaults match the landing
//! page markup; a page may override individual fields with a JSON block
//! `<script type="application/json" id="page-config">`.
//!
//! ERROR HANDLING
//! ==============
//! A malformed or invalid override never stops the page from working: the
//! browser layer logs the [`ConfigError`] and falls back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid page config: {field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Runtime configuration for all page behaviors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Path the contact form is posted to.
    pub contact_endpoint: String,
    /// `localStorage` key holding the selected theme.
    pub theme_storage_key: String,
    /// Distance above a section's top at which it becomes current.
    pub scroll_lookahead: f64,
    pub success_hide_ms: u32,
    pub toggle_spin_ms: u32,
    pub ids: ElementIds,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: "/api/contact".to_owned(),
            theme_storage_key: "theme".to_owned(),
            scroll_lookahead: 200.0,
            success_hide_ms: 5_000,
            toggle_spin_ms: 300,
            ids: ElementIds::default(),
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a parsed value fails [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contact_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "contact_endpoint", reason: "must not be empty" });
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "theme_storage_key", reason: "must not be empty" });
        }
        if !self.scroll_lookahead.is_finite() || self.scroll_lookahead < 0.0 {
            return Err(ConfigError::Invalid {
                field: "scroll_lookahead",
                reason: "must be a finite non-negative number",
            });
        }
        Ok(())
    }
}

/// Ids of the elements the controller wires up. All are optional in the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub modal: String,
    pub modal_open: Vec<String>,
    pub modal_close: String,
    pub contact_form: String,
    pub contact_success: String,
    pub theme_toggle: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            modal: "ai-modal".to_owned(),
            modal_open: vec!["open-ai-link".to_owned(), "open-ai-2".to_owned(), "open-ai".to_owned()],
            modal_close: "close-ai".to_owned(),
            contact_form: "contact-form".to_owned(),
            contact_success: "contact-success".to_owned(),
            theme_toggle: "theme-toggle".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub fragment_links: String,
    pub nav_icons: String,
    pub sections: String,
    pub active_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            fragment_links: "a[href^=\"#\"]".to_owned(),
            nav_icons: ".nav-icon".to_owned(),
            sections: ".content-section, .hero-section".to_owned(),
            active_class: "active".to_owned(),
        }
    }
}
