//! Contact form submission model.
//!
//! DESIGN
//! ======
//! The submit handler is split into pure steps so the outcome handling is
//! testable without a browser:
//! 1. [`ContactSubmission`] collects form entries (last value per name wins,
//!    first-seen order kept for the JSON body).
//! 2. [`ContactFlow::begin`] guards against a second submit while one request
//!    is pending.
//! 3. [`ContactFlow::settle`] maps the request result to the
//!    [`ContactEffect`]s the browser layer applies.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const REJECTED_ALERT: &str = "Could not send right now. Please email us directly.";
pub const FAILED_ALERT: &str = "Could not send right now. Please try again later.";
pub const PENDING_ALERT: &str = "Your message is still being sent. Please wait a moment.";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("could not encode contact submission: {0}")]
    Encode(String),
    #[error("contact request failed: {0}")]
    Transport(String),
    #[error("contact request rejected with status {status}")]
    Rejected { status: u16 },
}

/// Form field names mapped to their string values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    fields: Vec<(String, String)>,
}

impl ContactSubmission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an earlier value under the same name
    /// in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ContactError> {
        serde_json::to_string(self).map_err(|e| ContactError::Encode(e.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContactSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

impl Serialize for ContactSubmission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// DOM changes requested after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactEffect {
    ResetForm,
    ShowSuccess,
    HideSuccessAfter { ms: u32 },
    Alert(&'static str),
}

/// Submission lifecycle for one contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactFlow {
    in_flight: bool,
}

impl ContactFlow {
    #[must_use]
    pub fn in_flight(self) -> bool {
        self.in_flight
    }

    /// Start a submission.
    ///
    /// # Errors
    ///
    /// While an earlier request is pending the submit is refused; the error
    /// carries the notice to show instead.
    pub fn begin(&mut self) -> Result<(), ContactEffect> {
        if self.in_flight {
            log::warn!("contact form: submit ignored, previous request still pending");
            return Err(ContactEffect::Alert(PENDING_ALERT));
        }
        self.in_flight = true;
        Ok(())
    }

    /// Finish the pending submission and decide what the page should show.
    pub fn settle(&mut self, result: &Result<(), ContactError>, success_hide_ms: u32) -> Vec<ContactEffect> {
        self.in_flight = false;
        match result {
            Ok(()) => vec![
                ContactEffect::ResetForm,
                ContactEffect::ShowSuccess,
                ContactEffect::HideSuccessAfter { ms: success_hide_ms },
            ],
            Err(ContactError::Rejected { status }) => {
                log::warn!("contact form: server rejected submission (status {status})");
                vec![ContactEffect::Alert(REJECTED_ALERT)]
            }
            Err(err) => {
                log::error!("contact form error: {err}");
                vec![ContactEffect::Alert(FAILED_ALERT)]
            }
        }
    }
}
