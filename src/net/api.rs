//! HTTP calls to the site backend.
//!
//! Browser: real requests via `gloo-net`.
//! Native: stubs that fail with a transport error, since the endpoint is only
//! reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`ContactError`]; the caller turns it into a
//! user-facing alert. Exactly one attempt is made per call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::contact::{ContactError, ContactSubmission};

#[cfg(any(test, feature = "browser"))]
fn check_status(ok: bool, status: u16) -> Result<(), ContactError> {
    if ok {
        Ok(())
    } else {
        Err(ContactError::Rejected { status })
    }
}

/// POST the submission as JSON to `endpoint`.
///
/// # Errors
///
/// [`ContactError::Encode`] if the body cannot be built,
/// [`ContactError::Transport`] if the request never completes, and
/// [`ContactError::Rejected`] for any non-2xx response.
#[cfg(feature = "browser")]
pub async fn submit_contact(endpoint: &str, submission: &ContactSubmission) -> Result<(), ContactError> {
    let request = gloo_net::http::Request::post(endpoint)
        .json(submission)
        .map_err(|e| ContactError::Encode(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ContactError::Transport(e.to_string()))?;
    check_status(resp.ok(), resp.status())
}

/// Native stand-in; there is no backend to reach.
///
/// # Errors
///
/// Always [`ContactError::Transport`].
#[cfg(not(feature = "browser"))]
pub async fn submit_contact(endpoint: &str, submission: &ContactSubmission) -> Result<(), ContactError> {
    log::debug!("contact: {} field(s) for {endpoint} dropped outside the browser", submission.len());
    Err(ContactError::Transport("not available outside the browser".to_owned()))
}
