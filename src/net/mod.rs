//! Networking: the contact form's single REST call.

pub mod api;
