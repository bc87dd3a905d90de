//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, document attributes)
//! from state logic; native builds get no-op stand-ins.

pub mod theme_storage;
