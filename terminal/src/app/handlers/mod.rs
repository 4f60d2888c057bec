//! # User Action Handlers
//!
//! Synchronous state mutations in response to user actions. Handlers only
//! change state; the [`crate::app::App`] wrapper methods decide whether a
//! change warrants a new fetch.

pub(crate) mod explorer;
pub(crate) mod navigation;
