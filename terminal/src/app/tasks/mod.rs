//! # Async Tasks
//!
//! Background fetch tasks. Each task briefly locks state to snapshot the
//! request parameters and bump the fetch sequence, then spawns onto the
//! shared Tokio runtime and reports back over the event channel.

pub(crate) mod dashboard;
pub(crate) mod explorer;
