//! # Utilities

pub mod runtime;
