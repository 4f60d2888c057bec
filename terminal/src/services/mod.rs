//! # Services
//!
//! Backend communication services.

pub mod api;
