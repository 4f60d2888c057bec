//! # API Service Layer
//!
//! REST client for the game data backend, split by resource:
//!
//! - [`client`]: HTTP client, base URL handling, JSON request helpers
//! - [`weapons`]: weapon list, categories, statistics, comparison
//! - [`armors`]: armor list
//! - [`bosses`]: boss list
//! - [`classes`]: starting class list
//! - [`health`]: backend liveness probe

pub mod armors;
pub mod bosses;
pub mod classes;
pub mod client;
pub mod health;
pub mod weapons;

pub use client::ApiClient;
