//! # Core Types and Traits
//!
//! Shared infrastructure for the terminal: error types, configuration,
//! and the service trait used for dependency injection.

pub mod config;
pub mod error;
pub mod service;

pub use config::Config;
pub use error::{AppError, Result};
