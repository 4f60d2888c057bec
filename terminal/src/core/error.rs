//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! This module provides a centralized error type [`AppError`] for failures
//! raised on the client side. Backend API failures deliberately stay out of
//! this enum: they are normalized into display strings at the HTTP client
//! and cross the event channel as `Result<T, String>`.
//!
//! ## Error Categories
//!
//! - **Config**: Startup configuration errors (missing or malformed env vars)
//! - **Validation**: Input rejected before any request is made

use thiserror::Error;

/// Application-wide error type for client-side failures.
///
/// Each variant includes a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides automatic `Display` and
/// `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Startup configuration error.
    ///
    /// Used when required environment variables are missing or malformed.
    /// Configuration errors are fatal: the terminal refuses to start rather
    /// than run against a guessed backend address.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation error.
    ///
    /// Used when a request is rejected before it is sent, such as a weapon
    /// comparison with no weapons selected.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_prefix() {
        assert_eq!(
            AppError::Config("ELDEN_API_URL is not set".to_string()).to_string(),
            "Configuration error: ELDEN_API_URL is not set"
        );
        assert_eq!(
            AppError::Validation("No weapons selected for comparison".to_string()).to_string(),
            "Validation error: No weapons selected for comparison"
        );
    }
}
