//! Shared Error Types
//!
//! Errors that can surface anywhere in the client outside the HTTP layer.
//! Network failures never show up here: they are folded into
//! [`ApiResponse`](crate::egui_app::api::ApiResponse) by the API client.
//!
//! # Error Categories
//!
//! - `ProviderMissing` - A context capability was requested outside its provider
//! - `RuntimeError` - The async runtime backing the UI could not start
//! - `ConfigError` - Configuration could not be resolved
//!
//! # Usage
//!
//! ```rust
//! use sitedesk::shared::error::SharedError;
//!
//! let error = SharedError::provider_missing("AlertProvider");
//! assert!(error.to_string().contains("AlertProvider"));
//! ```
use thiserror::Error;

use crate::shared::config::ConfigError;

/// Errors shared across the client modules
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A context capability was used without its provider installed
    #[error("{provider} is not installed; wrap the view in its provider")]
    ProviderMissing {
        /// Name of the missing provider
        provider: &'static str,
    },

    /// The background runtime could not be created
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Human-readable error message
        message: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl SharedError {
    pub fn provider_missing(provider: &'static str) -> Self {
        Self::ProviderMissing { provider }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::RuntimeError {
            message: message.into(),
        }
    }
}

impl From<ConfigError> for SharedError {
    fn from(err: ConfigError) -> Self {
        Self::ConfigError {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for SharedError {
    fn from(err: std::io::Error) -> Self {
        Self::runtime(err.to_string())
    }
}
