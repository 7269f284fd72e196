//! Shared Module
//!
//! Platform-agnostic types used by the desktop client: REST wire types for the
//! authentication endpoints, configuration and error types. Nothing in here
//! depends on egui.

/// Authentication request/response bodies
pub mod auth;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use auth::{
    AuthTokenData, LoginRequest, PasswordResetResponse, RegisterRequest, ResetLinkRequest,
    ResetPasswordRequest, UserData, UserSummary,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigFile};
pub use error::SharedError;
