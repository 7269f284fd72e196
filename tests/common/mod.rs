//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Mock backend helpers
//! - Authentication fixtures
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod mock_server;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use mock_server::*;
