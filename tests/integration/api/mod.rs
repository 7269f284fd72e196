//! API integration tests
//!
//! Integration tests for the HTTP client and the auth facade

mod auth_test;
mod client_test;
