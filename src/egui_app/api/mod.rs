//! REST API plumbing: the HTTP client wrapper and its normalized envelope.

pub mod client;
pub mod response;

pub use client::{ApiClient, RequestOptions};
pub use response::{ApiError, ApiResponse, FailureKind, NO_RESPONSE_STATUS};
