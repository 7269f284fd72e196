//! Normalized response envelope
//!
//! Every API call resolves to an [`ApiResponse`], whether the server answered
//! with a 2xx, answered with an error status, or never answered at all.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Status reported when no response was received
pub const NO_RESPONSE_STATUS: u16 = 500;

/// Why a call did not produce data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response was received (connect error, timeout, DNS)
    Transport,
    /// The server answered with a non-2xx status
    Status,
    /// A 2xx body did not match the expected shape
    Decode,
}

/// Failure details attached to a normalized response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    /// Per-field messages reported by the server, keyed by field name
    pub field_errors: Option<BTreeMap<String, Vec<String>>>,
    pub kind: FailureKind,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: None,
            kind: FailureKind::Transport,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: None,
            kind: FailureKind::Decode,
        }
    }

    /// First message reported for `field`, if any
    pub fn first_field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }
}

/// Uniform result of every API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub status: u16,
    pub message: String,
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, status: u16, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            status,
            message: message.into(),
            error: None,
        }
    }

    pub fn failure(status: u16, message: impl Into<String>, error: ApiError) -> Self {
        Self {
            data: None,
            status,
            message: message.into(),
            error: Some(error),
        }
    }

    /// Envelope for a call that never got a response
    pub fn transport_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::failure(NO_RESPONSE_STATUS, message.clone(), ApiError::transport(message))
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some() && self.error.is_none()
    }

    pub fn is_transport_error(&self) -> bool {
        self.error
            .as_ref()
            .is_some_and(|e| e.kind == FailureKind::Transport)
    }

    /// Message from the error body, when the server sent one
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .map(|e| e.message.as_str())
            .filter(|m| !m.trim().is_empty())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: self.data.map(f),
            status: self.status,
            message: self.message,
            error: self.error,
        }
    }
}

/// Error body the backend sends with non-2xx statuses
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}
