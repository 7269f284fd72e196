//! Authentication test helpers
//!
//! JSON fixtures shaped like the backend's `/auth` responses.

use serde_json::{json, Value};
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            token: format!("tok_{}", Uuid::new_v4().simple()),
        }
    }

    /// Body of a successful login
    pub fn login_body(&self) -> Value {
        json!({
            "token": self.token,
            "expires_in": 3600,
            "token_type": "Bearer",
            "user": { "name": self.name, "email": self.email }
        })
    }

    /// `UserData` as the API serializes it
    pub fn user_body(&self) -> Value {
        json!({
            "uuid": self.id,
            "name": self.name,
            "email": self.email,
            "created_at": "2024-03-01T09:30:00Z",
            "updated_at": "2024-03-02T10:00:00Z"
        })
    }
}

/// Laravel-style validation error body
pub fn validation_error(field: &str, message: &str) -> Value {
    json!({
        "message": "The given data was invalid.",
        "errors": { field: [message] }
    })
}
