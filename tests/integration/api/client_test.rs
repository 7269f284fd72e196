//! HTTP client normalization tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use sitedesk::egui_app::api::{ApiResponse, FailureKind, NO_RESPONSE_STATUS};
use sitedesk::shared::{LoginRequest, RegisterRequest, UserData};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{api_for, validation_error, MockBackend, UNREACHABLE_BASE_URL};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "a@b.com".to_string(),
        password: "x".to_string(),
    }
}

#[tokio::test]
async fn test_transport_failure_is_normalized() {
    let response = api_for(UNREACHABLE_BASE_URL).login(&credentials()).await;

    assert!(response.data.is_none());
    assert_eq!(response.status, NO_RESPONSE_STATUS);
    assert!(response.is_transport_error());
    let error = response.error.unwrap();
    assert!(!error.message.is_empty());
    assert_eq!(error.kind, FailureKind::Transport);
}

#[tokio::test]
async fn test_status_code_is_preserved() {
    let backend = MockBackend::start().await;
    for status in [401u16, 404, 429, 503] {
        backend.server.reset().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "message": "nope" })))
            .mount(&backend.server)
            .await;

        let response = backend.api().login(&credentials()).await;

        assert!(response.data.is_none());
        assert_eq!(response.status, status);
        assert_eq!(
            response.message,
            format!("Request failed with status code {}", status)
        );
        assert_eq!(response.error_message(), Some("nope"));
    }
}

#[tokio::test]
async fn test_field_errors_are_kept() {
    let backend = MockBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(validation_error("email", "The email has already been taken.")),
        )
        .mount(&backend.server)
        .await;

    let response = backend
        .api()
        .register(&RegisterRequest {
            name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret1".to_string(),
        })
        .await;

    let error = response.error.unwrap();
    assert_eq!(error.kind, FailureKind::Status);
    assert_eq!(
        error.first_field_error("email"),
        Some("The email has already been taken.")
    );
}

#[tokio::test]
async fn test_unexpected_shape_is_a_decode_failure() {
    let backend = MockBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&backend.server)
        .await;

    let response: ApiResponse<UserData> = backend.api().get_user("tok", None).await;

    assert_matches!(
        response,
        ApiResponse {
            data: None,
            status: 200,
            error: Some(ref e),
            ..
        } if e.kind == FailureKind::Decode
    );
}
