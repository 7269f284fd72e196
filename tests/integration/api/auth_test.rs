//! Authentication facade integration tests
//!
//! Each operation against the mocked `/auth` endpoints: method, path, headers,
//! body and the decoded payload.

use pretty_assertions::assert_eq;
use serde_json::json;
use sitedesk::shared::{LoginRequest, RegisterRequest, ResetLinkRequest, ResetPasswordRequest};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{MockBackend, TestUser};

#[tokio::test]
async fn test_login_posts_credentials() {
    let backend = MockBackend::start().await;
    let user = TestUser::new("Ana", "ana@example.com");

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({ "email": user.email, "password": user.password })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user.login_body()))
        .expect(1)
        .mount(&backend.server)
        .await;

    let response = backend
        .api()
        .login(&LoginRequest {
            email: user.email.clone(),
            password: user.password.clone(),
        })
        .await;

    assert_eq!(response.status, 200);
    let data = response.data.unwrap();
    assert_eq!(data.token, user.token);
    assert_eq!(data.expires_in, 3600);
    assert_eq!(data.user.unwrap().name, "Ana");
}

#[tokio::test]
async fn test_register_sends_confirmation() {
    let backend = MockBackend::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "name": "Ana Silva",
            "email": "ana@example.com",
            "password": "secret1",
            "password_confirmation": "secret1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": "tok_new",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(1)
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

    assert_eq!(response.status, 201);
    assert!(response.is_success());
    assert_eq!(response.data.unwrap().token, "tok_new");
}

#[tokio::test]
async fn test_get_user_sends_bearer() {
    let backend = MockBackend::start().await;
    let user = TestUser::new("Ana", "ana@example.com");

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .and(header("authorization", format!("Bearer {}", user.token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(user.user_body()))
        .expect(1)
        .mount(&backend.server)
        .await;

    let response = backend.api().get_user(&user.token, None).await;

    let data = response.data.unwrap();
    assert_eq!(data.id, user.id);
    assert_eq!(data.email, "ana@example.com");
}

#[tokio::test]
async fn test_get_user_by_uuid_uses_query() {
    let backend = MockBackend::start().await;
    let viewer = TestUser::new("Ana", "ana@example.com");
    let other = TestUser::new("Bo", "bo@example.com");

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .and(query_param("uuid", other.id.to_string().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(other.user_body()))
        .expect(1)
        .mount(&backend.server)
        .await;

    let response = backend.api().get_user(&viewer.token, Some(other.id)).await;
    assert_eq!(response.data.unwrap().name, "Bo");
}

#[tokio::test]
async fn test_get_users_decodes_list() {
    let backend = MockBackend::start().await;
    let ana = TestUser::new("Ana", "ana@example.com");
    let bo = TestUser::new("Bo", "bo@example.com");

    Mock::given(method("GET"))
        .and(path("/api/auth/users"))
        .and(header("authorization", format!("Bearer {}", ana.token).as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([ana.user_body(), bo.user_body()])),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let response = backend.api().get_users(&ana.token).await;
    let names: Vec<_> = response.data.unwrap().into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["Ana", "Bo"]);
}

#[tokio::test]
async fn test_logout_accepts_any_body() {
    let backend = MockBackend::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged out" })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let response = backend.api().logout("tok").await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_password_reset_endpoints() {
    let backend = MockBackend::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/password/reset-link"))
        .and(body_json(json!({ "email": "ana@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "We have emailed your password reset link."
        })))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/password/reset"))
        .and(body_json(json!({
            "email": "ana@example.com",
            "token": "reset-tok",
            "password": "newpass1",
            "password_confirmation": "newpass1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Your password has been reset."
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let api = backend.api();
    let link = api
        .request_password_reset(&ResetLinkRequest {
            email: "ana@example.com".to_string(),
        })
        .await;
    assert_eq!(link.data.unwrap().status, "success");

    let reset = api
        .reset_password(&ResetPasswordRequest {
            email: "ana@example.com".to_string(),
            token: "reset-tok".to_string(),
            password: "newpass1".to_string(),
            password_confirmation: "newpass1".to_string(),
        })
        .await;
    assert_eq!(reset.data.unwrap().message, "Your password has been reset.");
}
