use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use sitedesk::egui_app::forms::{
    ForgotPasswordForm, ResetPasswordForm, SignInForm, SignUpForm, SubmitOutcome,
};
use sitedesk::egui_app::{AlertProvider, AlertVariant, Route};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{api_for, validation_error, MockBackend, UNREACHABLE_BASE_URL};

/// Mount a catch-all that fails the test if any request arrives
async fn forbid_requests(backend: &MockBackend) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&backend.server)
        .await;
}

#[tokio::test]
async fn test_empty_required_fields_never_reach_the_api() {
    let backend = MockBackend::start().await;
    forbid_requests(&backend).await;
    let api = backend.api();
    let alerts = AlertProvider::new().handle();

    let mut sign_in = SignInForm::new();
    sign_in.email.set_value("a@b.com");
    assert_eq!(sign_in.submit(&api, &alerts).await, SubmitOutcome::Rejected);

    let mut sign_up = SignUpForm::new();
    sign_up.email.set_value("a@b.com");
    assert_eq!(sign_up.submit(&api, &alerts).await, SubmitOutcome::Rejected);

    let mut forgot = ForgotPasswordForm::new();
    assert_eq!(forgot.submit(&api, &alerts).await, SubmitOutcome::Rejected);

    let mut reset =
        ResetPasswordForm::from_link(Some("tok".to_string()), Some("a@b.com".to_string()));
    assert_eq!(reset.submit(&api, &alerts).await, SubmitOutcome::Rejected);

    // the expect(0) above is verified when the server drops
}

#[tokio::test]
async fn test_sign_in_success_greets_user() {
    let backend = MockBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": { "name": "Ana" } })),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let alerts = AlertProvider::new().handle();
    let mut form = SignInForm::new();
    form.email.set_value("a@b.com");
    form.password.set_value("x");

    let outcome = form.submit(&backend.api(), &alerts).await;

    let redirect = outcome.redirect().cloned().unwrap();
    assert_eq!(redirect.route, Route::Home);
    assert_eq!(redirect.delay, Duration::from_millis(3000));
    let alert = alerts.current().unwrap();
    assert_eq!(alert.variant, AlertVariant::Success);
    assert!(alert.message.contains("Ana"));
    assert!(form.email.value.is_empty());
    assert!(form.password.value.is_empty());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_sign_in_network_failure() {
    let alerts = AlertProvider::new().handle();
    let mut form = SignInForm::new();
    form.email.set_value("a@b.com");
    form.password.set_value("x");

    let outcome = form.submit(&api_for(UNREACHABLE_BASE_URL), &alerts).await;

    assert_eq!(outcome, SubmitOutcome::Failed { status: 500 });
    crate::assert_alert!(
        alerts,
        AlertVariant::Error,
        "Network error. Please check your internet connection."
    );
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let backend = MockBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(validation_error("email", "The email has already been taken.")),
        )
        .mount(&backend.server)
        .await;

    let alerts = AlertProvider::new().handle();
    let mut form = SignUpForm::new();
    form.first_name.set_value("Ana");
    form.last_name.set_value("Silva");
    form.email.set_value("ana@example.com");
    form.password.set_value("secret1");
    form.terms_accepted = true;

    let outcome = form.submit(&backend.api(), &alerts).await;

    assert_eq!(outcome, SubmitOutcome::Failed { status: 422 });
    assert_eq!(
        form.email.error.as_deref(),
        Some("The email has already been taken.")
    );
    crate::assert_alert!(alerts, AlertVariant::Error, "The email has already been taken.");
}

#[tokio::test]
async fn test_reset_without_token_makes_no_call() {
    let backend = MockBackend::start().await;
    forbid_requests(&backend).await;

    let alerts = AlertProvider::new().handle();
    let mut form = ResetPasswordForm::from_link(None, Some("ana@example.com".to_string()));
    form.password.set_value("newpass1");
    form.confirm_password.set_value("newpass1");

    let outcome = form.submit(&backend.api(), &alerts).await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    crate::assert_alert!(alerts, AlertVariant::Error, "Invalid token or email.");
}

#[tokio::test]
async fn test_reset_password_expired_token() {
    let backend = MockBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/password/reset"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "expired" })))
        .mount(&backend.server)
        .await;

    let alerts = AlertProvider::new().handle();
    let mut form = ResetPasswordForm::from_link(
        Some("tok".to_string()),
        Some("ana@example.com".to_string()),
    );
    form.password.set_value("newpass1");
    form.confirm_password.set_value("newpass1");

    let outcome = form.submit(&backend.api(), &alerts).await;

    assert_eq!(outcome, SubmitOutcome::Failed { status: 403 });
    assert!(!form.is_reset);
    crate::assert_alert!(alerts, AlertVariant::Error, "Token expired.");
}

#[tokio::test]
async fn test_forgot_password_unknown_email() {
    let backend = MockBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/password/reset-link"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not found" })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let alerts = AlertProvider::new().handle();
    let mut form = ForgotPasswordForm::new();
    form.email.set_value("ghost@example.com");

    let outcome = form.submit(&backend.api(), &alerts).await;

    assert_eq!(outcome, SubmitOutcome::Failed { status: 404 });
    assert!(!form.is_submitted);
    crate::assert_alert!(
        alerts,
        AlertVariant::Error,
        "Email not found. Please check and try again."
    );
}

#[tokio::test]
async fn test_forgot_password_success_masks_email() {
    let backend = MockBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/password/reset-link"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "We have emailed your password reset link."
        })))
        .mount(&backend.server)
        .await;

    let alerts = AlertProvider::new().handle();
    let mut form = ForgotPasswordForm::new();
    form.email.set_value("constructor@example.com");

    let outcome = form.submit(&backend.api(), &alerts).await;

    assert_eq!(outcome, SubmitOutcome::Succeeded { redirect: None });
    assert!(form.is_submitted);
    assert_eq!(form.masked_email().as_deref(), Some("con...@example.com"));
    crate::assert_alert!(
        alerts,
        AlertVariant::Success,
        "Password reset link sent to your email."
    );
}
