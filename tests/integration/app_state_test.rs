//! AppState against a mocked backend
//!
//! These run without `#[tokio::test]`: `AppState` owns its own runtime and is
//! driven the way the UI drives it, by calling `tick` until replies land.

use std::time::{Duration, Instant};

use serde_json::json;
use sitedesk::egui_app::{AlertVariant, AppState, Route};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{MockBackend, TestUser};

/// Tick until `done` holds or five seconds pass
fn pump(state: &mut AppState, mut done: impl FnMut(&AppState) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        state.tick(Instant::now());
        if done(state) {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("state did not settle; {} requests pending", state.pending_requests());
}

fn sign_in(state: &mut AppState, user: &TestUser) {
    state.sign_in.email.set_value(user.email.clone());
    state.sign_in.password.set_value(user.password.clone());
    state.submit_sign_in();
    assert!(state.sign_in.is_submitting());
    pump(state, |s| s.pending_requests() == 0);
}

#[test]
fn test_sign_in_then_home_loads_profile_and_team() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let backend = rt.block_on(MockBackend::start());
    let ana = TestUser::new("Ana", "ana@example.com");
    let bo = TestUser::new("Bo", "bo@example.com");
    let bearer = format!("Bearer {}", ana.token);

    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ana.login_body()))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auth/user"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(ana.user_body()))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auth/users"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([ana.user_body(), bo.user_body()])),
            )
            .mount(&backend.server)
            .await;
    });

    let mut state = AppState::new(backend.config()).unwrap();
    sign_in(&mut state, &ana);

    assert!(!state.sign_in.is_submitting());
    assert!(state.session.is_authenticated());
    assert_eq!(state.router.scheduled_route(), Some(&Route::Home));
    assert_eq!(state.alerts.current().unwrap().variant, AlertVariant::Success);

    // redirect fires once its delay has passed
    state.tick(Instant::now() + Duration::from_secs(4));
    assert_eq!(state.current_route(), &Route::Home);

    pump(&mut state, |s| s.pending_requests() == 0);
    assert_eq!(state.home.user.as_ref().map(|u| u.name.as_str()), Some("Ana"));
    assert_eq!(state.home.team.len(), 2);
    assert!(!state.home.loading);
    assert_eq!(state.session.user.as_ref().map(|u| u.id), Some(ana.id));
}

#[test]
fn test_rejected_token_ends_session_on_home() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let backend = rt.block_on(MockBackend::start());
    let ana = TestUser::new("Ana", "ana@example.com");

    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ana.login_body()))
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthenticated." })),
            )
            .mount(&backend.server)
            .await;
    });

    let mut state = AppState::new(backend.config()).unwrap();
    sign_in(&mut state, &ana);
    state.navigate(Route::Home);
    assert_eq!(state.current_route(), &Route::Home);

    pump(&mut state, |s| s.current_route() == &Route::SignIn);

    assert!(!state.session.is_authenticated());
    assert_eq!(state.alerts.current().unwrap().variant, AlertVariant::Warning);
}

#[test]
fn test_leaving_page_aborts_in_flight_request() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let backend = rt.block_on(MockBackend::start());

    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/api/auth/password/reset-link"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "success", "message": "sent" }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&backend.server)
            .await;
    });

    let mut state = AppState::new(backend.config()).unwrap();
    state.navigate(Route::ForgotPassword);
    state.forgot_password.email.set_value("ana@example.com");
    state.submit_forgot_password();
    assert!(state.forgot_password.is_submitting());

    state.navigate(Route::SignIn);

    assert_eq!(state.pending_requests(), 0);
    assert!(!state.forgot_password.is_submitting());
    assert!(state.forgot_password.email.value.is_empty());
    assert!(state.alerts.current().is_none());
}
