use crate::egui_app::alert::{AlertConfig, AlertHandle};
use crate::egui_app::api::ApiResponse;
use crate::egui_app::auth::AuthApi;
use crate::egui_app::navigation::Redirect;
use crate::egui_app::types::Route;
use crate::shared::auth::{AuthTokenData, LoginRequest};

use super::input::InputField;
use super::{reject, FailureCopy, SubmitFlag, SubmitOutcome, Submission, ERROR_TITLE};

/// Delay before moving to the home page after signing in
pub const SIGN_IN_REDIRECT_MS: u64 = 3000;

const FAILURE_COPY: FailureCopy = FailureCopy {
    by_status: &[
        (400, "Invalid email or password. Please try again."),
        (401, "Unauthorized access. Check your credentials."),
        (403, "Your account has been restricted. Contact support."),
        (404, "User not found. Please check your email."),
        (429, "Too many sign in attempts. Please try again later."),
        (500, "Server error. Please try again later."),
    ],
    network: "Network error. Please check your internet connection.",
    fallback: "Sign in failed.",
};

#[derive(Debug)]
pub struct SignInForm {
    pub email: InputField,
    pub password: InputField,
    /// Inline copy of the last failure
    pub error: Option<String>,
    submitting: SubmitFlag,
}

impl Default for SignInForm {
    fn default() -> Self {
        Self {
            email: InputField::email("info@gmail.com"),
            password: InputField::password("Enter your password"),
            error: None,
            submitting: SubmitFlag::default(),
        }
    }
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_raised()
    }

    pub fn begin(&mut self, alerts: &AlertHandle) -> Option<Submission<LoginRequest>> {
        if self.is_submitting() {
            return None;
        }
        self.error = None;

        if self.email.is_blank() || self.password.value.is_empty() {
            reject(alerts, "Email and password are required.");
            return None;
        }

        let guard = self.submitting.raise()?;
        Some(Submission {
            request: LoginRequest {
                email: self.email.trimmed().to_string(),
                password: self.password.value.clone(),
            },
            guard,
        })
    }

    pub fn complete(
        &mut self,
        mut response: ApiResponse<AuthTokenData>,
        alerts: &AlertHandle,
    ) -> SubmitOutcome {
        if response.status == 200 {
            if let Some(data) = response.data.take() {
                let greeting = match data.user.map(|u| u.name).filter(|n| !n.trim().is_empty()) {
                    Some(name) => format!("Welcome back, {}!", name),
                    None => "Welcome back!".to_string(),
                };
                alerts.show_alert(AlertConfig::success("Sign in successful", greeting));
                self.reset();
                return SubmitOutcome::Succeeded {
                    redirect: Some(Redirect::after_millis(Route::Home, SIGN_IN_REDIRECT_MS)),
                };
            }
        }

        let message = FAILURE_COPY.message_for(&response);
        tracing::warn!(
            "[AUTH] Sign in failed with status {}: {}",
            response.status,
            message
        );
        self.error = Some(message.clone());
        alerts.show_alert(AlertConfig::error(ERROR_TITLE, message));
        SubmitOutcome::Failed {
            status: response.status,
        }
    }

    pub async fn submit(&mut self, api: &AuthApi, alerts: &AlertHandle) -> SubmitOutcome {
        let Some(Submission { request, guard }) = self.begin(alerts) else {
            return SubmitOutcome::Rejected;
        };
        let response = api.login(&request).await;
        let outcome = self.complete(response, alerts);
        drop(guard);
        outcome
    }

    /// Clear every field, used on success and when the form is left
    pub fn reset(&mut self) {
        self.email.reset();
        self.password.reset();
        self.error = None;
    }
}
