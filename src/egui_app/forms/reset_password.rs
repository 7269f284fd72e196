use crate::egui_app::alert::{AlertConfig, AlertHandle};
use crate::egui_app::api::ApiResponse;
use crate::egui_app::auth::AuthApi;
use crate::egui_app::navigation::Redirect;
use crate::egui_app::types::Route;
use crate::shared::auth::{PasswordResetResponse, ResetPasswordRequest};

use super::input::{FieldRules, InputField};
use super::{
    reject, FailureCopy, SubmitFlag, SubmitOutcome, Submission, ERROR_TITLE, PASSWORD_MIN_LEN,
};

/// Delay before returning to sign in after a reset
pub const RESET_REDIRECT_MS: u64 = 3000;

const FAILURE_COPY: FailureCopy = FailureCopy {
    by_status: &[
        (401, "Invalid token or email."),
        (403, "Token expired."),
        (422, "Invalid input. Please check your details."),
        (429, "Too many attempts. Please try again later."),
    ],
    network: "A network error occurred. Please try again.",
    fallback: "An unknown error occurred.",
};

#[derive(Debug)]
pub struct ResetPasswordForm {
    /// From the `token` query parameter of the reset link
    pub token: Option<String>,
    /// From the `email` query parameter of the reset link
    pub email: Option<String>,
    pub password: InputField,
    pub confirm_password: InputField,
    /// Set once the password was changed; switches to the confirmation view
    pub is_reset: bool,
    submitting: SubmitFlag,
}

impl Default for ResetPasswordForm {
    fn default() -> Self {
        let rules = FieldRules::required().min_length(PASSWORD_MIN_LEN);
        Self {
            token: None,
            email: None,
            password: InputField::password("Enter new password").with_rules(rules),
            confirm_password: InputField::password("Confirm new password").with_rules(rules),
            is_reset: false,
            submitting: SubmitFlag::default(),
        }
    }
}

impl ResetPasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form bound to the parameters of a reset link
    pub fn from_link(token: Option<String>, email: Option<String>) -> Self {
        let mut form = Self::default();
        form.set_link(token, email);
        form
    }

    pub fn set_link(&mut self, token: Option<String>, email: Option<String>) {
        self.token = token.filter(|t| !t.trim().is_empty());
        self.email = email.filter(|e| !e.trim().is_empty());
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_raised()
    }

    fn first_violation(&self) -> Option<&'static str> {
        if self.token.is_none() || self.email.is_none() {
            return Some("Invalid token or email.");
        }
        if self.password.value.is_empty() {
            return Some("Password is required.");
        }
        if self.password.value.chars().count() < PASSWORD_MIN_LEN {
            return Some("Password must be at least 6 characters.");
        }
        if self.password.value != self.confirm_password.value {
            return Some("Passwords do not match.");
        }
        None
    }

    pub fn begin(&mut self, alerts: &AlertHandle) -> Option<Submission<ResetPasswordRequest>> {
        if self.is_submitting() {
            return None;
        }
        if let Some(message) = self.first_violation() {
            reject(alerts, message);
            return None;
        }
        let (token, email) = match (&self.token, &self.email) {
            (Some(token), Some(email)) => (token.clone(), email.clone()),
            _ => return None,
        };

        let guard = self.submitting.raise()?;
        Some(Submission {
            request: ResetPasswordRequest {
                email,
                token,
                password: self.password.value.clone(),
                password_confirmation: self.confirm_password.value.clone(),
            },
            guard,
        })
    }

    pub fn complete(
        &mut self,
        response: ApiResponse<PasswordResetResponse>,
        alerts: &AlertHandle,
    ) -> SubmitOutcome {
        if response.status == 200 && response.data.is_some() {
            self.is_reset = true;
            self.password.reset();
            self.confirm_password.reset();
            alerts.show_alert(AlertConfig::success(
                "Success",
                "Password has been reset successfully, navigating to login page.",
            ));
            return SubmitOutcome::Succeeded {
                redirect: Some(Redirect::after_millis(Route::SignIn, RESET_REDIRECT_MS)),
            };
        }

        let message = FAILURE_COPY.message_for(&response);
        tracing::warn!(
            "[AUTH] Password reset failed with status {}: {}",
            response.status,
            message
        );
        alerts.show_alert(AlertConfig::error(ERROR_TITLE, message));
        SubmitOutcome::Failed {
            status: response.status,
        }
    }

    pub async fn submit(&mut self, api: &AuthApi, alerts: &AlertHandle) -> SubmitOutcome {
        let Some(Submission { request, guard }) = self.begin(alerts) else {
            return SubmitOutcome::Rejected;
        };
        let response = api.reset_password(&request).await;
        let outcome = self.complete(response, alerts);
        drop(guard);
        outcome
    }

    /// Clear the passwords and confirmation view; the link parameters stay
    pub fn reset(&mut self) {
        self.password.reset();
        self.confirm_password.reset();
        self.is_reset = false;
    }
}
