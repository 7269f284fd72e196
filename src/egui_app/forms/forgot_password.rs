use crate::egui_app::alert::{AlertConfig, AlertHandle};
use crate::egui_app::api::ApiResponse;
use crate::egui_app::auth::AuthApi;
use crate::shared::auth::{PasswordResetResponse, ResetLinkRequest};

use super::input::{looks_like_email, mask_email, InputField};
use super::{reject, FailureCopy, SubmitFlag, SubmitOutcome, Submission, ERROR_TITLE};

const FAILURE_COPY: FailureCopy = FailureCopy {
    by_status: &[
        (404, "Email not found. Please check and try again."),
        (429, "Too many attempts. Please try again later."),
    ],
    network: "A network error occurred. Please try again.",
    fallback: "An unknown error occurred.",
};

#[derive(Debug)]
pub struct ForgotPasswordForm {
    pub email: InputField,
    /// Set once the reset link was sent; switches to the confirmation view
    pub is_submitted: bool,
    /// Address the link went to, kept for the confirmation copy
    sent_to: Option<String>,
    submitting: SubmitFlag,
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self {
            email: InputField::email("Enter your email"),
            is_submitted: false,
            sent_to: None,
            submitting: SubmitFlag::default(),
        }
    }
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_raised()
    }

    /// `abc...@domain` form of the address the link was sent to
    pub fn masked_email(&self) -> Option<String> {
        self.sent_to.as_deref().map(mask_email)
    }

    pub fn begin(&mut self, alerts: &AlertHandle) -> Option<Submission<ResetLinkRequest>> {
        if self.is_submitting() {
            return None;
        }
        if self.email.is_blank() || !looks_like_email(&self.email.value) {
            reject(alerts, "Please enter a valid email address.");
            return None;
        }

        let guard = self.submitting.raise()?;
        Some(Submission {
            request: ResetLinkRequest {
                email: self.email.trimmed().to_string(),
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
            self.sent_to = Some(self.email.trimmed().to_string());
            self.is_submitted = true;
            alerts.show_alert(AlertConfig::success(
                "Success",
                "Password reset link sent to your email.",
            ));
            return SubmitOutcome::Succeeded { redirect: None };
        }

        let message = FAILURE_COPY.message_for(&response);
        tracing::warn!(
            "[AUTH] Reset link request failed with status {}: {}",
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
        let response = api.request_password_reset(&request).await;
        let outcome = self.complete(response, alerts);
        drop(guard);
        outcome
    }

    pub fn reset(&mut self) {
        self.email.reset();
        self.is_submitted = false;
        self.sent_to = None;
    }
}
