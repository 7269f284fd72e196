use crate::egui_app::alert::{AlertConfig, AlertHandle};
use crate::egui_app::api::ApiResponse;
use crate::egui_app::auth::AuthApi;
use crate::egui_app::navigation::Redirect;
use crate::egui_app::types::Route;
use crate::shared::auth::{AuthTokenData, RegisterRequest};

use super::input::{FieldRules, InputField};
use super::{
    reject, FailureCopy, SubmitFlag, SubmitOutcome, Submission, ERROR_TITLE, PASSWORD_MIN_LEN,
};

/// Delay before returning to sign in after registering
pub const SIGN_UP_REDIRECT_MS: u64 = 2000;

pub const TERMS_ERROR: &str = "You must accept the terms";

const FAILURE_COPY: FailureCopy = FailureCopy {
    by_status: &[
        (400, "Invalid registration details. Please check the form."),
        (403, "Registration is currently restricted. Contact support."),
        (409, "An account with this email already exists."),
        (422, "Some details are invalid. Please review the form."),
        (429, "Too many attempts. Please try again later."),
    ],
    network: "Network error. Please check your internet connection.",
    fallback: "Failed to complete action.",
};

#[derive(Debug)]
pub struct SignUpForm {
    pub first_name: InputField,
    pub last_name: InputField,
    pub email: InputField,
    pub password: InputField,
    pub terms_accepted: bool,
    pub terms_error: Option<String>,
    submitting: SubmitFlag,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            first_name: InputField::text("Enter your first name")
                .with_rules(FieldRules::required()),
            last_name: InputField::text("Enter your last name").with_rules(FieldRules::required()),
            email: InputField::email("Enter your email").with_rules(FieldRules::required()),
            password: InputField::password("Enter your password")
                .with_rules(FieldRules::required().min_length(PASSWORD_MIN_LEN))
                .with_hint(format!("At least {} characters", PASSWORD_MIN_LEN)),
            terms_accepted: false,
            terms_error: None,
            submitting: SubmitFlag::default(),
        }
    }
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_raised()
    }

    /// Validate every field, store the messages, return the first one
    fn validate(&mut self) -> Option<String> {
        let results = [
            self.first_name.check("First name"),
            self.last_name.check("Last name"),
            self.email.check("Email"),
            self.password.check("Password"),
        ];
        self.terms_error = (!self.terms_accepted).then(|| TERMS_ERROR.to_string());

        results
            .into_iter()
            .flatten()
            .chain(self.terms_error.clone())
            .next()
    }

    /// Field name → message for every field currently in error
    pub fn field_errors(&self) -> Vec<(&'static str, &str)> {
        [
            ("fname", self.first_name.error.as_deref()),
            ("lname", self.last_name.error.as_deref()),
            ("email", self.email.error.as_deref()),
            ("password", self.password.error.as_deref()),
            ("termsAccepted", self.terms_error.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, error)| error.map(|e| (name, e)))
        .collect()
    }

    pub fn begin(&mut self, alerts: &AlertHandle) -> Option<Submission<RegisterRequest>> {
        if self.is_submitting() {
            return None;
        }
        if let Some(first) = self.validate() {
            reject(alerts, first);
            return None;
        }

        let guard = self.submitting.raise()?;
        Some(Submission {
            request: RegisterRequest {
                name: format!("{} {}", self.first_name.trimmed(), self.last_name.trimmed()),
                email: self.email.trimmed().to_string(),
                password: self.password.value.clone(),
                password_confirmation: self.password.value.clone(),
            },
            guard,
        })
    }

    pub fn complete(
        &mut self,
        response: ApiResponse<AuthTokenData>,
        alerts: &AlertHandle,
    ) -> SubmitOutcome {
        if response.is_success() {
            alerts.show_alert(AlertConfig::success(
                "Registration Successful",
                "Registration successful! You will be navigated to the login page.",
            ));
            self.reset();
            return SubmitOutcome::Succeeded {
                redirect: Some(Redirect::after_millis(Route::SignIn, SIGN_UP_REDIRECT_MS)),
            };
        }

        let mut server_field_message = None;
        if let Some(ref error) = response.error {
            let mapping = [
                ("name", &mut self.first_name),
                ("email", &mut self.email),
                ("password", &mut self.password),
            ];
            for (key, field) in mapping {
                if let Some(message) = error.first_field_error(key) {
                    field.error = Some(message.to_string());
                    server_field_message.get_or_insert_with(|| message.to_string());
                }
            }
        }

        let message = server_field_message
            .filter(|_| response.status == 422)
            .unwrap_or_else(|| FAILURE_COPY.message_for(&response));
        tracing::warn!(
            "[AUTH] Registration failed with status {}: {}",
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
        let response = api.register(&request).await;
        let outcome = self.complete(response, alerts);
        drop(guard);
        outcome
    }

    pub fn reset(&mut self) {
        self.first_name.reset();
        self.last_name.reset();
        self.email.reset();
        self.password.reset();
        self.terms_accepted = false;
        self.terms_error = None;
    }
}
