//! Form controllers
//!
//! Each form walks editing → submitting → success/failure:
//!
//! - `begin` validates synchronously. On a violation it shows an error alert
//!   and returns `None`; nothing reaches the network.
//! - On success it returns a [`Submission`]: the request plus a [`SubmitGuard`]
//!   that keeps the form's submitting flag raised until it is dropped.
//! - `complete` maps the [`ApiResponse`] to alerts, field updates and an
//!   optional [`Redirect`].
//! - `submit` chains the three for callers that can `.await` directly.
//!
//! The guard is the cleanup step: whether the request succeeds, fails or is
//! cancelled, dropping it lowers the flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::egui_app::alert::{AlertConfig, AlertHandle};
use crate::egui_app::api::ApiResponse;
use crate::egui_app::navigation::Redirect;

pub mod forgot_password;
pub mod input;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;

pub use forgot_password::ForgotPasswordForm;
pub use input::{FieldRules, InputField, InputKind};
pub use reset_password::ResetPasswordForm;
pub use sign_in::SignInForm;
pub use sign_up::SignUpForm;

/// Minimum length for new passwords
pub const PASSWORD_MIN_LEN: usize = 6;

/// Title used on every error alert raised by a form
pub(crate) const ERROR_TITLE: &str = "Error";

/// Shared "request in flight" flag
#[derive(Debug, Clone, Default)]
pub struct SubmitFlag(Arc<AtomicBool>);

impl SubmitFlag {
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Raise the flag; `None` if it is already up
    pub fn raise(&self) -> Option<SubmitGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitGuard(Arc::clone(&self.0)))
    }
}

/// Lowers the submitting flag on drop
#[derive(Debug)]
pub struct SubmitGuard(Arc<AtomicBool>);

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A validated request ready to send
#[derive(Debug)]
pub struct Submission<R> {
    pub request: R,
    pub guard: SubmitGuard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side validation failed; no request was made
    Rejected,
    /// The request completed without success
    Failed { status: u16 },
    Succeeded { redirect: Option<Redirect> },
}

impl SubmitOutcome {
    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            SubmitOutcome::Succeeded { redirect } => redirect.as_ref(),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded { .. })
    }
}

/// User-facing copy for a form's failure paths
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailureCopy {
    pub by_status: &'static [(u16, &'static str)],
    /// Shown when no response was received
    pub network: &'static str,
    /// Shown when the status is unmapped and the server sent no message
    pub fallback: &'static str,
}

impl FailureCopy {
    pub fn message_for<T>(&self, response: &ApiResponse<T>) -> String {
        if response.is_transport_error() {
            return self.network.to_string();
        }
        if let Some((_, copy)) = self.by_status.iter().find(|(code, _)| *code == response.status) {
            return (*copy).to_string();
        }
        response
            .error_message()
            .unwrap_or(self.fallback)
            .to_string()
    }
}

pub(crate) fn reject(alerts: &AlertHandle, message: impl Into<String>) {
    alerts.show_alert(AlertConfig::error(ERROR_TITLE, message));
}
