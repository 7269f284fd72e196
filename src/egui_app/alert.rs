//! Alert context
//!
//! One alert slot per provider. `show_alert` replaces whatever is visible,
//! `dismiss` hides it. There is no queue and no timer; callers that want a
//! delayed follow-up (navigation) own that delay themselves.
//!
//! Consumers never reach the slot directly. They ask a [`ProviderScope`] for an
//! [`AlertHandle`], which fails with [`SharedError::ProviderMissing`] when the
//! scope has no [`AlertProvider`] installed.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::shared::error::SharedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for AlertVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertVariant::Success => write!(f, "success"),
            AlertVariant::Error => write!(f, "error"),
            AlertVariant::Warning => write!(f, "warning"),
            AlertVariant::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    pub variant: AlertVariant,
    pub title: String,
    pub message: String,
}

impl AlertConfig {
    pub fn new(
        variant: AlertVariant,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            variant,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Info, title, message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AlertState {
    #[default]
    Hidden,
    Visible(AlertConfig),
}

impl AlertState {
    pub fn visible(&self) -> Option<&AlertConfig> {
        match self {
            AlertState::Hidden => None,
            AlertState::Visible(config) => Some(config),
        }
    }
}

/// Owner of the alert slot
#[derive(Debug, Default)]
pub struct AlertProvider {
    slot: Arc<Mutex<AlertState>>,
}

impl AlertProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> AlertHandle {
        AlertHandle {
            slot: Arc::clone(&self.slot),
        }
    }

    /// Copy of the current state, for rendering
    pub fn snapshot(&self) -> AlertState {
        self.slot
            .lock()
            .map(|state| state.clone())
            .unwrap_or_default()
    }
}

/// Capability to show and dismiss the provider's alert
#[derive(Debug, Clone)]
pub struct AlertHandle {
    slot: Arc<Mutex<AlertState>>,
}

impl AlertHandle {
    pub fn show_alert(&self, config: AlertConfig) {
        tracing::debug!("[ALERT] {} - {}: {}", config.variant, config.title, config.message);
        if let Ok(mut state) = self.slot.lock() {
            *state = AlertState::Visible(config);
        }
    }

    pub fn dismiss(&self) {
        if let Ok(mut state) = self.slot.lock() {
            *state = AlertState::Hidden;
        }
    }

    pub fn current(&self) -> Option<AlertConfig> {
        self.slot
            .lock()
            .ok()
            .and_then(|state| state.visible().cloned())
    }
}

/// Providers installed around the view tree
#[derive(Debug, Default)]
pub struct ProviderScope {
    alert: Option<AlertProvider>,
}

impl ProviderScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alert_provider(mut self, provider: AlertProvider) -> Self {
        self.alert = Some(provider);
        self
    }

    pub fn alert_provider(&self) -> Option<&AlertProvider> {
        self.alert.as_ref()
    }

    /// Obtain the alert capability; fails fast outside an `AlertProvider`
    pub fn use_alert(&self) -> Result<AlertHandle, SharedError> {
        self.alert
            .as_ref()
            .map(AlertProvider::handle)
            .ok_or_else(|| SharedError::provider_missing("AlertProvider"))
    }
}
