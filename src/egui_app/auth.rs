/**
 * Authentication Module
 *
 * API facade for the `/auth` endpoints plus the in-memory session that holds
 * the bearer token after a successful sign in.
 */

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::egui_app::api::{ApiClient, ApiResponse, RequestOptions};
use crate::egui_app::config::Config;
use crate::shared::auth::{
    AuthTokenData, LoginRequest, PasswordResetResponse, RegisterRequest, ResetLinkRequest,
    ResetPasswordRequest, UserData,
};
use crate::shared::config::ConfigError;

/// Named authentication operations over the API client
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(ApiClient::new(config.app())?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiResponse<AuthTokenData> {
        tracing::info!("[AUTH] Signing in {}", request.email);
        self.client
            .post("/auth/login", request, RequestOptions::new())
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResponse<AuthTokenData> {
        tracing::info!("[AUTH] Registering {}", request.email);
        self.client
            .post("/auth/register", request, RequestOptions::new())
            .await
    }

    /// Current user, or the user with `uuid` when given
    pub async fn get_user(&self, token: &str, uuid: Option<Uuid>) -> ApiResponse<UserData> {
        let mut options = RequestOptions::new().bearer(token);
        if let Some(id) = uuid {
            options = options.query("uuid", id.to_string());
        }
        self.client.get("/auth/user", options).await
    }

    pub async fn get_users(&self, token: &str) -> ApiResponse<Vec<UserData>> {
        self.client
            .get("/auth/users", RequestOptions::new().bearer(token))
            .await
    }

    /// The body of a successful logout is ignored
    pub async fn logout(&self, token: &str) -> ApiResponse<()> {
        tracing::info!("[AUTH] Signing out");
        self.client
            .post::<serde_json::Value, _>(
                "/auth/logout",
                &serde_json::json!({}),
                RequestOptions::new().bearer(token),
            )
            .await
            .map(|_| ())
    }

    pub async fn request_password_reset(
        &self,
        request: &ResetLinkRequest,
    ) -> ApiResponse<PasswordResetResponse> {
        tracing::info!("[AUTH] Requesting reset link for {}", request.email);
        self.client
            .post("/auth/password/reset-link", request, RequestOptions::new())
            .await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> ApiResponse<PasswordResetResponse> {
        tracing::info!("[AUTH] Resetting password for {}", request.email);
        self.client
            .post("/auth/password/reset", request, RequestOptions::new())
            .await
    }
}

/// In-memory session. Never written to disk.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub token_type: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: Option<UserData>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from a login/register payload issued at `now`
    pub fn start(&mut self, data: &AuthTokenData, now: DateTime<Utc>) {
        self.token = Some(data.token.clone()).filter(|t| !t.is_empty());
        self.token_type = Some(data.token_type.clone()).filter(|t| !t.is_empty());
        // Lifetimes chrono cannot represent are treated as unbounded
        self.expires_at = Some(data.expires_in)
            .filter(|secs| *secs > 0)
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime));
        self.user = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Sessions without a known expiry never expire client-side
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }

    /// Token usable at `now`
    pub fn active_token(&self, now: DateTime<Utc>) -> Option<&str> {
        if self.is_expired(now) {
            return None;
        }
        self.token.as_deref()
    }
}
