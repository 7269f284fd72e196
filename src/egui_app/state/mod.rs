use std::future::Future;
use std::mem::discriminant;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::egui_app::alert::{AlertConfig, AlertHandle, AlertProvider, ProviderScope};
use crate::egui_app::api::ApiResponse;
use crate::egui_app::auth::{AuthApi, AuthState};
use crate::egui_app::config::Config;
use crate::egui_app::forms::{
    ForgotPasswordForm, ResetPasswordForm, SignInForm, SignUpForm, SubmitGuard, SubmitOutcome,
};
use crate::egui_app::navigation::Router;
use crate::egui_app::types::Route;
use crate::shared::auth::{AuthTokenData, PasswordResetResponse, UserData};
use crate::shared::error::SharedError;

const SESSION_TITLE: &str = "Session ended";

/// Result of a background request, sent back to the UI thread
#[derive(Debug)]
pub enum ApiReply {
    SignIn(ApiResponse<AuthTokenData>),
    SignUp(ApiResponse<AuthTokenData>),
    ForgotPassword(ApiResponse<PasswordResetResponse>),
    ResetPassword(ApiResponse<PasswordResetResponse>),
    User(ApiResponse<UserData>),
    Users(ApiResponse<Vec<UserData>>),
    Logout(ApiResponse<()>),
}

/// A request running on the runtime
struct PendingRequest {
    /// Page that issued it; `None` survives navigation
    origin: Option<Route>,
    task: JoinHandle<()>,
    rx: Receiver<ApiReply>,
    guard: Option<SubmitGuard>,
}

/// Data shown on the home page
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub user: Option<UserData>,
    pub team: Vec<UserData>,
    pub error: Option<String>,
    pub loading: bool,
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub session: AuthState,
    pub router: Router,
    pub providers: ProviderScope,
    pub alerts: AlertHandle,
    pub api: AuthApi,
    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,
    pub forgot_password: ForgotPasswordForm,
    pub reset_password: ResetPasswordForm,
    pub home: HomeState,
    runtime: Runtime,
    pending: Vec<PendingRequest>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, SharedError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("sitedesk-io")
            .enable_all()
            .build()?;
        let api = AuthApi::from_config(&config)?;
        let providers = ProviderScope::new().with_alert_provider(AlertProvider::new());
        let alerts = providers.use_alert()?;

        tracing::info!("[CONFIG] API base URL: {}", config.api_base_url());

        Ok(Self {
            config,
            session: AuthState::new(),
            router: Router::default(),
            providers,
            alerts,
            api,
            sign_in: SignInForm::new(),
            sign_up: SignUpForm::new(),
            forgot_password: ForgotPasswordForm::new(),
            reset_password: ResetPasswordForm::new(),
            home: HomeState::default(),
            runtime,
            pending: Vec::new(),
        })
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    /// Requests still waiting for a reply
    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    /// Whether the UI should keep repainting to pick up replies or redirects
    pub fn needs_polling(&self) -> bool {
        !self.pending.is_empty() || self.router.scheduled_route().is_some()
    }

    /// Leave the current page for `route`
    ///
    /// Requests issued by the page being left are aborted and its form is
    /// cleared. Private routes fall back to sign in without a live session.
    pub fn navigate(&mut self, route: Route) {
        let route = self.guard_route(route);
        if &route == self.router.current() {
            return;
        }

        let leaving = self.router.current().clone();
        self.cancel_requests_from(&leaving);
        let previous = self.router.navigate(route.clone());
        self.reset_page(&previous);

        match route {
            Route::ResetPassword { token, email } => self.reset_password.set_link(token, email),
            Route::Home => self.load_home(),
            _ => {}
        }
    }

    fn guard_route(&self, route: Route) -> Route {
        if route.is_public() || self.session.active_token(Utc::now()).is_some() {
            return route;
        }
        tracing::info!("[NAV] {} requires a session", route.path());
        if self.session.is_authenticated() {
            self.alerts.show_alert(AlertConfig::warning(
                SESSION_TITLE,
                "Your session has expired. Please sign in again.",
            ));
        }
        Route::SignIn
    }

    fn reset_page(&mut self, route: &Route) {
        match route {
            Route::SignIn => self.sign_in.reset(),
            Route::SignUp => self.sign_up.reset(),
            Route::ForgotPassword => self.forgot_password.reset(),
            Route::ResetPassword { .. } => self.reset_password.reset(),
            Route::Home => self.home = HomeState::default(),
            Route::NotFound(_) => {}
        }
    }

    fn cancel_requests_from(&mut self, route: &Route) {
        let page = discriminant(route);
        self.pending.retain(|request| {
            let owned = request
                .origin
                .as_ref()
                .is_some_and(|origin| discriminant(origin) == page);
            if owned {
                tracing::debug!("[NAV] Aborting request from {}", route.path());
                request.task.abort();
            }
            !owned
        });
    }

    fn spawn<F>(&mut self, origin: Option<Route>, guard: Option<SubmitGuard>, request: F)
    where
        F: Future<Output = ApiReply> + Send + 'static,
    {
        let (tx, rx) = channel();
        let task = self.runtime.spawn(async move {
            let reply = request.await;
            let _ = tx.send(reply);
        });
        self.pending.push(PendingRequest {
            origin,
            task,
            rx,
            guard,
        });
    }

    pub fn submit_sign_in(&mut self) {
        let Some(submission) = self.sign_in.begin(&self.alerts) else {
            return;
        };
        let api = self.api.clone();
        let request = submission.request;
        self.spawn(Some(Route::SignIn), Some(submission.guard), async move {
            ApiReply::SignIn(api.login(&request).await)
        });
    }

    pub fn submit_sign_up(&mut self) {
        let Some(submission) = self.sign_up.begin(&self.alerts) else {
            return;
        };
        let api = self.api.clone();
        let request = submission.request;
        self.spawn(Some(Route::SignUp), Some(submission.guard), async move {
            ApiReply::SignUp(api.register(&request).await)
        });
    }

    pub fn submit_forgot_password(&mut self) {
        let Some(submission) = self.forgot_password.begin(&self.alerts) else {
            return;
        };
        let api = self.api.clone();
        let request = submission.request;
        self.spawn(Some(Route::ForgotPassword), Some(submission.guard), async move {
            ApiReply::ForgotPassword(api.request_password_reset(&request).await)
        });
    }

    pub fn submit_reset_password(&mut self) {
        let Some(submission) = self.reset_password.begin(&self.alerts) else {
            return;
        };
        let api = self.api.clone();
        let request = submission.request;
        let origin = self.router.current().clone();
        self.spawn(Some(origin), Some(submission.guard), async move {
            ApiReply::ResetPassword(api.reset_password(&request).await)
        });
    }

    /// Fetch the signed-in user and the team list
    pub fn load_home(&mut self) {
        let Some(token) = self.session.active_token(Utc::now()).map(str::to_string) else {
            return;
        };
        self.home.loading = true;
        self.home.error = None;

        let api = self.api.clone();
        let user_token = token.clone();
        self.spawn(Some(Route::Home), None, async move {
            ApiReply::User(api.get_user(&user_token, None).await)
        });
        let api = self.api.clone();
        self.spawn(Some(Route::Home), None, async move {
            ApiReply::Users(api.get_users(&token).await)
        });
    }

    /// End the session locally, then tell the server
    pub fn logout(&mut self) {
        let token = self.session.token.clone();
        self.session.clear();
        self.navigate(Route::SignIn);
        self.alerts
            .show_alert(AlertConfig::info("Signed out", "You have been signed out."));

        if let Some(token) = token {
            let api = self.api.clone();
            self.spawn(None, None, async move {
                ApiReply::Logout(api.logout(&token).await)
            });
        }
    }

    /// Drop the session after the server rejected the token
    fn end_session(&mut self) {
        tracing::warn!("[AUTH] Session rejected by the server");
        self.session.clear();
        self.navigate(Route::SignIn);
        self.alerts.show_alert(AlertConfig::warning(
            SESSION_TITLE,
            "Your session is no longer valid. Please sign in again.",
        ));
    }

    /// Apply finished requests and due redirects. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        let mut replies = Vec::new();
        self.pending.retain_mut(|request| match request.rx.try_recv() {
            Ok(reply) => {
                replies.push((request.origin.take(), reply, request.guard.take()));
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => false,
        });

        for (origin, reply, guard) in replies {
            // An earlier reply in this batch may have left the page
            if origin
                .as_ref()
                .is_some_and(|origin| discriminant(origin) != discriminant(self.router.current()))
            {
                tracing::debug!("[NAV] Dropping reply for a page that was left");
                drop(guard);
                continue;
            }
            self.apply_reply(reply, now);
            drop(guard);
        }

        if let Some(route) = self.router.take_due(now) {
            self.navigate(route);
        }
    }

    fn apply_reply(&mut self, reply: ApiReply, now: Instant) {
        let outcome = match reply {
            ApiReply::SignIn(response) => {
                let token = response
                    .data
                    .as_ref()
                    .filter(|_| response.status == 200)
                    .cloned();
                let outcome = self.sign_in.complete(response, &self.alerts);
                if let (true, Some(data)) = (outcome.is_success(), token) {
                    self.session.start(&data, Utc::now());
                    tracing::info!("[AUTH] Session started");
                }
                outcome
            }
            ApiReply::SignUp(response) => self.sign_up.complete(response, &self.alerts),
            ApiReply::ForgotPassword(response) => {
                self.forgot_password.complete(response, &self.alerts)
            }
            ApiReply::ResetPassword(response) => {
                self.reset_password.complete(response, &self.alerts)
            }
            ApiReply::User(response) => {
                self.apply_user(response);
                return;
            }
            ApiReply::Users(response) => {
                self.apply_users(response);
                return;
            }
            ApiReply::Logout(response) => {
                if !response.is_success() {
                    tracing::warn!(
                        "[AUTH] Logout returned {}: {}",
                        response.status,
                        response.message
                    );
                }
                return;
            }
        };

        if let SubmitOutcome::Succeeded {
            redirect: Some(redirect),
        } = outcome
        {
            self.router.schedule(redirect, now);
        }
    }

    fn apply_user(&mut self, response: ApiResponse<UserData>) {
        if response.status == 401 {
            self.end_session();
            return;
        }
        self.home.loading = self.pending.iter().any(|p| p.origin == Some(Route::Home));
        match response.data {
            Some(user) => {
                self.session.user = Some(user.clone());
                self.home.user = Some(user);
            }
            None => {
                self.home.error = Some("Could not load your profile.".to_string());
            }
        }
    }

    fn apply_users(&mut self, response: ApiResponse<Vec<UserData>>) {
        if response.status == 401 {
            self.end_session();
            return;
        }
        self.home.loading = self.pending.iter().any(|p| p.origin == Some(Route::Home));
        match response.data {
            Some(team) => self.home.team = team,
            None => self.home.error = Some("Could not load your team.".to_string()),
        }
    }

    /// Time left before a scheduled redirect, for the repaint timer
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.router.time_until_redirect(now)
    }
}
