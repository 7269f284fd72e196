/**
 * Shared Types Module
 *
 * Route table for the desktop client. Routes mirror the web paths so deep
 * links such as password reset URLs can be opened directly.
 */

use reqwest::Url;

/// Base used to parse app-relative paths
const LOCAL_BASE: &str = "app://sitedesk";

/// Current app view
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` sign in form
    #[default]
    SignIn,
    /// `/signup`
    SignUp,
    /// `/forgotpassword`
    ForgotPassword,
    /// `/reset-password?token=..&email=..`
    ResetPassword {
        token: Option<String>,
        email: Option<String>,
    },
    /// `/home`, requires a session
    Home,
    /// Anything else
    NotFound(String),
}

impl Route {
    /// Parse an app path, a full reset URL, or anything in between
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let url = match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https" | "app") => url,
            _ => match Url::parse(LOCAL_BASE).and_then(|base| base.join(trimmed)) {
                Ok(url) => url,
                Err(_) => return Route::NotFound(trimmed.to_string()),
            },
        };

        match url.path().trim_end_matches('/') {
            "" | "/signin" => Route::SignIn,
            "/signup" => Route::SignUp,
            "/forgotpassword" => Route::ForgotPassword,
            "/reset-password" | "/resetpassword" => {
                let param = |key: &str| {
                    url.query_pairs()
                        .find(|(k, _)| k == key)
                        .map(|(_, v)| v.into_owned())
                        .filter(|v| !v.is_empty())
                };
                Route::ResetPassword {
                    token: param("token"),
                    email: param("email"),
                }
            }
            "/home" => Route::Home,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::SignIn => "/".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::ForgotPassword => "/forgotpassword".to_string(),
            Route::ResetPassword { token, email } => {
                let mut url = match Url::parse(LOCAL_BASE).and_then(|b| b.join("/reset-password")) {
                    Ok(url) => url,
                    Err(_) => return "/reset-password".to_string(),
                };
                {
                    let mut pairs = url.query_pairs_mut();
                    if let Some(token) = token {
                        pairs.append_pair("token", token);
                    }
                    if let Some(email) = email {
                        pairs.append_pair("email", email);
                    }
                }
                match url.query() {
                    Some(query) if !query.is_empty() => format!("/reset-password?{}", query),
                    _ => "/reset-password".to_string(),
                }
            }
            Route::Home => "/home".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Routes reachable without a session
    pub fn is_public(&self) -> bool {
        !matches!(self, Route::Home)
    }
}
