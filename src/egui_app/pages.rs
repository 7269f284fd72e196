//! Page metadata
//!
//! Title and description for each route. The title is pushed to the native
//! window; the description is shown under the page heading.

use eframe::egui;

use crate::egui_app::types::Route;

const APP_NAME: &str = "Construction Management App";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn page_meta(route: &Route) -> PageMeta {
    match route {
        Route::SignIn => PageMeta {
            title: "Construction Management App | Sign In",
            description: "Sign in to access the Construction Management App and streamline your project workflows.",
        },
        Route::SignUp => PageMeta {
            title: "Construction Management App | Sign Up",
            description: "Sign up to access the Construction Management App and streamline your project workflows.",
        },
        Route::ForgotPassword => PageMeta {
            title: "Construction Management App | Forgot Password",
            description: "Reset your password to regain access to the Construction Management App.",
        },
        Route::ResetPassword { .. } => PageMeta {
            title: "Construction Management App | Reset Password",
            description: "Reset your password to regain access to the Construction Management App.",
        },
        Route::Home => PageMeta {
            title: "Construction Management App | Home",
            description: "Your projects and team at a glance.",
        },
        Route::NotFound(_) => PageMeta {
            title: "Construction Management App | Page Not Found",
            description: "The page you are looking for does not exist.",
        },
    }
}

impl PageMeta {
    /// Bare application name, used before the first route is shown
    pub fn app_name() -> &'static str {
        APP_NAME
    }

    /// Push the title to the native window
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.title.to_string()));
    }
}
