use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Route;

pub mod alert_view;
pub mod auth_view;
pub mod inputs;
pub mod landing_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("SiteDesk").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    if state.session.is_authenticated() {
                        if ui.button("Sign out").clicked() {
                            state.logout();
                        }
                        if let Some(ref user) = state.session.user {
                            ui.colored_label(colors::TEXT_LIGHT, &user.name);
                        }
                    }

                    if state.pending_requests() > 0 {
                        ui.spinner();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show(ctx, |ui| match state.current_route().clone() {
            Route::SignIn => auth_view::render_sign_in(ui, state),
            Route::SignUp => auth_view::render_sign_up(ui, state),
            Route::ForgotPassword => auth_view::render_forgot_password(ui, state),
            Route::ResetPassword { .. } => auth_view::render_reset_password(ui, state),
            Route::Home => landing_view::render(ui, state),
            Route::NotFound(path) => landing_view::render_not_found(ui, state, &path),
        });
}

/// Alert overlay, drawn last so it sits above the page
pub fn render_alert(ctx: &egui::Context, state: &AppState) {
    if let Some(provider) = state.providers.alert_provider() {
        alert_view::render(ctx, &provider.snapshot(), &state.alerts);
    }
}
