use eframe::egui;

use crate::egui_app::forms::PASSWORD_MIN_LEN;
use crate::egui_app::pages::page_meta;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Route;
use crate::egui_app::views::inputs::input_field;

const CARD_WIDTH: f32 = 420.0;

/// Brand panel on the left, the form card centered on the right
fn auth_layout(
    ui: &mut egui::Ui,
    state: &mut AppState,
    content: impl FnOnce(&mut egui::Ui, &mut AppState),
) {
    let meta = page_meta(state.current_route());

    egui::SidePanel::left("auth_brand_panel")
        .resizable(false)
        .exact_width((ui.available_width() * 0.38).max(260.0))
        .frame(styles::brand_panel_frame())
        .show_inside(ui, |ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(egui::RichText::new("SiteDesk").size(34.0).strong().color(colors::TEXT_LIGHT));
            ui.add_space(8.0);
            ui.label(egui::RichText::new(meta.description).color(colors::BRAND_MUTED));
        });

    egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.set_max_width(CARD_WIDTH);
                    styles::card_frame().show(ui, |ui| {
                        ui.set_width(CARD_WIDTH - 56.0);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            content(ui, state);
                        });
                    });
                    ui.add_space(48.0);
                });
            });
        });
}

fn heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.label(egui::RichText::new(title).size(26.0).strong().color(colors::TEXT_PRIMARY));
    ui.add_space(4.0);
    ui.label(egui::RichText::new(subtitle).color(colors::TEXT_SECONDARY));
    ui.add_space(20.0);
}

/// Full-width submit button; shows a spinner while a request is in flight
fn submit_button(ui: &mut egui::Ui, text: &str, submitting: bool) -> bool {
    let label = if submitting { "..." } else { text };
    let clicked = ui
        .add_enabled(
            !submitting,
            styles::primary_button(label, !submitting)
                .min_size(egui::vec2(ui.available_width(), 40.0)),
        )
        .clicked();
    if submitting {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
        });
    }
    clicked
}

fn footer_link(ui: &mut egui::Ui, prompt: &str, link: &str) -> bool {
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(prompt).color(colors::TEXT_SECONDARY));
        ui.add(styles::link_button(link)).clicked()
    })
    .inner
}

fn enter_pressed(ui: &egui::Ui) -> bool {
    ui.input(|i| i.key_pressed(egui::Key::Enter))
}

pub fn render_sign_in(ui: &mut egui::Ui, state: &mut AppState) {
    auth_layout(ui, state, |ui, state| {
        heading(ui, "Sign In", "Enter your email and password to sign in!");

        let submitting = state.sign_in.is_submitting();
        state.sign_in.email.disabled = submitting;
        state.sign_in.password.disabled = submitting;

        input_field(ui, "Email", &mut state.sign_in.email);
        let password = input_field(ui, "Password", &mut state.sign_in.password);

        if let Some(ref error) = state.sign_in.error {
            ui.label(egui::RichText::new(error).color(colors::ERROR));
            ui.add_space(8.0);
        }

        if ui.add(styles::link_button("Forgot password?")).clicked() {
            state.navigate(Route::ForgotPassword);
            return;
        }
        ui.add_space(12.0);

        let submit_on_enter = password.lost_focus() && enter_pressed(ui);
        if submit_button(ui, "Sign in", submitting) || submit_on_enter {
            state.submit_sign_in();
        }

        if footer_link(ui, "Don't have an account?", "Sign Up") {
            state.navigate(Route::SignUp);
        }
    });
}

pub fn render_sign_up(ui: &mut egui::Ui, state: &mut AppState) {
    auth_layout(ui, state, |ui, state| {
        heading(ui, "Sign Up", "Enter your email and password to sign up!");

        let submitting = state.sign_up.is_submitting();
        let form = &mut state.sign_up;
        for field in [
            &mut form.first_name,
            &mut form.last_name,
            &mut form.email,
            &mut form.password,
        ] {
            field.disabled = submitting;
        }

        ui.columns(2, |columns| {
            input_field(&mut columns[0], "First Name", &mut form.first_name);
            input_field(&mut columns[1], "Last Name", &mut form.last_name);
        });
        input_field(ui, "Email", &mut form.email);
        input_field(ui, "Password", &mut form.password);

        ui.horizontal_wrapped(|ui| {
            ui.add_enabled(!submitting, egui::Checkbox::without_text(&mut form.terms_accepted));
            ui.label(
                egui::RichText::new(
                    "By creating an account means you agree to the Terms and Conditions, and our Privacy Policy",
                )
                .color(colors::TEXT_SECONDARY),
            );
        });
        if let Some(ref error) = form.terms_error {
            ui.label(egui::RichText::new(error).color(colors::ERROR).small());
        }
        ui.add_space(12.0);

        if submit_button(ui, "Sign Up", submitting) {
            state.submit_sign_up();
        }

        if footer_link(ui, "Already have an account?", "Sign In") {
            state.navigate(Route::SignIn);
        }
    });
}

pub fn render_forgot_password(ui: &mut egui::Ui, state: &mut AppState) {
    auth_layout(ui, state, |ui, state| {
        if state.forgot_password.is_submitted {
            heading(ui, "Check Your Email", "");
            let masked = state.forgot_password.masked_email().unwrap_or_default();
            ui.label(
                egui::RichText::new(format!(
                    "We've sent a password reset link to {}. Please check your inbox and follow the instructions to reset your password.",
                    masked
                ))
                .color(colors::SUCCESS),
            );
            ui.add_space(16.0);
            if ui.add(styles::link_button("Back to Sign In")).clicked() {
                state.navigate(Route::SignIn);
            }
            return;
        }

        heading(
            ui,
            "Forgot Password?",
            "Enter your email and we'll send you a link to reset your password.",
        );

        let submitting = state.forgot_password.is_submitting();
        state.forgot_password.email.disabled = submitting;
        let email = input_field(ui, "Email", &mut state.forgot_password.email);
        ui.add_space(8.0);

        let submit_on_enter = email.lost_focus() && enter_pressed(ui);
        if submit_button(ui, "Send Reset Link", submitting) || submit_on_enter {
            state.submit_forgot_password();
        }

        if footer_link(ui, "Remember your password?", "Sign In") {
            state.navigate(Route::SignIn);
        }
    });
}

pub fn render_reset_password(ui: &mut egui::Ui, state: &mut AppState) {
    auth_layout(ui, state, |ui, state| {
        if state.reset_password.is_reset {
            heading(ui, "Password Updated", "Your password has been successfully reset.");
            if ui.add(styles::link_button("Back to Sign In")).clicked() {
                state.navigate(Route::SignIn);
            }
            return;
        }

        heading(ui, "Reset Password", "Enter a new password for your account.");

        if state.reset_password.token.is_none() || state.reset_password.email.is_none() {
            ui.label(
                egui::RichText::new("This reset link is incomplete. Request a new one.")
                    .color(colors::WARNING),
            );
            ui.add_space(10.0);
        }

        let submitting = state.reset_password.is_submitting();
        let form = &mut state.reset_password;
        form.password.disabled = submitting;
        form.confirm_password.disabled = submitting;

        ui.label(
            egui::RichText::new(format!(
                "The password must be at least {} characters.",
                PASSWORD_MIN_LEN
            ))
            .color(colors::TEXT_SECONDARY)
            .small(),
        );
        ui.add_space(6.0);
        input_field(ui, "New Password", &mut form.password);
        let confirm = input_field(ui, "Confirm Password", &mut form.confirm_password);

        let submit_on_enter = confirm.lost_focus() && enter_pressed(ui);
        if submit_button(ui, "Reset Password", submitting) || submit_on_enter {
            state.submit_reset_password();
        }

        if footer_link(ui, "Remember your password?", "Sign In") {
            state.navigate(Route::SignIn);
        }
    });
}
