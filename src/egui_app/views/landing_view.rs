use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Route;

/// Home page: the signed-in user and the team list
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::page_frame().show(ui, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(32.0);
            ui.horizontal(|ui| {
                ui.add_space(32.0);
                ui.vertical(|ui| {
                    ui.set_max_width(720.0);
                    render_contents(ui, state);
                });
            });
        });
    });
}

fn render_contents(ui: &mut egui::Ui, state: &mut AppState) {
    let name = state
        .home
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let greeting = if name.is_empty() {
        "Welcome!".to_string()
    } else {
        format!("Welcome, {}!", name)
    };
    ui.label(egui::RichText::new(greeting).size(28.0).strong().color(colors::TEXT_PRIMARY));
    if let Some(ref user) = state.home.user {
        ui.label(egui::RichText::new(&user.email).color(colors::TEXT_SECONDARY));
        ui.label(
            egui::RichText::new(format!("Member since {}", user.created_at.format("%B %-d, %Y")))
                .color(colors::TEXT_SECONDARY)
                .small(),
        );
    }
    ui.add_space(20.0);

    if state.home.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading...").color(colors::TEXT_SECONDARY));
        });
        ui.add_space(12.0);
    }

    if let Some(error) = state.home.error.clone() {
        let retry = ui
            .horizontal(|ui| {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add(styles::link_button("Retry")).clicked()
            })
            .inner;
        if retry {
            state.load_home();
        }
        ui.add_space(12.0);
    }

    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new("Team").size(20.0).strong().color(colors::TEXT_PRIMARY));
        ui.add_space(8.0);

        if state.home.team.is_empty() && !state.home.loading {
            ui.label(egui::RichText::new("No team members yet.").color(colors::TEXT_SECONDARY));
        }

        egui::Grid::new("team_grid")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                for member in &state.home.team {
                    ui.label(egui::RichText::new(&member.name).color(colors::TEXT_PRIMARY));
                    ui.label(egui::RichText::new(&member.email).color(colors::TEXT_SECONDARY));
                    ui.end_row();
                }
            });
    });
}

/// Fallback for unknown paths
pub fn render_not_found(ui: &mut egui::Ui, state: &mut AppState, path: &str) {
    styles::page_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.label(egui::RichText::new("404").size(48.0).strong().color(colors::TEXT_PRIMARY));
            ui.label(
                egui::RichText::new(format!("Nothing lives at {}", path))
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(16.0);
            if ui.add(styles::link_button("Back to Sign In")).clicked() {
                state.navigate(Route::SignIn);
            }
        });
    });
}
