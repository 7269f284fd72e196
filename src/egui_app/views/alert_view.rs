use eframe::egui;

use crate::egui_app::alert::{AlertHandle, AlertState};
use crate::egui_app::theme::{colors, styles};

/// Floating alert in the top right corner, above every page
pub fn render(ctx: &egui::Context, state: &AlertState, alerts: &AlertHandle) {
    let Some(alert) = state.visible() else {
        return;
    };
    let (accent, _) = colors::alert_colors(alert.variant);

    egui::Area::new(egui::Id::new("alert_overlay"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 56.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            styles::alert_frame(alert.variant).show(ui, |ui| {
                ui.set_max_width(340.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&alert.title).color(accent).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                            alerts.dismiss();
                        }
                    });
                });
                ui.label(egui::RichText::new(&alert.message).color(colors::TEXT_PRIMARY));
            });
        });
}
