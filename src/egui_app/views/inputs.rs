//! Rendering for [`InputField`]

use eframe::egui;

use crate::egui_app::forms::{InputField, InputKind};
use crate::egui_app::theme::colors;

/// Label with a red asterisk for required fields
pub fn field_label(ui: &mut egui::Ui, label: &str, required: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        ui.label(egui::RichText::new(label).color(colors::TEXT_PRIMARY).strong());
        if required {
            ui.label(egui::RichText::new("*").color(colors::ERROR));
        }
    });
}

/// Labelled text box with the field's hint, error and visibility toggle
pub fn input_field(ui: &mut egui::Ui, label: &str, field: &mut InputField) -> egui::Response {
    field_label(ui, label, field.rules.required);

    let border = if field.has_error() {
        colors::ERROR
    } else if field.success {
        colors::SUCCESS
    } else {
        colors::INPUT_BORDER
    };

    let response = ui
        .horizontal(|ui| {
            let toggle_width = if field.kind == InputKind::Password { 56.0 } else { 0.0 };
            let width = (ui.available_width() - toggle_width).max(120.0);

            let masked = field.masks_input();
            let disabled = field.disabled;
            let edit = egui::TextEdit::singleline(&mut field.value)
                .hint_text(field.placeholder)
                .password(masked)
                .interactive(!disabled)
                .text_color(colors::TEXT_PRIMARY)
                .background_color(if disabled {
                    colors::INPUT_DISABLED
                } else {
                    colors::INPUT_BG
                })
                .margin(egui::Margin::symmetric(10, 8));

            let response = egui::Frame::new()
                .stroke(egui::Stroke::new(1.0, border))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| ui.add_sized([width, 36.0], edit))
                .inner;

            if field.kind == InputKind::Password {
                let label = if field.is_revealed() { "Hide" } else { "Show" };
                if ui.add(egui::Button::new(label).frame(false)).clicked() {
                    field.toggle_visibility();
                }
            }
            response
        })
        .inner;

    if let Some(ref error) = field.error {
        ui.label(egui::RichText::new(error).color(colors::ERROR).small());
    } else if let Some(ref hint) = field.hint {
        ui.label(egui::RichText::new(hint).color(colors::TEXT_SECONDARY).small());
    }
    ui.add_space(10.0);

    response
}
