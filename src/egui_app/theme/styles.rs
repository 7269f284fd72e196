//! Theme Styling Functions
//!
//! Helpers that apply the color scheme consistently across the views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors;
use crate::egui_app::alert::AlertVariant;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();

    // Window styling
    style.visuals.window_fill = colors::BG_CARD;
    style.visuals.window_stroke = Stroke::new(1.0, colors::SEPARATOR);

    // Panel styling
    style.visuals.panel_fill = colors::BG_PAGE;

    // Widget styling
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);
    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors::INPUT_BORDER);
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors::BRAND_MUTED);
    style.visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors::BRAND);
    style.visuals.extreme_bg_color = colors::INPUT_BG;

    // Selection color
    style.visuals.selection.bg_fill = colors::BRAND_MUTED;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::BRAND);
    style.visuals.hyperlink_color = colors::BRAND;

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the page background
pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_PAGE)
        .inner_margin(egui::Margin::same(0))
}

/// Create a frame style for the brand panel beside the auth forms
pub fn brand_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_BRAND_PANEL)
        .inner_margin(egui::Margin::same(32))
}

/// Create a frame for the form card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_CARD)
        .stroke(Stroke::new(1.0, colors::SEPARATOR))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(28))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 8,
            spread: 0,
            color: Color32::from_black_alpha(20),
        })
}

/// Create a frame for the alert overlay
pub fn alert_frame(variant: AlertVariant) -> egui::Frame {
    let (accent, background) = colors::alert_colors(variant);
    egui::Frame::new()
        .fill(background)
        .stroke(Stroke::new(1.0, accent))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(16, 12))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(40),
        })
}

/// Brand colored button
pub fn primary_button(text: &str, enabled: bool) -> egui::Button<'static> {
    let fill = if enabled {
        colors::BRAND
    } else {
        colors::BRAND_MUTED
    };
    egui::Button::new(egui::RichText::new(text.to_string()).color(Color32::WHITE).strong())
        .fill(fill)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(8))
        .min_size(egui::vec2(0.0, 40.0))
}

/// Text-only button styled as a link
pub fn link_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::BRAND))
        .frame(false)
}
