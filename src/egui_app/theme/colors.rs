//! Color Constants
//!
//! Blue brand accents over light gray surfaces, plus one color pair per
//! alert variant.

use eframe::egui::Color32;

use crate::egui_app::alert::AlertVariant;

/// Brand blue - buttons and links
pub const BRAND: Color32 = Color32::from_rgb(0x46, 0x5F, 0xFF);

/// Brand blue, disabled
pub const BRAND_MUTED: Color32 = Color32::from_rgb(0x9C, 0xB9, 0xFF);

/// Window background
pub const BG_PAGE: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Card and panel background
pub const BG_CARD: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Side panel on the auth layout
pub const BG_BRAND_PANEL: Color32 = Color32::from_rgb(0x16, 0x1E, 0x54);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x10, 0x18, 0x28);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Input border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xD0, 0xD5, 0xDD);

/// Disabled input background
pub const INPUT_DISABLED: Color32 = Color32::from_rgb(0xF2, 0xF4, 0xF7);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1D, 0x29, 0x39);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x66, 0x70, 0x85);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF2, 0xF4, 0xF7);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xE4, 0xE7, 0xEC);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x12, 0xB7, 0x6A);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xF0, 0x44, 0x38);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xF7, 0x90, 0x09);

/// Info color - Light blue
pub const INFO: Color32 = Color32::from_rgb(0x0B, 0xA5, 0xEC);

pub const SUCCESS_BG: Color32 = Color32::from_rgb(0xEC, 0xFD, 0xF3);
pub const ERROR_BG: Color32 = Color32::from_rgb(0xFE, 0xF3, 0xF2);
pub const WARNING_BG: Color32 = Color32::from_rgb(0xFF, 0xFA, 0xEB);
pub const INFO_BG: Color32 = Color32::from_rgb(0xF0, 0xF9, 0xFF);

/// Accent and background for an alert variant
pub fn alert_colors(variant: AlertVariant) -> (Color32, Color32) {
    match variant {
        AlertVariant::Success => (SUCCESS, SUCCESS_BG),
        AlertVariant::Error => (ERROR, ERROR_BG),
        AlertVariant::Warning => (WARNING, WARNING_BG),
        AlertVariant::Info => (INFO, INFO_BG),
    }
}
