//! Theme Module
//!
//! Color scheme and frame builders for the client:
//!
//! - Brand and neutral color constants
//! - Per-variant alert colors
//! - Frame builders for the auth card, top bar and alert overlay
//!
//! # Usage
//!
//! ```rust,ignore
//! use sitedesk::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_PRIMARY, "Sign In");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
