//! Shared color constants for the UI.

use egui::Color32;

/// Pink for the prev / next controls and the scroll-to-top button.
pub const COLOR_PINK: Color32 = Color32::from_rgb(236, 72, 153);

/// Darker pink for ellipses and hovered controls.
pub const COLOR_PINK_DARK: Color32 = Color32::from_rgb(219, 39, 119);

/// Light pink for the active page button, and the text of inactive ones.
pub const COLOR_PINK_LIGHT: Color32 = Color32::from_rgb(249, 168, 212);
