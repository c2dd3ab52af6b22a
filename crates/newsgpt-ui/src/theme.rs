//! Light theme matching the NewsGPT web client

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_MUTED: Color32 = Color32::from_rgb(244, 244, 245);
pub const BORDER: Color32 = Color32::from_rgb(228, 228, 231);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(9, 9, 11);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(113, 113, 122);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(24, 24, 27);
pub const USER_TEXT: Color32 = Color32::from_rgb(250, 250, 250);
pub const ASSISTANT_BUBBLE: Color32 = Color32::from_rgb(244, 244, 245);
pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
pub const ERROR_BG: Color32 = Color32::from_rgb(254, 226, 226);

pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_PRIMARY;
    style.visuals.extreme_bg_color = BG_PRIMARY;

    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.hovered.bg_fill = BG_MUTED;
    style.visuals.widgets.active.bg_fill = USER_BUBBLE;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, USER_TEXT);

    style.spacing.item_spacing = Vec2::new(8.0, 8.0);

    ctx.set_style(style);
}
