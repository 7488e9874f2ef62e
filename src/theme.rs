use egui::Color32;

// Color Palette
// Brand
pub const BRAND_PURPLE: Color32 = Color32::from_rgb(124, 58, 237);
pub const BRAND_PURPLE_DARK: Color32 = Color32::from_rgb(91, 33, 182);
pub const HERO_GRADIENT_TOP: Color32 = Color32::from_rgb(139, 92, 246);

// Background & Surface Colors
pub const PAGE_BG: Color32 = Color32::from_rgb(241, 245, 249);
pub const CARD_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const PLACEHOLDER_BG: Color32 = Color32::from_rgb(226, 232, 240);
pub const BADGE_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 178);

// Text Colors
pub const BUTTON_MAIN_TEXT: Color32 = Color32::from_rgb(255, 255, 255);
pub const MAIN_TEXT: Color32 = Color32::from_rgb(15, 23, 42);
pub const SECONDARY_TEXT: Color32 = Color32::from_rgb(100, 116, 139);
pub const PLACEHOLDER_ICON: Color32 = Color32::from_rgb(148, 163, 184);

// Toasts
pub const TOAST_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const TOAST_DESTRUCTIVE_BG: Color32 = Color32::from_rgb(220, 38, 38);

// UI Elements
pub const BORDER_COLOR: Color32 = Color32::from_rgb(226, 232, 240);

// Sizing & Spacing
pub const ROUNDING_CARD: f32 = 8.0;
pub const ROUNDING_BUTTON: f32 = 6.0;
pub const MIN_SIZE_BUTTON: egui::Vec2 = egui::Vec2::new(140.0, 48.0);
pub const CONTENT_MAX_WIDTH: f32 = 820.0;
pub const PREVIEW_THUMB_SIZE: egui::Vec2 = egui::Vec2::new(256.0, 144.0);
pub const HISTORY_THUMB_SIZE: egui::Vec2 = egui::Vec2::new(64.0, 48.0);
pub const TOAST_WIDTH: f32 = 320.0;

pub const BUTTON_FONT_SIZE: f32 = 16.0;

pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CARD_BG)
        .stroke(egui::Stroke::new(1.0, BORDER_COLOR))
        .rounding(ROUNDING_CARD)
        .inner_margin(egui::Margin::same(20.0))
}

pub fn primary_button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text)
            .size(BUTTON_FONT_SIZE)
            .color(BUTTON_MAIN_TEXT),
    )
    .min_size(MIN_SIZE_BUTTON)
    .fill(BRAND_PURPLE)
    .rounding(ROUNDING_BUTTON)
    .stroke(egui::Stroke::new(1.0, BRAND_PURPLE_DARK))
}
