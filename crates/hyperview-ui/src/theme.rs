use hyperview_hypercube::Theme;
use raylib::prelude::Color;

use crate::util::{blend_color, scale_alpha};

/// Screen-space colours and metrics for one [`Theme`].
#[derive(Clone, Copy, Debug)]
pub struct UiPalette {
    pub background: Color,
    pub grid: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub card_background: Color,
    pub card_border: Color,
    pub warning: Color,
    pub warning_background: Color,
    pub button_background: Color,
    pub button_hover_background: Color,
    pub button_active_background: Color,
    pub button_border: Color,
    pub button_text: Color,
    pub button_text_active: Color,
    pub title_font: i32,
    pub body_font: i32,
    pub small_font: i32,
    pub button_font: i32,
    pub button_padding_x: i32,
    pub button_height: i32,
    pub button_gap: i32,
    pub button_min_width: i32,
    pub padding: i32,
    pub line_gap: i32,
}

impl UiPalette {
    pub fn for_theme(theme: Theme) -> Self {
        let (background, text, text_muted) = match theme {
            Theme::Dark => (
                Color::new(14, 16, 26, 255),
                Color::new(230, 232, 240, 255),
                Color::new(150, 156, 176, 255),
            ),
            Theme::Light => (
                Color::new(245, 246, 250, 255),
                Color::new(24, 26, 36, 255),
                Color::new(96, 102, 120, 255),
            ),
        };
        let accent = Color::new(124, 92, 255, 255);
        let warning = Color::new(229, 72, 77, 255);
        let card_background = scale_alpha(blend_color(background, text, 0.06), 0.92);
        Self {
            background,
            grid: scale_alpha(text_muted, 0.25),
            text,
            text_muted,
            accent,
            card_background,
            card_border: scale_alpha(text_muted, 0.35),
            warning,
            warning_background: scale_alpha(warning, 0.14),
            button_background: card_background,
            button_hover_background: blend_color(card_background, accent, 0.25),
            button_active_background: accent,
            button_border: scale_alpha(text_muted, 0.5),
            button_text: text_muted,
            button_text_active: Color::WHITE,
            title_font: 20,
            body_font: 14,
            small_font: 12,
            button_font: 16,
            button_padding_x: 10,
            button_height: 28,
            button_gap: 6,
            button_min_width: 36,
            padding: 12,
            line_gap: 4,
        }
    }
}
