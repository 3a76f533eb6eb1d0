//! Row of "0D".."11D" buttons that selects the active dimension.

use raylib::prelude::{RaylibDraw, Vector2};

use crate::text::{UiTextMeasure, UiTextRenderer};
use crate::theme::UiPalette;
use crate::types::IRect;

#[derive(Debug, Clone)]
pub struct DimensionSlot {
    pub dimension: usize,
    pub label: String,
    pub bounds: IRect,
    pub text_pos: Vector2,
}

impl DimensionSlot {
    #[inline]
    pub fn contains(&self, point: Vector2) -> bool {
        self.bounds.contains(point)
    }
}

#[derive(Debug, Clone)]
pub struct StripLayout {
    pub strip: IRect,
    pub slots: Vec<DimensionSlot>,
}

impl StripLayout {
    /// Dimension under `cursor`, if any.
    #[inline]
    pub fn hovered(&self, cursor: Vector2) -> Option<usize> {
        self.slots
            .iter()
            .find(|slot| slot.contains(cursor))
            .map(|slot| slot.dimension)
    }
}

pub struct DimensionStrip;

impl DimensionStrip {
    /// Lays buttons out left to right from `origin`. Buttons shrink towards
    /// `button_min_width` when the row would exceed `max_width`; any that still do not
    /// fit are dropped from the end.
    pub fn layout<D>(
        d: &D,
        palette: &UiPalette,
        origin: (i32, i32),
        max_width: i32,
        dimensions: std::ops::RangeInclusive<usize>,
    ) -> StripLayout
    where
        D: UiTextMeasure + ?Sized,
    {
        let font = palette.button_font.max(1);
        let labels: Vec<(usize, String)> = dimensions.map(|dim| (dim, format!("{}D", dim))).collect();
        let strip = IRect::new(origin.0, origin.1, max_width.max(0), palette.button_height);
        if labels.is_empty() || strip.w == 0 {
            return StripLayout {
                strip,
                slots: Vec::new(),
            };
        }

        let mut widths: Vec<i32> = labels
            .iter()
            .map(|(_, label)| {
                (d.ui_measure_text(label, font) + palette.button_padding_x * 2)
                    .max(palette.button_min_width)
            })
            .collect();
        let gap_total = palette.button_gap * (labels.len().saturating_sub(1) as i32);
        let desired = widths.iter().sum::<i32>() + gap_total;
        if desired > strip.w {
            let base: i32 = widths.iter().sum();
            let scale = ((strip.w - gap_total).max(0) as f32 / base as f32).min(1.0);
            for w in widths.iter_mut() {
                *w = ((*w as f32 * scale).floor() as i32).max(palette.button_min_width);
            }
        }

        let mut slots = Vec::with_capacity(labels.len());
        let mut x = strip.x;
        for ((dimension, label), width) in labels.into_iter().zip(widths) {
            if x + width > strip.x + strip.w {
                break;
            }
            let bounds = IRect::new(x, strip.y, width, strip.h);
            let text_w = d.ui_measure_text(&label, font);
            let text_pos = Vector2::new(
                (x + (width - text_w) / 2) as f32,
                (strip.y + (strip.h - font) / 2) as f32,
            );
            slots.push(DimensionSlot {
                dimension,
                label,
                bounds,
                text_pos,
            });
            x += width + palette.button_gap;
        }

        StripLayout { strip, slots }
    }

    pub fn draw<D>(
        d: &mut D,
        palette: &UiPalette,
        layout: &StripLayout,
        selected: usize,
        hovered: Option<usize>,
    ) where
        D: RaylibDraw + UiTextRenderer,
    {
        for slot in &layout.slots {
            let (bg, text) = if slot.dimension == selected {
                (palette.button_active_background, palette.button_text_active)
            } else if hovered == Some(slot.dimension) {
                (palette.button_hover_background, palette.text)
            } else {
                (palette.button_background, palette.button_text)
            };
            d.draw_rectangle(slot.bounds.x, slot.bounds.y, slot.bounds.w, slot.bounds.h, bg);
            d.draw_rectangle_lines(
                slot.bounds.x,
                slot.bounds.y,
                slot.bounds.w,
                slot.bounds.h,
                palette.button_border,
            );
            d.ui_draw_text(
                &slot.label,
                slot.text_pos.x as i32,
                slot.text_pos.y as i32,
                palette.button_font,
                text,
            );
        }
    }
}
