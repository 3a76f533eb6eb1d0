//! Side card describing the selected dimension, plus the performance warning shown
//! for projected dimensions.

use hyperview_hypercube::HypercubeStats;
use hyperview_hypercube::catalog::DimensionInfo;
use raylib::prelude::RaylibDraw;

use crate::text::{UiTextMeasure, UiTextRenderer, wrap_text};
use crate::theme::UiPalette;
use crate::types::IRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRole {
    Title,
    Heading,
    Body,
    Muted,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font: i32,
    pub role: LineRole,
}

#[derive(Clone, Debug)]
pub struct PanelLayout {
    pub card: IRect,
    /// Present only for dimensions flagged heavy.
    pub warning: Option<IRect>,
    pub lines: Vec<PanelLine>,
}

impl PanelLayout {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }
}

pub struct InfoPanel;

struct Cursor<'a, M: ?Sized> {
    m: &'a M,
    x: i32,
    y: i32,
    width: i32,
    gap: i32,
    lines: Vec<PanelLine>,
}

impl<M: UiTextMeasure + ?Sized> Cursor<'_, M> {
    fn push(&mut self, text: &str, font: i32, role: LineRole) {
        for line in wrap_text(self.m, text, font, self.width) {
            self.lines.push(PanelLine {
                text: line,
                x: self.x,
                y: self.y,
                font,
                role,
            });
            self.y += font + self.gap;
        }
    }

    fn space(&mut self, px: i32) {
        self.y += px;
    }
}

impl InfoPanel {
    pub fn layout<M>(
        m: &M,
        palette: &UiPalette,
        origin: (i32, i32),
        width: i32,
        info: &DimensionInfo,
        stats: &HypercubeStats,
        running: bool,
    ) -> PanelLayout
    where
        M: UiTextMeasure + ?Sized,
    {
        let pad = palette.padding;
        let inner_w = (width - pad * 2).max(1);
        let mut cur = Cursor {
            m,
            x: origin.0 + pad,
            y: origin.1 + pad,
            width: inner_w,
            gap: palette.line_gap,
            lines: Vec::new(),
        };

        let mut warning = None;
        if stats.is_heavy() {
            let top = cur.y;
            cur.push("Performance warning", palette.body_font, LineRole::Warning);
            cur.push(
                &format!(
                    "{}D hypercubes generate {} vertices and {} edges with complex n-dimensional rotations.",
                    stats.dimension, stats.vertices, stats.edges
                ),
                palette.small_font,
                LineRole::Body,
            );
            cur.push(
                "Recommended: use dimensions <= 5D on mobile devices",
                palette.small_font,
                LineRole::Muted,
            );
            warning = Some(IRect::new(
                origin.0 + pad / 2,
                top - pad / 2,
                width - pad,
                cur.y - top + pad / 2,
            ));
            cur.space(pad);
        }

        cur.push(
            &format!("{} {}", info.label, info.name),
            palette.title_font,
            LineRole::Title,
        );
        cur.push(&info.description, palette.body_font, LineRole::Body);
        cur.space(pad / 2);

        let sections: [(&str, &[String]); 3] = [
            ("Properties", info.properties.as_slice()),
            ("Geometric", info.geometric.as_slice()),
            ("Topological", info.topological.as_slice()),
        ];
        for (heading, items) in sections {
            cur.push(heading, palette.body_font, LineRole::Heading);
            for item in items {
                cur.push(&format!("- {}", item), palette.small_font, LineRole::Muted);
            }
            cur.space(pad / 2);
        }

        if stats.is_heavy() {
            cur.push(
                &format!(
                    "{}D rotation active: {} rotation planes, {} animated",
                    stats.dimension, stats.rotation_planes, stats.applied_planes
                ),
                palette.small_font,
                LineRole::Body,
            );
        }
        if !running {
            cur.push("Paused (P to resume)", palette.small_font, LineRole::Warning);
        }

        let card = IRect::new(origin.0, origin.1, width, cur.y - origin.1 + pad);
        PanelLayout {
            card,
            warning,
            lines: cur.lines,
        }
    }

    pub fn draw<D>(d: &mut D, palette: &UiPalette, layout: &PanelLayout)
    where
        D: RaylibDraw + UiTextRenderer,
    {
        let c = layout.card;
        d.draw_rectangle(c.x, c.y, c.w, c.h, palette.card_background);
        d.draw_rectangle_lines(c.x, c.y, c.w, c.h, palette.card_border);
        if let Some(w) = layout.warning {
            d.draw_rectangle(w.x, w.y, w.w, w.h, palette.warning_background);
            d.draw_rectangle_lines(w.x, w.y, w.w, w.h, palette.warning);
        }
        for line in &layout.lines {
            let color = match line.role {
                LineRole::Title => palette.text,
                LineRole::Heading => palette.accent,
                LineRole::Body => palette.text,
                LineRole::Muted => palette.text_muted,
                LineRole::Warning => palette.warning,
            };
            d.ui_draw_text(&line.text, line.x, line.y, line.font, color);
        }
    }
}
