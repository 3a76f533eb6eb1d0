//! Colours, opacities and sizes for drawing a [`Geometry`](crate::Geometry).
//!
//! Everything here is a pure function of indices, dimension and an explicit [`Theme`].

use serde::Deserialize;

use crate::shape::FixedShape;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Light backgrounds need darker strokes to keep contrast.
    fn lightness_shift(self) -> f32 {
        match self {
            Theme::Light => -0.15,
            Theme::Dark => 0.0,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Hue wraps into `[0, 1)`; saturation, lightness and opacity are clamped to `[0, 1]`.
    pub fn from_hsl(h: f32, s: f32, l: f32, opacity: f32) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
            a: to_u8(opacity.clamp(0.0, 1.0)),
        }
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn inv_sqrt_dim(dimension: usize) -> f32 {
    1.0 / (dimension.max(1) as f32).sqrt()
}

/// Uniform scale applied to projected shapes before drawing.
pub const PROJECTED_GROUP_SCALE: f32 = 0.8;

const FIXED_SATURATION: f32 = 0.8;
const FIXED_LIGHTNESS: f32 = 0.6;
const FIXED_VERTEX_RADIUS: f32 = 0.08;
const POINT_RADIUS: f32 = 0.1;

pub fn edge_opacity(dimension: usize) -> f32 {
    (0.8 * inv_sqrt_dim(dimension)).max(0.3)
}

pub fn vertex_opacity(dimension: usize) -> f32 {
    (0.9 * inv_sqrt_dim(dimension)).max(0.5)
}

pub fn vertex_radius(dimension: usize) -> f32 {
    (0.05 * inv_sqrt_dim(dimension)).max(0.02)
}

/// Colour of edge `(a, b)` in a projected n-cube.
pub fn edge_color(a: usize, b: usize, dimension: usize, theme: Theme) -> Rgba {
    let d = dimension.max(1) as f32;
    Rgba::from_hsl(
        (a + b) as f32 * 0.03 / d,
        0.8,
        0.6 + theme.lightness_shift(),
        edge_opacity(dimension),
    )
}

/// Colour of vertex `i` in a projected n-cube.
pub fn vertex_color(i: usize, dimension: usize, theme: Theme) -> Rgba {
    let d = dimension.max(1) as f32;
    Rgba::from_hsl(
        i as f32 * 0.02 / d,
        0.9,
        0.7 + theme.lightness_shift(),
        vertex_opacity(dimension),
    )
}

pub fn fixed_vertex_color(shape: FixedShape, i: usize, theme: Theme) -> Rgba {
    let hue = match shape {
        FixedShape::Point => 0.0,
        FixedShape::Segment => 0.1,
        FixedShape::Square => 0.25 + 0.05 * i as f32,
        FixedShape::Cube => 0.08 * i as f32,
    };
    fixed_hsl(hue, theme)
}

/// `edge_index` is the position in the edge list for the shape's dimension.
pub fn fixed_edge_color(shape: FixedShape, edge_index: usize, theme: Theme) -> Rgba {
    let hue = match shape {
        FixedShape::Point => 0.0,
        FixedShape::Segment => 0.1,
        FixedShape::Square => 0.45 + 0.05 * edge_index as f32,
        FixedShape::Cube => 0.6,
    };
    fixed_hsl(hue, theme)
}

pub fn fixed_vertex_radius(shape: FixedShape) -> f32 {
    match shape {
        FixedShape::Point => POINT_RADIUS,
        _ => FIXED_VERTEX_RADIUS,
    }
}

fn fixed_hsl(hue: f32, theme: Theme) -> Rgba {
    Rgba::from_hsl(
        hue,
        FIXED_SATURATION,
        FIXED_LIGHTNESS + theme.lightness_shift(),
        1.0,
    )
}
