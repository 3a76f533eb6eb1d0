use raylib::prelude::Color;

pub fn blend_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    Color::new(
        ((a.r as f32) * inv + (b.r as f32) * t).round() as u8,
        ((a.g as f32) * inv + (b.g as f32) * t).round() as u8,
        ((a.b as f32) * inv + (b.b as f32) * t).round() as u8,
        ((a.a as f32) * inv + (b.a as f32) * t).round() as u8,
    )
}

pub fn scale_alpha(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    Color::new(
        color.r,
        color.g,
        color.b,
        ((color.a as f32) * factor).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints_and_midpoint() {
        let a = Color::new(0, 0, 0, 255);
        let b = Color::new(200, 100, 50, 255);
        assert_eq!(blend_color(a, b, 0.0), a);
        assert_eq!(blend_color(a, b, 1.0), b);
        assert_eq!(blend_color(a, b, 0.5), Color::new(100, 50, 25, 255));
        assert_eq!(blend_color(a, b, 7.0), b);
    }

    #[test]
    fn scale_alpha_clamps() {
        let c = Color::new(10, 20, 30, 200);
        assert_eq!(scale_alpha(c, 0.5).a, 100);
        assert_eq!(scale_alpha(c, 2.0).a, 200);
        assert_eq!(scale_alpha(c, -1.0).a, 0);
    }
}
