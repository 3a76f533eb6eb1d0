use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle};

/// Measurement interface so UI layout can compute text bounds consistently.
pub trait UiTextMeasure {
    fn ui_measure_text(&self, text: &str, font_size: i32) -> i32;
}

/// Drawing interface that honors the same font overrides used for measurement.
pub trait UiTextRenderer: UiTextMeasure {
    fn ui_draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color);
}

impl UiTextMeasure for RaylibDrawHandle<'_> {
    fn ui_measure_text(&self, text: &str, font_size: i32) -> i32 {
        self.measure_text(text, font_size)
    }
}

impl<T: UiTextMeasure + ?Sized> UiTextMeasure for &T {
    fn ui_measure_text(&self, text: &str, font_size: i32) -> i32 {
        (*self).ui_measure_text(text, font_size)
    }
}

impl UiTextRenderer for RaylibDrawHandle<'_> {
    fn ui_draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.draw_text(text, x, y, font_size, color);
    }
}

/// Greedy word wrap to `max_width` pixels. A single word wider than the limit gets
/// its own line rather than being split.
pub fn wrap_text<M>(m: &M, text: &str, font_size: i32, max_width: i32) -> Vec<String>
where
    M: UiTextMeasure + ?Sized,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if m.ui_measure_text(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Fixed-pitch stand-in: every glyph is `font_size / 2` pixels wide.
    pub(crate) struct Mono;

    impl UiTextMeasure for Mono {
        fn ui_measure_text(&self, text: &str, font_size: i32) -> i32 {
            text.chars().count() as i32 * font_size / 2
        }
    }

    #[test]
    fn wraps_on_word_boundaries() {
        // 10px font -> 5px per glyph -> 20 glyphs per 100px
        let lines = wrap_text(&Mono, "the quick brown fox jumps over the lazy dog", 10, 100);
        assert_eq!(lines, vec!["the quick brown fox", "jumps over the lazy", "dog"]);
        for l in &lines {
            assert!(Mono.ui_measure_text(l, 10) <= 100);
        }
    }

    #[test]
    fn long_word_gets_own_line() {
        let lines = wrap_text(&Mono, "a hendekeract b", 10, 30);
        assert_eq!(lines, vec!["a", "hendekeract", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text(&Mono, "   ", 10, 100).is_empty());
    }
}
