use hyperview_hypercube::{HypercubeStats, MAX_DIMENSION, catalog};
use hyperview_ui::{DimensionStrip, InfoPanel, UiPalette, UiTextRenderer};
use raylib::prelude::*;

use super::App;

/// Floor grid sits below every shape the engine produces.
const GRID_Y: f32 = -2.5;
const GRID_HALF_LINES: i32 = 10;
const PANEL_WIDTH: i32 = 360;
const HELP_TEXT: &str = "0-9 / Up / Down: dimension   T: theme   P: pause   G: grid   R: auto-rotate   drag: orbit   wheel: zoom";

fn draw_floor_grid<D: RaylibDraw3D>(d3: &mut D, color: Color) {
    let extent = GRID_HALF_LINES as f32;
    for i in -GRID_HALF_LINES..=GRID_HALF_LINES {
        let t = i as f32;
        d3.draw_line_3D(
            Vector3::new(t, GRID_Y, -extent),
            Vector3::new(t, GRID_Y, extent),
            color,
        );
        d3.draw_line_3D(
            Vector3::new(-extent, GRID_Y, t),
            Vector3::new(extent, GRID_Y, t),
            color,
        );
    }
}

impl App {
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let palette = UiPalette::for_theme(self.theme);
        let camera = self.cam.to_camera3d(self.cfg.camera.fov);
        let screen_w = rl.get_screen_width();
        let screen_h = rl.get_screen_height();
        let dimension = self.dimension();

        let mut d = rl.begin_drawing(thread);
        d.clear_background(palette.background);
        {
            let mut d3 = d.begin_mode3D(camera);
            if self.show_grid {
                draw_floor_grid(&mut d3, palette.grid);
            }
            hyperview_render_raylib::draw_geometry(&mut d3, &self.geometry, self.theme);
        }

        let pad = palette.padding;
        let strip = DimensionStrip::layout(
            &d,
            &palette,
            (pad, pad),
            screen_w - pad * 2,
            0..=MAX_DIMENSION,
        );
        DimensionStrip::draw(&mut d, &palette, &strip, dimension, self.hovered_dimension);

        let info = catalog::info(dimension);
        let stats = HypercubeStats::for_dimension(dimension);
        let panel = InfoPanel::layout(
            &d,
            &palette,
            (pad, strip.strip.bottom() + pad),
            PANEL_WIDTH.min(screen_w - pad * 2),
            &info,
            &stats,
            self.clock.running,
        );
        InfoPanel::draw(&mut d, &palette, &panel);

        let help_y = screen_h - palette.small_font - pad;
        d.ui_draw_text(HELP_TEXT, pad, help_y, palette.small_font, palette.text_muted);
        d.draw_fps(screen_w - 90, help_y - palette.small_font - palette.line_gap);

        self.strip_layout = Some(strip);
        self.panel_card = Some(panel.card);
    }
}
