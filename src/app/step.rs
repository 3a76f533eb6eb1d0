use hyperview_hypercube::FIRST_PROJECTED_DIMENSION;
use raylib::prelude::*;

use super::App;
use crate::event::Event;

impl App {
    pub fn step(&mut self, rl: &RaylibHandle, dt: f32) {
        self.process_config_file_events();
        self.collect_input(rl);
        let drag_allowed = !self.cursor_over_ui(rl.get_mouse_position());
        self.cam.update(rl, drag_allowed);
        self.advance(dt);
    }

    /// Input-independent part of a frame: events, clock, auto-rotation, new snapshot.
    pub fn advance(&mut self, dt: f32) {
        self.queue.emit_now(Event::Tick);
        self.drain_events();

        let time = self.clock.advance(dt);
        if self.dimension() >= FIRST_PROJECTED_DIMENSION {
            self.cam.advance_auto(dt, self.cfg.camera.auto_rotate_speed);
        }
        if self.clock.running {
            self.geometry = self.cube.frame(time);
        }
        self.queue.advance_tick();
    }

    pub(super) fn drain_events(&mut self) {
        while let Some(env) = self.queue.pop_ready() {
            self.handle_event(env);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::ViewerConfig;

    #[test]
    fn advance_moves_time_and_geometry() {
        let mut app = App::new(ViewerConfig::default(), None, false).unwrap();
        let start = app.geometry.vertices.clone();
        app.advance(1.0);
        assert!((app.clock.time - 0.2).abs() < 1e-9);
        assert_ne!(app.geometry.vertices, start);
        assert_eq!(app.queue.now, 1);
    }

    #[test]
    fn paused_frames_keep_snapshot() {
        let mut cfg = ViewerConfig::default();
        cfg.viewer.running = false;
        let mut app = App::new(cfg, None, false).unwrap();
        let start = app.geometry.vertices.clone();
        app.advance(1.0);
        assert_eq!(app.clock.time, 0.0);
        assert_eq!(app.geometry.vertices, start);
    }

    #[test]
    fn camera_only_auto_rotates_from_four_dimensions() {
        let mut cfg = ViewerConfig::default();
        cfg.viewer.dimension = 3;
        let mut app = App::new(cfg, None, false).unwrap();
        let yaw = app.cam.yaw;
        app.advance(1.0);
        assert_eq!(app.cam.yaw, yaw);

        let mut app = App::new(ViewerConfig::default(), None, false).unwrap();
        let yaw = app.cam.yaw;
        app.advance(1.0);
        assert_ne!(app.cam.yaw, yaw);
    }
}
