use hyperview_hypercube::{HypercubeStats, MAX_DIMENSION};
use raylib::prelude::*;

use super::App;
use crate::config::ViewerConfig;
use crate::event::{Event, EventEnvelope};

const DIGIT_KEYS: [(KeyboardKey, usize); 10] = [
    (KeyboardKey::KEY_ZERO, 0),
    (KeyboardKey::KEY_ONE, 1),
    (KeyboardKey::KEY_TWO, 2),
    (KeyboardKey::KEY_THREE, 3),
    (KeyboardKey::KEY_FOUR, 4),
    (KeyboardKey::KEY_FIVE, 5),
    (KeyboardKey::KEY_SIX, 6),
    (KeyboardKey::KEY_SEVEN, 7),
    (KeyboardKey::KEY_EIGHT, 8),
    (KeyboardKey::KEY_NINE, 9),
];

/// Warning logged when a dimension that rotates and projects every frame is selected.
fn frame_cost_warning(stats: &HypercubeStats) -> Option<String> {
    stats.is_heavy().then(|| {
        format!(
            "{}D draws {} vertices and {} edges per frame",
            stats.dimension, stats.vertices, stats.edges
        )
    })
}

impl App {
    /// Turns this frame's keyboard and mouse input into queued events.
    pub(super) fn collect_input(&mut self, rl: &RaylibHandle) {
        for (key, dimension) in DIGIT_KEYS {
            if rl.is_key_pressed(key) {
                self.queue.emit_now(Event::DimensionSelected { dimension });
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_UP)
            || rl.is_key_pressed(KeyboardKey::KEY_EQUAL)
            || rl.is_key_pressed(KeyboardKey::KEY_KP_ADD)
        {
            self.queue.emit_now(Event::DimensionStepped { delta: 1 });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_DOWN)
            || rl.is_key_pressed(KeyboardKey::KEY_MINUS)
            || rl.is_key_pressed(KeyboardKey::KEY_KP_SUBTRACT)
        {
            self.queue.emit_now(Event::DimensionStepped { delta: -1 });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_T) {
            self.queue.emit_now(Event::ThemeToggled);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_P) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            self.queue.emit_now(Event::PauseToggled);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_G) {
            self.queue.emit_now(Event::GridToggled);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            self.queue.emit_now(Event::AutoRotateToggled);
        }

        let cursor = rl.get_mouse_position();
        self.hovered_dimension = self
            .strip_layout
            .as_ref()
            .and_then(|layout| layout.hovered(cursor));
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(dimension) = self.hovered_dimension {
                self.queue.emit_now(Event::DimensionSelected { dimension });
            }
        }
    }

    /// True when the cursor is over UI, so a drag there should not orbit.
    pub(super) fn cursor_over_ui(&self, cursor: Vector2) -> bool {
        self.strip_layout
            .as_ref()
            .is_some_and(|l| l.strip.contains(cursor))
            || self.panel_card.is_some_and(|c| c.contains(cursor))
    }

    pub(super) fn handle_event(&mut self, env: EventEnvelope) {
        Self::log_event(self.queue.now, &env.kind);
        match env.kind {
            Event::Tick => {}
            Event::DimensionSelected { dimension } => self.select_dimension(dimension),
            Event::DimensionStepped { delta } => {
                let target = self.dimension() as i64 + delta as i64;
                if (0..=MAX_DIMENSION as i64).contains(&target) {
                    self.select_dimension(target as usize);
                }
            }
            Event::ThemeToggled => {
                self.theme = self.theme.toggled();
                log::info!("theme: {:?}", self.theme);
            }
            Event::PauseToggled => {
                let running = self.clock.toggle();
                log::info!("animation {}", if running { "resumed" } else { "paused" });
            }
            Event::GridToggled => {
                self.show_grid = !self.show_grid;
            }
            Event::AutoRotateToggled => {
                self.cam.auto_rotate = !self.cam.auto_rotate;
            }
            Event::ConfigReloaded(cfg) => self.apply_config(*cfg),
        }
    }

    /// The only place the engine cache is invalidated. No-op for the current dimension.
    fn select_dimension(&mut self, dimension: usize) {
        if dimension > MAX_DIMENSION {
            log::warn!("ignoring dimension {} (max {})", dimension, MAX_DIMENSION);
            return;
        }
        if !self.cube.set_dimension(dimension) {
            return;
        }
        self.geometry = self.cube.frame(self.clock.time);
        let stats = HypercubeStats::for_dimension(dimension);
        log::info!(
            "dimension {}D: {} vertices, {} edges",
            dimension,
            stats.vertices,
            stats.edges
        );
        if let Some(msg) = frame_cost_warning(&stats) {
            log::warn!("{}", msg);
        }
    }

    /// Takes everything except the current dimension, which stays under user control.
    fn apply_config(&mut self, cfg: ViewerConfig) {
        let params = match cfg.projection_params() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("config reload rejected: {}", e);
                return;
            }
        };
        self.cube.set_params(params);
        self.clock.time_scale = cfg.viewer.time_scale;
        self.clock.running = cfg.viewer.running;
        self.theme = cfg.viewer.theme;
        self.show_grid = cfg.viewer.show_grid;
        self.cam.set_distance(cfg.camera.distance);
        self.geometry = self.cube.frame(self.clock.time);
        self.cfg = cfg;
        log::info!("config applied");
    }

    pub(super) fn log_event(tick: u64, ev: &Event) {
        use crate::event::Event as E;
        match ev {
            E::Tick => {
                log::trace!(target: "events", "[tick {}] Tick", tick);
            }
            E::DimensionSelected { dimension } => {
                log::info!(target: "events", "[tick {}] DimensionSelected dimension={}", tick, dimension);
            }
            E::DimensionStepped { delta } => {
                log::info!(target: "events", "[tick {}] DimensionStepped delta={}", tick, delta);
            }
            E::ThemeToggled => {
                log::info!(target: "events", "[tick {}] ThemeToggled", tick);
            }
            E::PauseToggled => {
                log::info!(target: "events", "[tick {}] PauseToggled", tick);
            }
            E::GridToggled => {
                log::info!(target: "events", "[tick {}] GridToggled", tick);
            }
            E::AutoRotateToggled => {
                log::info!(target: "events", "[tick {}] AutoRotateToggled", tick);
            }
            E::ConfigReloaded(_) => {
                log::info!(target: "events", "[tick {}] ConfigReloaded", tick);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hyperview_hypercube::Theme;

    use super::*;

    fn app() -> App {
        App::new(ViewerConfig::default(), None, false).unwrap()
    }

    fn send(app: &mut App, kind: Event) {
        app.queue.emit_now(kind);
        app.drain_events();
    }

    #[test]
    fn selecting_same_dimension_keeps_cache() {
        let mut app = app();
        let before = Arc::clone(app.cube.edges());
        send(&mut app, Event::DimensionSelected { dimension: 4 });
        assert!(Arc::ptr_eq(&before, app.cube.edges()));
        send(&mut app, Event::DimensionSelected { dimension: 6 });
        assert_eq!(app.dimension(), 6);
        assert_eq!(app.geometry.vertices.len(), 64);
        assert_eq!(app.geometry.edges.len(), 192);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut app = app();
        send(&mut app, Event::DimensionSelected { dimension: 12 });
        assert_eq!(app.dimension(), 4);
    }

    #[test]
    fn stepping_clamps_at_both_ends() {
        let mut app = app();
        send(&mut app, Event::DimensionSelected { dimension: 11 });
        send(&mut app, Event::DimensionStepped { delta: 1 });
        assert_eq!(app.dimension(), 11);
        send(&mut app, Event::DimensionSelected { dimension: 0 });
        send(&mut app, Event::DimensionStepped { delta: -1 });
        assert_eq!(app.dimension(), 0);
        send(&mut app, Event::DimensionStepped { delta: 1 });
        assert_eq!(app.dimension(), 1);
    }

    #[test]
    fn toggles_flip_state() {
        let mut app = app();
        send(&mut app, Event::ThemeToggled);
        assert_eq!(app.theme, Theme::Light);
        send(&mut app, Event::PauseToggled);
        assert!(!app.clock.running);
        send(&mut app, Event::GridToggled);
        assert!(!app.show_grid);
        send(&mut app, Event::AutoRotateToggled);
        assert!(!app.cam.auto_rotate);
    }

    #[test]
    fn heavy_dimensions_get_a_cost_warning() {
        assert!(frame_cost_warning(&HypercubeStats::for_dimension(3)).is_none());
        assert_eq!(
            frame_cost_warning(&HypercubeStats::for_dimension(4)).as_deref(),
            Some("4D draws 16 vertices and 32 edges per frame")
        );
        assert!(frame_cost_warning(&HypercubeStats::for_dimension(11)).is_some());
    }

    #[test]
    fn config_reload_clamps_camera_distance() {
        let mut app = app();
        let mut cfg = ViewerConfig::default();
        cfg.camera.distance = 1000.0;
        send(&mut app, Event::ConfigReloaded(Box::new(cfg)));
        let far = app.cam.distance;
        assert!(far < 1000.0);
        let mut cfg = ViewerConfig::default();
        cfg.camera.distance = 0.01;
        send(&mut app, Event::ConfigReloaded(Box::new(cfg)));
        assert!(app.cam.distance > 0.01);
        assert!(app.cam.distance < far);
    }

    #[test]
    fn config_reload_keeps_current_dimension() {
        let mut app = app();
        send(&mut app, Event::DimensionSelected { dimension: 7 });
        let mut cfg = ViewerConfig::default();
        cfg.viewer.dimension = 2;
        cfg.viewer.time_scale = 1.0;
        cfg.viewer.theme = Theme::Light;
        send(&mut app, Event::ConfigReloaded(Box::new(cfg)));
        assert_eq!(app.dimension(), 7);
        assert_eq!(app.clock.time_scale, 1.0);
        assert_eq!(app.theme, Theme::Light);
    }
}
