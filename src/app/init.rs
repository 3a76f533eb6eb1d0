use std::path::PathBuf;

use hyperview_hypercube::{Hypercube, HypercubeStats};

use super::App;
use crate::camera::OrbitCamera;
use crate::clock::Clock;
use crate::config::{ConfigError, ViewerConfig};
use crate::event::EventQueue;

impl App {
    pub fn new(
        cfg: ViewerConfig,
        config_path: Option<PathBuf>,
        watch_config: bool,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let params = cfg.projection_params()?;
        let dimension = cfg.viewer.dimension;
        let cube = Hypercube::new(dimension, params);
        let clock = Clock::new(cfg.viewer.time_scale, cfg.viewer.running);
        let geometry = cube.frame(clock.time);

        let stats = HypercubeStats::for_dimension(dimension);
        log::info!(
            "starting at {}D ({} vertices, {} edges), theme {:?}, time scale {}",
            dimension,
            stats.vertices,
            stats.edges,
            cfg.viewer.theme,
            cfg.viewer.time_scale
        );

        let config_event_rx = match (&config_path, watch_config) {
            (Some(path), true) => Some(crate::watch::watch_file(path.clone())),
            (None, true) => {
                log::warn!("--watch-config given but no config file is in use");
                None
            }
            _ => None,
        };

        Ok(Self {
            cam: OrbitCamera::new(cfg.camera.distance),
            theme: cfg.viewer.theme,
            show_grid: cfg.viewer.show_grid,
            cfg,
            config_path,
            config_event_rx,
            cube,
            geometry,
            clock,
            queue: EventQueue::new(),
            strip_layout: None,
            panel_card: None,
            hovered_dimension: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_defaults() {
        let app = App::new(ViewerConfig::default(), None, false).unwrap();
        assert_eq!(app.dimension(), 4);
        assert_eq!(app.geometry.vertices.len(), 16);
        assert!(app.clock.running);
        assert!(app.config_event_rx.is_none());
    }

    #[test]
    fn rejects_invalid_config() {
        let mut cfg = ViewerConfig::default();
        cfg.viewer.dimension = 20;
        assert!(App::new(cfg, None, false).is_err());
    }
}
