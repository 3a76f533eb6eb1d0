use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use hyperview_hypercube::project::DEFAULT_FOCAL_DISTANCE;
use hyperview_hypercube::{MAX_DIMENSION, ProjectionError, ProjectionParams, Theme};
use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "hyperview.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default)]
    pub window: Window,
    #[serde(default)]
    pub viewer: Viewer,
    #[serde(default)]
    pub camera: Camera,
    #[serde(default)]
    pub projection: Projection,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Window {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
}
fn default_width() -> i32 {
    1024
}
fn default_height() -> i32 {
    640
}
fn default_title() -> String {
    "hyperview".to_string()
}
fn default_target_fps() -> u32 {
    60
}
impl Default for Window {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            target_fps: default_target_fps(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Viewer {
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    /// Engine time units per second of wall clock.
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "d_true")]
    pub running: bool,
    #[serde(default = "d_true")]
    pub show_grid: bool,
}
fn default_dimension() -> usize {
    4
}
fn default_time_scale() -> f64 {
    0.2
}
fn d_true() -> bool {
    true
}
impl Default for Viewer {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            time_scale: default_time_scale(),
            theme: Theme::default(),
            running: true,
            show_grid: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Camera {
    /// Start position is `(1,1,1)` scaled to this length.
    #[serde(default = "default_camera_distance")]
    pub distance: f32,
    #[serde(default = "default_fov")]
    pub fov: f32,
    /// 2.0 is one revolution every 30 seconds.
    #[serde(default = "default_auto_rotate_speed")]
    pub auto_rotate_speed: f32,
}
fn default_camera_distance() -> f32 {
    // |(5, 5, 5)|
    75.0f32.sqrt()
}
fn default_fov() -> f32 {
    50.0
}
fn default_auto_rotate_speed() -> f32 {
    2.0
}
impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: default_camera_distance(),
            fov: default_fov(),
            auto_rotate_speed: default_auto_rotate_speed(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Projection {
    #[serde(default = "default_focal_distance")]
    pub focal_distance: f64,
}
fn default_focal_distance() -> f64 {
    DEFAULT_FOCAL_DISTANCE
}
impl Default for Projection {
    fn default() -> Self {
        Self {
            focal_distance: default_focal_distance(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    DimensionOutOfRange(usize),
    BadTimeScale(f64),
    BadWindowSize { width: i32, height: i32 },
    BadCamera(&'static str),
    Projection(ProjectionError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::DimensionOutOfRange(d) => {
                write!(f, "viewer.dimension {} is outside 0..={}", d, MAX_DIMENSION)
            }
            ConfigError::BadTimeScale(s) => {
                write!(f, "viewer.time_scale must be finite and >= 0 (got {})", s)
            }
            ConfigError::BadWindowSize { width, height } => {
                write!(f, "window size {}x{} must be positive", width, height)
            }
            ConfigError::BadCamera(msg) => write!(f, "camera: {}", msg),
            ConfigError::Projection(e) => write!(f, "projection: {}", e),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Projection(e) => Some(e),
            _ => None,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: ViewerConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Explicit path if given, else [`DEFAULT_CONFIG_FILE`] when present, else defaults.
    /// Returns the path actually read so it can be watched.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), Box<dyn Error>> {
        if let Some(path) = explicit {
            return Ok((Self::from_path(path)?, Some(path.to_path_buf())));
        }
        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            let cfg = Self::from_path(&fallback)?;
            return Ok((cfg, Some(fallback)));
        }
        log::debug!("no {} found; using defaults", DEFAULT_CONFIG_FILE);
        Ok((Self::default(), None))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewer.dimension > MAX_DIMENSION {
            return Err(ConfigError::DimensionOutOfRange(self.viewer.dimension));
        }
        if !self.viewer.time_scale.is_finite() || self.viewer.time_scale < 0.0 {
            return Err(ConfigError::BadTimeScale(self.viewer.time_scale));
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::BadWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if !(self.camera.distance > 0.0) {
            return Err(ConfigError::BadCamera("distance must be > 0"));
        }
        if !(self.camera.fov > 0.0 && self.camera.fov < 180.0) {
            return Err(ConfigError::BadCamera("fov must be in (0, 180)"));
        }
        self.projection_params()?;
        Ok(())
    }

    pub fn projection_params(&self) -> Result<ProjectionParams, ConfigError> {
        ProjectionParams::new(self.projection.focal_distance, MAX_DIMENSION)
            .map_err(ConfigError::Projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = ViewerConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ViewerConfig::default());
        assert_eq!(cfg.viewer.dimension, 4);
        assert_eq!(cfg.viewer.time_scale, 0.2);
        assert_eq!(cfg.projection.focal_distance, 4.0);
        assert_eq!(cfg.viewer.theme, Theme::Dark);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = ViewerConfig::from_toml_str(
            r#"
            [viewer]
            dimension = 7
            theme = "light"

            [camera]
            fov = 60.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.viewer.dimension, 7);
        assert_eq!(cfg.viewer.theme, Theme::Light);
        assert!(cfg.viewer.running);
        assert_eq!(cfg.camera.fov, 60.0);
        assert_eq!(cfg.camera.auto_rotate_speed, 2.0);
        assert_eq!(cfg.window.width, 1024);
    }

    #[test]
    fn rejects_out_of_range_dimension() {
        let err = ViewerConfig::from_toml_str("[viewer]\ndimension = 12\n").unwrap_err();
        assert!(err.to_string().contains("outside 0..=11"));
    }

    #[test]
    fn rejects_focal_distance_that_breaks_projection() {
        let err = ViewerConfig::from_toml_str("[projection]\nfocal_distance = 2.0\n").unwrap_err();
        assert!(err.to_string().starts_with("projection:"));
    }

    #[test]
    fn rejects_negative_time_scale() {
        assert!(ViewerConfig::from_toml_str("[viewer]\ntime_scale = -1.0\n").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ViewerConfig::from_toml_str("[viewer\n").is_err());
    }

    #[test]
    fn loads_explicit_path() {
        let path = std::env::temp_dir().join(format!("hyperview-cfg-{}.toml", std::process::id()));
        fs::write(&path, "[viewer]\ndimension = 9\n").unwrap();
        let (cfg, used) = ViewerConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.viewer.dimension, 9);
        assert_eq!(used.as_deref(), Some(path.as_path()));
        let _ = fs::remove_file(&path);
    }
}
