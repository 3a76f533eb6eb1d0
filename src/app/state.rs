use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use hyperview_hypercube::{Geometry, Hypercube, Theme};
use hyperview_ui::{IRect, StripLayout};

use crate::camera::OrbitCamera;
use crate::clock::Clock;
use crate::config::ViewerConfig;
use crate::event::EventQueue;

pub struct App {
    pub cfg: ViewerConfig,
    pub config_path: Option<PathBuf>,
    pub config_event_rx: Option<Receiver<()>>,

    pub cube: Hypercube,
    /// Snapshot drawn this frame; replaced wholesale by `step`.
    pub geometry: Geometry,
    pub clock: Clock,
    pub cam: OrbitCamera,
    pub theme: Theme,
    pub show_grid: bool,

    pub queue: EventQueue,

    // Hit regions cached from the last rendered frame
    pub strip_layout: Option<StripLayout>,
    pub panel_card: Option<IRect>,
    pub hovered_dimension: Option<usize>,
}

impl App {
    #[inline]
    pub fn dimension(&self) -> usize {
        self.cube.dimension()
    }
}
