/// Animation time fed to the engine. Owned by the host; the engine only reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clock {
    pub time: f64,
    pub time_scale: f64,
    pub running: bool,
}

impl Clock {
    pub fn new(time_scale: f64, running: bool) -> Self {
        Self {
            time: 0.0,
            time_scale,
            running,
        }
    }

    /// Advances by `dt` wall seconds scaled by `time_scale`. Negative or non-finite `dt`
    /// is ignored so time never runs backwards.
    pub fn advance(&mut self, dt: f32) -> f64 {
        if self.running && dt.is_finite() && dt > 0.0 {
            self.time += dt as f64 * self.time_scale;
        }
        self.time
    }

    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }
}
