use raylib::prelude::*;

const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 40.0;
const PITCH_LIMIT: f32 = 89.0;
/// Degrees per second for each unit of auto-rotate speed.
const AUTO_ROTATE_DEG_PER_UNIT: f32 = 6.0;

/// Camera that circles the origin, driven by mouse drag, wheel and optional auto-rotation.
pub struct OrbitCamera {
    pub yaw: f32,   // degrees
    pub pitch: f32, // degrees
    pub distance: f32,
    pub mouse_sensitivity: f32,
    pub zoom_step: f32,
    pub auto_rotate: bool,
}

impl OrbitCamera {
    /// Starts on the `(1, 1, 1)` diagonal at `distance`.
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: 45.0,
            pitch: (1.0f32 / 2.0f32.sqrt()).atan().to_degrees(),
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            mouse_sensitivity: 0.3,
            zoom_step: 0.9,
            auto_rotate: true,
        }
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn position(&self) -> Vector3 {
        let yaw_rad = self.yaw.to_radians();
        let pitch_rad = self.pitch.to_radians();
        Vector3::new(
            yaw_rad.cos() * pitch_rad.cos(),
            pitch_rad.sin(),
            yaw_rad.sin() * pitch_rad.cos(),
        ) * self.distance
    }

    pub fn to_camera3d(&self, fov: f32) -> Camera3D {
        Camera3D::perspective(
            self.position(),
            Vector3::zero(),
            Vector3::new(0.0, 1.0, 0.0),
            fov,
        )
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw = (self.yaw + dx * self.mouse_sensitivity).rem_euclid(360.0);
        self.pitch = (self.pitch + dy * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive `wheel` moves closer.
    pub fn zoom(&mut self, wheel: f32) {
        if wheel == 0.0 || !wheel.is_finite() {
            return;
        }
        let factor = self.zoom_step.powf(wheel);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn advance_auto(&mut self, dt: f32, speed: f32) {
        if self.auto_rotate && dt > 0.0 {
            self.yaw = (self.yaw + speed * AUTO_ROTATE_DEG_PER_UNIT * dt).rem_euclid(360.0);
        }
    }

    pub fn update(&mut self, rl: &RaylibHandle, drag_allowed: bool) {
        if drag_allowed && rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            let md = rl.get_mouse_delta();
            self.orbit(md.x, md.y);
        }
        self.zoom(rl.get_mouse_wheel_move());
    }
}
