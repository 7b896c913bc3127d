/// Orbit camera: free-fly translation, yaw/pitch orbit, dolly and pan
use nalgebra::Vector3;
use tracing::debug;

use crate::transform::EulerRotation;

pub const DEFAULT_DOLLY: f64 = -2.0;
pub const MIN_DOLLY: f64 = -10.0;
pub const MAX_DOLLY: f64 = 10.0;
/// Dolly change per zoom input
pub const ZOOM_STEP: f64 = 0.1;
/// Translation and pan change per key press
pub const KEY_STEP: f64 = 0.1;
/// Orbit radians per pixel of pointer movement
pub const ORBIT_SENSITIVITY: f64 = 0.01;

/// Orbit angles applied to the scene, in radians
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orbit {
    pub yaw: f64,
    pub pitch: f64,
}

/// Screen-plane offset applied after the orbit
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pan {
    pub x: f64,
    pub y: f64,
}

/// Direction of a single zoom input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zoom {
    In,
    Out,
}

impl Zoom {
    /// Wheel convention: scrolling up (negative delta) zooms in
    pub fn from_wheel(delta: f64) -> Self {
        if delta < 0.0 {
            Zoom::In
        } else {
            Zoom::Out
        }
    }
}

/// Keyboard camera controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraKey {
    Forward,
    Back,
    Left,
    Right,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
}

impl CameraKey {
    /// Parse a host key name such as `"w"` or `"ArrowUp"`
    pub fn parse(name: &str) -> Option<Self> {
        let key = match name {
            "w" => CameraKey::Forward,
            "s" => CameraKey::Back,
            "a" => CameraKey::Left,
            "d" => CameraKey::Right,
            "ArrowUp" => CameraKey::PanUp,
            "ArrowDown" => CameraKey::PanDown,
            "ArrowLeft" => CameraKey::PanLeft,
            "ArrowRight" => CameraKey::PanRight,
            _ => return None,
        };
        Some(key)
    }
}

/// Camera state shared by the render and picking pipelines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub orbit: Orbit,
    pub pan: Pan,
    pub dolly: f64,
    pub translation: Vector3<f64>,
}

impl Camera {
    pub fn new(dolly: f64) -> Self {
        Self {
            orbit: Orbit::default(),
            pan: Pan::default(),
            dolly: dolly.clamp(MIN_DOLLY, MAX_DOLLY),
            translation: Vector3::zeros(),
        }
    }

    /// Map a world-space point into view space.
    ///
    /// Order matters: remove the free-fly translation, orbit (pitch then yaw),
    /// push along the view axis, then pan in the screen plane.
    pub fn to_view(&self, world: &Vector3<f64>) -> Vector3<f64> {
        let local = world - self.translation;
        let rotated = self.orbit_rotation().apply(&local);
        rotated + Vector3::new(self.pan.x, self.pan.y, self.dolly)
    }

    fn orbit_rotation(&self) -> EulerRotation {
        EulerRotation::new(self.orbit.pitch, self.orbit.yaw, 0.0)
    }

    /// Step the dolly and clamp it to `[MIN_DOLLY, MAX_DOLLY]`
    pub fn zoom(&mut self, zoom: Zoom) {
        let step = match zoom {
            Zoom::In => ZOOM_STEP,
            Zoom::Out => -ZOOM_STEP,
        };
        let target = self.dolly + step;
        self.dolly = target.clamp(MIN_DOLLY, MAX_DOLLY);
        if self.dolly != target {
            debug!(dolly = self.dolly, "dolly clamped");
        }
    }

    /// Orbit by a pointer movement in pixels
    pub fn orbit_by(&mut self, dx: f64, dy: f64) {
        self.orbit.yaw -= dx * ORBIT_SENSITIVITY;
        self.orbit.pitch -= dy * ORBIT_SENSITIVITY;
    }

    pub fn apply_key(&mut self, key: CameraKey) {
        match key {
            CameraKey::Forward => self.translation.z += KEY_STEP,
            CameraKey::Back => self.translation.z -= KEY_STEP,
            CameraKey::Left => self.translation.x -= KEY_STEP,
            CameraKey::Right => self.translation.x += KEY_STEP,
            CameraKey::PanUp => self.pan.y -= KEY_STEP,
            CameraKey::PanDown => self.pan.y += KEY_STEP,
            CameraKey::PanLeft => self.pan.x -= KEY_STEP,
            CameraKey::PanRight => self.pan.x += KEY_STEP,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_DOLLY)
    }
}
