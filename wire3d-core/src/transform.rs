/// Axis rotations, Euler rotation state and the object-to-world transform
use nalgebra::Vector3;

/// Per-frame rotation increment applied to auto-rotating objects (radians)
pub const AUTO_ROTATE_STEP: f64 = 0.01;

/// Coordinate axis for a single-axis rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotate `point` by `angle` radians about `axis`, leaving the axis coordinate fixed
pub fn rotate_axis(point: &Vector3<f64>, axis: Axis, angle: f64) -> Vector3<f64> {
    let (sin, cos) = angle.sin_cos();
    match axis {
        Axis::X => Vector3::new(
            point.x,
            point.y * cos - point.z * sin,
            point.y * sin + point.z * cos,
        ),
        Axis::Y => Vector3::new(
            point.x * cos + point.z * sin,
            point.y,
            -point.x * sin + point.z * cos,
        ),
        Axis::Z => Vector3::new(
            point.x * cos - point.y * sin,
            point.x * sin + point.y * cos,
            point.z,
        ),
    }
}

/// Rotation angles around three axes (in radians), applied X then Y then Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerRotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerRotation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Apply this rotation to `point`.
    ///
    /// The order is X, then Y, then Z. Both the object transform and the
    /// camera orbit go through here so the two can never disagree.
    pub fn apply(&self, point: &Vector3<f64>) -> Vector3<f64> {
        let rotated = rotate_axis(point, Axis::X, self.x);
        let rotated = rotate_axis(&rotated, Axis::Y, self.y);
        rotate_axis(&rotated, Axis::Z, self.z)
    }
}

impl Default for EulerRotation {
    fn default() -> Self {
        Self::zero()
    }
}

/// Position, rotation and scale of one object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f64>,
    pub rotation: EulerRotation,
    pub scale: Vector3<f64>,
}

impl Transform {
    /// Identity rotation and unit scale at `position`
    pub fn at(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Map a local-space vertex to world space: scale, rotate, then translate
    pub fn to_world(&self, vertex: &Vector3<f64>) -> Vector3<f64> {
        let scaled = vertex.component_mul(&self.scale);
        self.rotation.apply(&scaled) + self.position
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: EulerRotation::zero(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}
