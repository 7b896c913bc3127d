/// Perspective projection and viewport mapping
use nalgebra::{Matrix4, Vector3, Vector4};

pub const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_4; // 45 degrees
pub const DEFAULT_NEAR: f64 = 0.1;
pub const DEFAULT_FAR: f64 = 100.0;

/// Parameters of the symmetric perspective frustum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl ProjectionParams {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            fov: DEFAULT_FOV,
            aspect: width as f64 / height as f64,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Create the projection matrix
    pub fn matrix(&self) -> Matrix4<f64> {
        perspective_matrix(self.fov, self.aspect, self.near, self.far)
    }
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self::new(800, 800)
    }
}

/// OpenGL-style perspective matrix for a right-handed view space.
///
/// Arguments to `Matrix4::new` are given row by row.
#[rustfmt::skip]
pub fn perspective_matrix(fov: f64, aspect: f64, near: f64, far: f64) -> Matrix4<f64> {
    let f = 1.0 / (fov / 2.0).tan();
    Matrix4::new(
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (far + near) / (near - far), (2.0 * far * near) / (near - far),
        0.0, 0.0, -1.0, 0.0,
    )
}

/// Multiply `point` (with `w = 1`) by `matrix` and apply the perspective divide.
///
/// When the resulting `w` is exactly zero the point is at infinity and the
/// components are returned undivided.
pub fn project(matrix: &Matrix4<f64>, point: &Vector3<f64>) -> Vector4<f64> {
    let clip = matrix * point.push(1.0);
    if clip.w != 0.0 {
        Vector4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w, clip.w)
    } else {
        clip
    }
}

/// Pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
        }
    }

    /// Project a view-space point to screen space
    ///
    /// Screen Y grows downwards from the top-left corner. The returned `z`
    /// is the normalized depth, kept for callers that want to sort by it.
    pub fn to_screen(&self, view_point: &Vector3<f64>, projection: &Matrix4<f64>) -> Vector3<f64> {
        let ndc = project(projection, view_point);
        Vector3::new(
            (ndc.x * 0.5 + 0.5) * self.width,
            (ndc.y * -0.5 + 0.5) * self.height,
            ndc.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_creation() {
        let params = ProjectionParams::new(800, 600);
        assert_eq!(params.fov, DEFAULT_FOV);
        assert!((params.aspect - 800.0 / 600.0).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_matches_nalgebra_perspective() {
        let params = ProjectionParams::new(1280, 720);
        let ours = params.matrix();
        let theirs = Matrix4::new_perspective(params.aspect, params.fov, params.near, params.far);
        assert!((ours - theirs).norm() < 1e-9);
    }

    #[test]
    fn test_w_row_negates_view_depth() {
        let matrix = ProjectionParams::default().matrix();
        let clip = matrix * Vector4::new(0.3, -0.2, -4.0, 1.0);
        assert!((clip.w - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_near_and_far_map_to_ndc_bounds() {
        let params = ProjectionParams::default();
        let matrix = params.matrix();
        let near = project(&matrix, &Vector3::new(0.0, 0.0, -params.near));
        let far = project(&matrix, &Vector3::new(0.0, 0.0, -params.far));
        assert!((near.z + 1.0).abs() < 1e-9);
        assert!((far.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_w_skips_divide() {
        let matrix = ProjectionParams::default().matrix();
        // A point on the camera plane has w = -z = 0
        let projected = project(&matrix, &Vector3::new(2.0, 3.0, 0.0));
        assert_eq!(projected.w, 0.0);
        assert!(projected.iter().all(|c| c.is_finite()));
        assert!((projected.x - 2.0 * matrix[(0, 0)]).abs() < 1e-12);
        assert!((projected.y - 3.0 * matrix[(1, 1)]).abs() < 1e-12);
    }

    #[test]
    fn test_to_screen_flips_y() {
        let viewport = Viewport::new(800, 600);
        let matrix = ProjectionParams::new(800, 600).matrix();

        let center = viewport.to_screen(&Vector3::new(0.0, 0.0, -5.0), &matrix);
        assert!((center.x - 400.0).abs() < 1e-9);
        assert!((center.y - 300.0).abs() < 1e-9);

        let up = viewport.to_screen(&Vector3::new(0.0, 1.0, -5.0), &matrix);
        assert!(up.y < center.y);
        let right = viewport.to_screen(&Vector3::new(1.0, 0.0, -5.0), &matrix);
        assert!(right.x > center.x);
    }
}
