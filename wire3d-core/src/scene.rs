/// Scene state: the ordered objects, camera, projection and selection
use nalgebra::{Matrix4, Vector3};
use tracing::debug;

use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::geometry::{cube_vertex, ScreenVertices};
use crate::manipulation::WidgetMode;
use crate::projection::{ProjectionParams, Viewport};
use crate::transform::Transform;

/// A unit cube placed in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object {
    pub transform: Transform,
    /// Spin a little on every rendered frame
    pub rotating: bool,
}

impl Object {
    pub fn new(transform: Transform, rotating: bool) -> Self {
        Self {
            transform,
            rotating,
        }
    }
}

/// The stock four-cube layout: left and top spin, right and bottom hold still
pub fn default_objects() -> Vec<Object> {
    vec![
        Object::new(Transform::at(Vector3::new(-1.5, 0.0, 0.0)), true),
        Object::new(Transform::at(Vector3::new(1.5, 0.0, 0.0)), false),
        Object::new(Transform::at(Vector3::new(0.0, 1.5, 0.0)), true),
        Object::new(Transform::at(Vector3::new(0.0, -1.5, 0.0)), false),
    ]
}

/// Project the 8 corners of `object` to screen space.
///
/// Rendering and picking both call this, so a click is always tested
/// against exactly what was drawn.
pub fn project_object(
    object: &Object,
    camera: &Camera,
    projection: &Matrix4<f64>,
    viewport: &Viewport,
) -> ScreenVertices {
    std::array::from_fn(|i| {
        let world = object.transform.to_world(&cube_vertex(i));
        let view = camera.to_view(&world);
        viewport.to_screen(&view, projection)
    })
}

/// Everything the render and picking pipelines read or mutate
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Draw order and pick priority
    pub objects: Vec<Object>,
    pub camera: Camera,
    projection: ProjectionParams,
    projection_matrix: Matrix4<f64>,
    viewport: Viewport,
    /// Index into `objects`, never owning
    pub(crate) selection: Option<usize>,
    pub(crate) mode: Option<WidgetMode>,
    pub(crate) orbiting: bool,
}

impl SceneState {
    /// Build the stock scene from a validated configuration
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        Self::with_objects(config, default_objects())
    }

    /// Build a scene holding `objects` in the given order
    pub fn with_objects(config: SceneConfig, mut objects: Vec<Object>) -> Result<Self, ConfigError> {
        config.validate()?;
        if !config.auto_rotate {
            for object in &mut objects {
                object.rotating = false;
            }
        }
        Ok(Self::build(config, objects))
    }

    fn build(config: SceneConfig, objects: Vec<Object>) -> Self {
        let projection = ProjectionParams {
            fov: config.fov,
            aspect: config.width as f64 / config.height as f64,
            near: config.near,
            far: config.far,
        };
        Self {
            objects,
            camera: Camera::new(config.dolly),
            projection,
            projection_matrix: projection.matrix(),
            viewport: Viewport::new(config.width, config.height),
            selection: None,
            mode: None,
            orbiting: false,
        }
    }

    pub fn projection(&self) -> &ProjectionParams {
        &self.projection
    }

    pub fn projection_matrix(&self) -> &Matrix4<f64> {
        &self.projection_matrix
    }

    /// Replace the projection parameters and rebuild the matrix
    pub fn set_projection(&mut self, projection: ProjectionParams) {
        self.projection = projection;
        self.recompute_projection();
    }

    pub fn recompute_projection(&mut self) {
        self.projection_matrix = self.projection.matrix();
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Track a new surface size. Zero-sized surfaces are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Viewport::new(width, height);
        self.set_projection(ProjectionParams {
            aspect: width as f64 / height as f64,
            ..self.projection
        });
        debug!(width, height, "viewport resized");
    }

    /// Override the projection aspect independently of the viewport
    ///
    /// Useful for surfaces whose cells are not square.
    pub fn set_aspect(&mut self, aspect: f64) {
        self.set_projection(ProjectionParams {
            aspect,
            ..self.projection
        });
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_object(&self) -> Option<&Object> {
        self.selection.and_then(|index| self.objects.get(index))
    }

    pub(crate) fn selected_object_mut(&mut self) -> Option<&mut Object> {
        self.selection.and_then(move |index| self.objects.get_mut(index))
    }

    /// Select the object at `index`, or clear the selection
    pub fn select(&mut self, index: Option<usize>) {
        self.selection = index.filter(|&i| i < self.objects.len());
    }

    pub fn mode(&self) -> Option<WidgetMode> {
        self.mode
    }

    pub fn is_orbiting(&self) -> bool {
        self.orbiting
    }

    /// Screen-space corners of the object at `index` under the current state
    pub fn screen_vertices(&self, index: usize) -> Option<ScreenVertices> {
        self.objects.get(index).map(|object| {
            project_object(object, &self.camera, &self.projection_matrix, &self.viewport)
        })
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::build(SceneConfig::default(), default_objects())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CUBE_VERTEX_COUNT;

    fn single_cube_scene() -> SceneState {
        SceneState::with_objects(
            SceneConfig::default(),
            vec![Object::new(Transform::default(), false)],
        )
        .unwrap()
    }

    #[test]
    fn test_default_scene_layout() {
        let scene = SceneState::default();
        assert_eq!(scene.objects.len(), 4);
        let rotating: Vec<bool> = scene.objects.iter().map(|o| o.rotating).collect();
        assert_eq!(rotating, vec![true, false, true, false]);
        assert_eq!(scene.objects[0].transform.position.x, -1.5);
        assert_eq!(scene.camera.dolly, -2.0);
        assert_eq!(scene.selection(), None);
    }

    #[test]
    fn test_auto_rotate_off_clears_flags() {
        let config = SceneConfig {
            auto_rotate: false,
            ..SceneConfig::default()
        };
        let scene = SceneState::new(config).unwrap();
        assert!(scene.objects.iter().all(|o| !o.rotating));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SceneConfig {
            width: 0,
            ..SceneConfig::default()
        };
        assert!(SceneState::new(config).is_err());
    }

    #[test]
    fn test_centered_cube_projects_symmetrically() {
        let scene = single_cube_scene();
        let vertices = scene.screen_vertices(0).unwrap();
        assert_eq!(vertices.len(), CUBE_VERTEX_COUNT);

        let min_x = vertices.iter().map(|v| v.x).fold(f64::INFINITY, f64::min);
        let max_x = vertices.iter().map(|v| v.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = vertices.iter().map(|v| v.y).fold(f64::INFINITY, f64::min);
        let max_y = vertices.iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max);

        assert!(((min_x + max_x) / 2.0 - 400.0).abs() < 1e-9);
        assert!(((min_y + max_y) / 2.0 - 400.0).abs() < 1e-9);
        assert!(((400.0 - min_x) - (max_x - 400.0)).abs() < 1e-9);
        assert!(((400.0 - min_y) - (max_y - 400.0)).abs() < 1e-9);
        // Near face (z = 0.5) sits at depth 1.5 and spans more pixels
        assert!(max_x - min_x > 100.0);
    }

    #[test]
    fn test_resize_tracks_aspect() {
        let mut scene = single_cube_scene();
        scene.resize(1600, 800);
        assert_eq!(scene.projection().aspect, 2.0);
        assert_eq!(*scene.projection_matrix(), scene.projection().matrix());
        assert_eq!(scene.viewport().width, 1600.0);

        scene.resize(0, 10);
        assert_eq!(scene.viewport().width, 1600.0);
    }

    #[test]
    fn test_set_projection_rebuilds_matrix() {
        let mut scene = single_cube_scene();
        let before = *scene.projection_matrix();
        let wide = ProjectionParams {
            fov: std::f64::consts::FRAC_PI_2,
            ..*scene.projection()
        };
        scene.set_projection(wide);
        assert_eq!(*scene.projection(), wide);
        assert_eq!(*scene.projection_matrix(), wide.matrix());
        assert_ne!(*scene.projection_matrix(), before);

        // A wider frustum shrinks the cube on screen
        let bounds = scene.screen_bounds(0).unwrap();
        assert!(bounds.max_x - bounds.min_x < 300.0);
    }

    #[test]
    fn test_set_aspect_keeps_viewport() {
        let mut scene = single_cube_scene();
        scene.set_aspect(2.0);
        assert_eq!(scene.projection().aspect, 2.0);
        assert_eq!(scene.projection().fov, crate::projection::DEFAULT_FOV);
        assert_eq!(*scene.projection_matrix(), scene.projection().matrix());
        assert_eq!(scene.viewport().width, 800.0);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut scene = SceneState::default();
        scene.select(Some(2));
        assert_eq!(scene.selection(), Some(2));
        scene.select(Some(9));
        assert_eq!(scene.selection(), None);
    }
}
