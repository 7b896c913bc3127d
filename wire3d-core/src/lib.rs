/// wire3d core: hand-rolled perspective pipeline for wireframe boxes
///
/// Turns per-object transforms and an orbit camera into screen-space line
/// segments, and turns a screen click back into the object under it. The
/// crate does no drawing or event capture of its own; frontends implement
/// `render::Surface` and feed `input::Event`s into a `SceneState`.

pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod inspector;
pub mod manipulation;
pub mod picking;
pub mod projection;
pub mod render;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use camera::{Camera, CameraKey, Zoom};
pub use config::SceneConfig;
pub use error::{ConfigError, Error, InspectorError};
pub use geometry::{Segment, ScreenVertices, CUBE_EDGES, UNIT_CUBE_VERTICES};
pub use input::{Event, PointerButton};
pub use inspector::TransformField;
pub use manipulation::WidgetMode;
pub use picking::ScreenBounds;
pub use projection::{ProjectionParams, Viewport};
pub use render::{SegmentRecorder, Surface};
pub use scene::{project_object, Object, SceneState};
pub use transform::{rotate_axis, Axis, EulerRotation, Transform};
