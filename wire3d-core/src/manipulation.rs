/// Widget drags that edit the selected object's transform
use std::fmt;

use crate::scene::SceneState;
use crate::transform::Transform;

/// Transform units per pixel of pointer movement
pub const DRAG_SENSITIVITY: f64 = 0.01;

/// Which part of the transform a drag edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetMode {
    Translate,
    Rotate,
    Scale,
}

impl WidgetMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "translate" => Some(WidgetMode::Translate),
            "rotate" => Some(WidgetMode::Rotate),
            "scale" => Some(WidgetMode::Scale),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WidgetMode::Translate => "translate",
            WidgetMode::Rotate => "rotate",
            WidgetMode::Scale => "scale",
        }
    }
}

impl fmt::Display for WidgetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply one pointer movement to `transform`.
///
/// Screen Y points down, so vertical movement is inverted for translate and
/// rotate. Scale has no separate depth axis: Z follows Y. Values are not
/// bounded; a scale may reach zero or go negative.
pub fn apply_drag(transform: &mut Transform, mode: WidgetMode, dx: f64, dy: f64) {
    let dx = dx * DRAG_SENSITIVITY;
    let dy = dy * DRAG_SENSITIVITY;
    match mode {
        WidgetMode::Translate => {
            transform.position.x += dx;
            transform.position.y -= dy;
        }
        WidgetMode::Rotate => {
            transform.rotation.y += dx;
            transform.rotation.x -= dy;
        }
        WidgetMode::Scale => {
            transform.scale.x += dx;
            transform.scale.y += dy;
            transform.scale.z += dy;
        }
    }
}

impl SceneState {
    /// Drag the selection with the active widget mode.
    ///
    /// Returns whether anything changed; without a selection or a mode this
    /// is a no-op.
    pub fn drag(&mut self, dx: f64, dy: f64) -> bool {
        let Some(mode) = self.mode else {
            return false;
        };
        match self.selected_object_mut() {
            Some(object) => {
                apply_drag(&mut object.transform, mode, dx, dy);
                true
            }
            None => false,
        }
    }
}
