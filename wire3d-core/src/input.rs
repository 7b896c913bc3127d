/// Discrete input events and their effect on the scene
use tracing::{debug, trace};

use crate::camera::{CameraKey, Zoom};
use crate::manipulation::WidgetMode;
use crate::scene::SceneState;

/// Pointer button that produced a press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

impl PointerButton {
    /// Map a DOM-style button number (0 = primary, 2 = secondary)
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => PointerButton::Primary,
            2 => PointerButton::Secondary,
            _ => PointerButton::Other,
        }
    }
}

/// Input delivered by the host, already converted to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    PointerDown {
        x: f64,
        y: f64,
        button: PointerButton,
    },
    PointerMove {
        dx: f64,
        dy: f64,
    },
    PointerUp {
        button: PointerButton,
    },
    /// Signed wheel delta; only the sign is used
    Wheel {
        delta: f64,
    },
    Key(CameraKey),
    SelectMode(WidgetMode),
    Resize {
        width: u32,
        height: u32,
    },
}

impl SceneState {
    /// Apply one input event. Runs to completion before the next `tick`.
    pub fn handle_event(&mut self, event: Event) {
        trace!(?event, "handling event");
        match event {
            Event::PointerDown { x, y, button } => match button {
                PointerButton::Primary => {
                    self.pick(x, y);
                }
                PointerButton::Secondary => self.orbiting = true,
                PointerButton::Other => {}
            },
            Event::PointerMove { dx, dy } => {
                self.drag(dx, dy);
                if self.orbiting {
                    self.camera.orbit_by(dx, dy);
                }
            }
            Event::PointerUp { button } => {
                if self.mode.take().is_some() {
                    debug!("widget mode cleared");
                }
                if button == PointerButton::Secondary {
                    self.orbiting = false;
                }
            }
            Event::Wheel { delta } => {
                self.camera.zoom(Zoom::from_wheel(delta));
                // Dolly is not part of the matrix; rebuilt to keep params and matrix in step
                self.recompute_projection();
            }
            Event::Key(key) => self.camera.apply_key(key),
            Event::SelectMode(mode) => {
                debug!(%mode, "widget mode selected");
                self.mode = Some(mode);
            }
            Event::Resize { width, height } => self.resize(width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{MAX_DOLLY, MIN_DOLLY};
    use crate::config::SceneConfig;
    use crate::scene::Object;
    use crate::transform::Transform;
    use nalgebra::Vector3;

    fn one_cube() -> SceneState {
        SceneState::with_objects(
            SceneConfig::default(),
            vec![Object::new(Transform::default(), false)],
        )
        .unwrap()
    }

    fn click(x: f64, y: f64) -> Event {
        Event::PointerDown {
            x,
            y,
            button: PointerButton::Primary,
        }
    }

    #[test]
    fn test_click_then_scale_drag() {
        let mut scene = one_cube();
        scene.handle_event(click(400.0, 400.0));
        assert_eq!(scene.selection(), Some(0));

        scene.handle_event(Event::SelectMode(WidgetMode::Scale));
        scene.handle_event(Event::PointerMove { dx: 100.0, dy: 0.0 });
        assert_eq!(scene.objects[0].transform.scale, Vector3::new(2.0, 1.0, 1.0));
    }

    #[test]
    fn test_release_ends_drag() {
        let mut scene = one_cube();
        scene.handle_event(click(400.0, 400.0));
        scene.handle_event(Event::SelectMode(WidgetMode::Translate));
        scene.handle_event(Event::PointerUp {
            button: PointerButton::Primary,
        });
        assert_eq!(scene.mode(), None);

        scene.handle_event(Event::PointerMove { dx: 50.0, dy: 50.0 });
        assert_eq!(scene.objects[0].transform, Transform::default());
    }

    #[test]
    fn test_secondary_drag_orbits() {
        let mut scene = one_cube();
        let secondary = PointerButton::from_index(2);
        scene.handle_event(Event::PointerDown {
            x: 0.0,
            y: 0.0,
            button: secondary,
        });
        assert!(scene.is_orbiting());
        scene.handle_event(Event::PointerMove { dx: 10.0, dy: 5.0 });
        assert!((scene.camera.orbit.yaw + 0.1).abs() < 1e-12);
        assert!((scene.camera.orbit.pitch + 0.05).abs() < 1e-12);

        scene.handle_event(Event::PointerUp { button: secondary });
        scene.handle_event(Event::PointerMove { dx: 10.0, dy: 5.0 });
        assert!((scene.camera.orbit.yaw + 0.1).abs() < 1e-12);
        // Secondary press never touches the selection
        assert_eq!(scene.selection(), None);
    }

    #[test]
    fn test_wheel_clamps_and_keeps_matrix() {
        let mut scene = one_cube();
        let matrix = *scene.projection_matrix();
        for _ in 0..200 {
            scene.handle_event(Event::Wheel { delta: 1.0 });
        }
        assert_eq!(scene.camera.dolly, MIN_DOLLY);
        for _ in 0..400 {
            scene.handle_event(Event::Wheel { delta: -1.0 });
        }
        assert_eq!(scene.camera.dolly, MAX_DOLLY);
        assert_eq!(*scene.projection_matrix(), matrix);
    }

    #[test]
    fn test_key_moves_camera() {
        let mut scene = one_cube();
        scene.handle_event(Event::Key(CameraKey::Right));
        scene.handle_event(Event::Key(CameraKey::PanDown));
        assert!((scene.camera.translation.x - 0.1).abs() < 1e-12);
        assert!((scene.camera.pan.y - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_resize_event() {
        let mut scene = one_cube();
        scene.handle_event(Event::Resize {
            width: 400,
            height: 200,
        });
        assert_eq!(scene.projection().aspect, 2.0);
    }

    #[test]
    fn test_other_button_is_ignored() {
        let mut scene = one_cube();
        scene.select(Some(0));
        scene.handle_event(Event::PointerDown {
            x: 1.0,
            y: 1.0,
            button: PointerButton::from_index(1),
        });
        assert_eq!(scene.selection(), Some(0));
        assert!(!scene.is_orbiting());
    }
}
