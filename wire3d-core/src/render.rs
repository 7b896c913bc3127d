/// Per-frame render pipeline
use nalgebra::Vector3;

use crate::geometry::{cube_segments, Segment};
use crate::scene::{project_object, SceneState};
use crate::transform::AUTO_ROTATE_STEP;

/// A 2D surface that can draw screen-space line segments.
///
/// Only `x` and `y` of each endpoint are meaningful to a surface.
pub trait Surface {
    /// Called once at the start of every frame
    fn clear(&mut self) {}

    fn draw_segment(&mut self, start: &Vector3<f64>, end: &Vector3<f64>);

    /// Switch the selection style on or off for subsequent segments
    fn set_highlight(&mut self, on: bool);
}

/// A segment captured by [`SegmentRecorder`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedSegment {
    pub segment: Segment,
    pub highlighted: bool,
}

/// Surface that keeps the segments of the last frame in memory
#[derive(Debug, Default)]
pub struct SegmentRecorder {
    pub segments: Vec<RecordedSegment>,
    highlight: bool,
}

impl SegmentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &RecordedSegment> {
        self.segments.iter().filter(|s| s.highlighted)
    }
}

impl Surface for SegmentRecorder {
    fn clear(&mut self) {
        self.segments.clear();
        self.highlight = false;
    }

    fn draw_segment(&mut self, start: &Vector3<f64>, end: &Vector3<f64>) {
        self.segments.push(RecordedSegment {
            segment: Segment::new(*start, *end),
            highlighted: self.highlight,
        });
    }

    fn set_highlight(&mut self, on: bool) {
        self.highlight = on;
    }
}

impl SceneState {
    /// Advance one display frame and draw it to `surface`.
    ///
    /// Objects are processed in order: spin if flagged, project, emit the 12
    /// edges, and emit them again highlighted when selected. A stale
    /// projection matrix is used as is.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        for index in 0..self.objects.len() {
            let object = &mut self.objects[index];
            if object.rotating {
                object
                    .transform
                    .rotation
                    .rotate(AUTO_ROTATE_STEP, AUTO_ROTATE_STEP, AUTO_ROTATE_STEP);
            }

            let vertices = project_object(
                &self.objects[index],
                &self.camera,
                self.projection_matrix(),
                self.viewport(),
            );
            for segment in cube_segments(&vertices) {
                surface.draw_segment(&segment.start, &segment.end);
            }

            if self.selection == Some(index) {
                surface.set_highlight(true);
                for segment in cube_segments(&vertices) {
                    surface.draw_segment(&segment.start, &segment.end);
                }
                surface.set_highlight(false);
            }
        }
    }
}
