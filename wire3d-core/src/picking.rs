/// Screen-space picking against projected bounding boxes
use tracing::debug;

use crate::geometry::ScreenVertices;
use crate::scene::SceneState;

/// Axis-aligned screen rectangle enclosing a projected object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ScreenBounds {
    pub fn from_vertices(vertices: &ScreenVertices) -> Self {
        vertices.iter().fold(
            Self {
                min_x: f64::INFINITY,
                max_x: f64::NEG_INFINITY,
                min_y: f64::INFINITY,
                max_y: f64::NEG_INFINITY,
            },
            |bounds, v| Self {
                min_x: bounds.min_x.min(v.x),
                max_x: bounds.max_x.max(v.x),
                min_y: bounds.min_y.min(v.y),
                max_y: bounds.max_y.max(v.y),
            },
        )
    }

    /// Inclusive containment test
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }
}

impl SceneState {
    /// Screen bounds of the object at `index` under the current state
    pub fn screen_bounds(&self, index: usize) -> Option<ScreenBounds> {
        self.screen_vertices(index)
            .map(|vertices| ScreenBounds::from_vertices(&vertices))
    }

    /// First object, in scene order, whose screen bounds contain `(x, y)`.
    ///
    /// Overlapping boxes resolve to the earlier object; there is no depth test.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        (0..self.objects.len()).find(|&index| {
            self.screen_bounds(index)
                .is_some_and(|bounds| bounds.contains(x, y))
        })
    }

    /// Replace the selection with whatever lies under `(x, y)`
    pub fn pick(&mut self, x: f64, y: f64) -> Option<usize> {
        self.selection = None;
        self.selection = self.hit_test(x, y);
        match self.selection {
            Some(index) => debug!(index, x, y, "object selected"),
            None => debug!(x, y, "selection cleared"),
        }
        self.selection
    }
}
