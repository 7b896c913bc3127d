/// Fixed unit cube geometry and screen-space primitives
use nalgebra::Vector3;

/// Number of corners on the unit cube
pub const CUBE_VERTEX_COUNT: usize = 8;

/// Local-space corners of the unit cube, centered on the origin with side 1
pub const UNIT_CUBE_VERTICES: [[f64; 3]; CUBE_VERTEX_COUNT] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

/// Vertex index pairs for the 12 cube edges
pub const CUBE_EDGES: [(usize, usize); 12] = [
    // Back face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // Front face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // Connecting edges
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Unit cube corner `index` as a vector
pub fn cube_vertex(index: usize) -> Vector3<f64> {
    let [x, y, z] = UNIT_CUBE_VERTICES[index];
    Vector3::new(x, y, z)
}

/// Screen-space corners of one projected cube.
///
/// `x` and `y` are pixels with the origin at the top-left, `z` is the
/// normalized depth after the perspective divide.
pub type ScreenVertices = [Vector3<f64>; CUBE_VERTEX_COUNT];

/// A line segment between two screen-space points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
}

impl Segment {
    pub fn new(start: Vector3<f64>, end: Vector3<f64>) -> Self {
        Self { start, end }
    }
}

/// The 12 edge segments of a projected cube, in [`CUBE_EDGES`] order
pub fn cube_segments(vertices: &ScreenVertices) -> impl Iterator<Item = Segment> + '_ {
    CUBE_EDGES
        .iter()
        .map(move |&(a, b)| Segment::new(vertices[a], vertices[b]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_cube_edges() {
        // Every edge joins corners that differ in exactly one coordinate
        for &(a, b) in &CUBE_EDGES {
            let diff = cube_vertex(a) - cube_vertex(b);
            let changed = diff.iter().filter(|c| c.abs() > 1e-12).count();
            assert_eq!(changed, 1, "edge ({a}, {b})");
            assert!((diff.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_every_vertex_has_three_edges() {
        let mut degree = [0; CUBE_VERTEX_COUNT];
        for &(a, b) in &CUBE_EDGES {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 3));
    }

    #[test]
    fn test_cube_segments_follow_edge_order() {
        let vertices: ScreenVertices = std::array::from_fn(|i| Vector3::new(i as f64, 0.0, 0.0));
        let segments: Vec<_> = cube_segments(&vertices).collect();
        assert_eq!(segments.len(), 12);
        assert_eq!(segments[3].start.x, 3.0);
        assert_eq!(segments[3].end.x, 0.0);
        assert_eq!(segments[11].end.x, 7.0);
    }
}
