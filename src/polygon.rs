//! Closed figures built from line segments.

use thiserror::Error;

use crate::canvas::{Canvas, CanvasError, Color};
use crate::line;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolygonError {
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// A closed figure over a list of vertices.
///
/// Consecutive vertices are connected by midpoint lines, with one closing
/// edge from the last vertex back to the first. Closure holds by
/// construction, so only the vertex count can be rejected.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<(i32, i32)>,
}

impl Polygon {
    pub fn new(vertices: &[(i32, i32)]) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }

        Ok(Self {
            vertices: vertices.to_vec(),
        })
    }

    #[must_use]
    pub fn vertices(&self) -> &[(i32, i32)] {
        &self.vertices
    }

    /// The edges in drawing order, ending with the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = ((i32, i32), (i32, i32))> + '_ {
        let closing = (self.vertices[self.vertices.len() - 1], self.vertices[0]);
        self.vertices
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(core::iter::once(closing))
    }

    /// Plots every edge with the 8-octant rasterizer.
    ///
    /// Fails with [`CanvasError::OutOfBounds`] on the first pixel outside
    /// the canvas, leaving the pixels before it written.
    pub fn rasterize(&self, canvas: &mut Canvas, color: Color) -> Result<(), CanvasError> {
        for ((x0, y0), (x1, y1)) in self.edges() {
            line::rasterize_v2(canvas, color, x0, y0, x1, y1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_end_with_the_closing_edge() {
        let triangle = Polygon::new(&[(0, 0), (4, 0), (2, 3)]).unwrap();

        let edges: Vec<_> = triangle.edges().collect();

        assert_eq!(
            edges,
            [
                ((0, 0), (4, 0)),
                ((4, 0), (2, 3)),
                ((2, 3), (0, 0)),
            ]
        );
    }

    #[test]
    fn rasterize_propagates_out_of_bounds() {
        let mut canvas = Canvas::new(8, 8);
        let triangle = Polygon::new(&[(5, 5), (12, 5), (5, 12)]).unwrap();

        let result = triangle.rasterize(&mut canvas, Color::BLACK);

        assert!(matches!(result, Err(CanvasError::OutOfBounds { .. })));
    }
}
