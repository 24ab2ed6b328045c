use std::collections::HashSet;

use scrawl::canvas::{Canvas, Color};
use scrawl::line::line_points;
use scrawl::polygon::{Polygon, PolygonError};

#[test]
fn polygon_from_two_vertices_is_error() {
    let polygon = Polygon::new(&[(100, 100), (200, 200)]);

    assert!(polygon.is_err());
    assert_eq!(polygon.unwrap_err(), PolygonError::TooFewVertices(2));
}

#[test]
fn polygon_from_square_vertices_is_ok() {
    let polygon = Polygon::new(&[(100, 100), (100, 200), (200, 200), (200, 100)]);

    assert!(polygon.is_ok());
}

#[test]
fn polygon_keeps_its_vertices() {
    let vertices = [(100, 100), (100, 200), (200, 200), (200, 100)];

    let polygon = Polygon::new(&vertices).unwrap();

    assert_eq!(polygon.vertices(), vertices);
}

#[test]
fn square_rasterizes_as_the_union_of_its_four_edges() {
    let mut canvas = Canvas::new(32, 32);
    let vertices = [(5, 5), (5, 25), (25, 25), (25, 5)];
    let square = Polygon::new(&vertices).unwrap();

    square.rasterize(&mut canvas, Color::BLACK).unwrap();

    let mut expected = HashSet::new();
    for (start, end) in [
        (vertices[0], vertices[1]),
        (vertices[1], vertices[2]),
        (vertices[2], vertices[3]),
        (vertices[3], vertices[0]),
    ] {
        expected.extend(line_points(start.0, start.1, end.0, end.1));
    }

    for y in 0..32 {
        for x in 0..32 {
            let want = if expected.contains(&(x, y)) {
                Color::BLACK.pack()
            } else {
                Color::WHITE.pack()
            };
            assert_eq!(canvas.get(x, y), Some(want), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn triangle_edges_touch_at_every_vertex() {
    let triangle = Polygon::new(&[(2, 2), (12, 4), (6, 10)]).unwrap();

    for (start, end) in triangle.edges() {
        let points = line_points(start.0, start.1, end.0, end.1);
        assert_eq!(*points.first().unwrap(), start);
        assert_eq!(*points.last().unwrap(), end);
    }
}
