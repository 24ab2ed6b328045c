//! Midpoint line rasterization.
//!
//! Two variants share one contract: plot a deterministic, 8-connected
//! sequence of pixels approximating the segment between two points.
//! Tracing is split from plotting so the produced sequence can be
//! inspected without a canvas.

use core::mem;

use crate::canvas::{Canvas, CanvasError, Color};

/// Traces a segment with the single-octant midpoint walk.
///
/// Only valid for `x1 > x0` with a slope in the first octant (screen
/// space, y growing downwards). Outside that octant the result is
/// geometrically wrong, not merely suboptimal. The walk takes exactly
/// `x1 - x0` steps starting at `(x0, y0)`, so the far endpoint is not
/// included. Kept as a reference for [`line_points`], which supersedes it.
#[must_use]
pub fn octant_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = x1 - x0;
    let dy = y0 - y1;
    let mut decision = 2 * dy - dx;
    let mut x = x0;
    let mut y = y0;
    let mut points = Vec::new();

    for _ in 0..dx {
        points.push((x, y));

        if decision > 0 {
            y -= 1;
            decision += 2 * (dy - dx);
        } else {
            decision += 2 * dy;
        }

        x += 1;
    }

    points
}

/// Traces a segment with the generalized 8-octant midpoint walk.
///
/// Handles any relative position of the endpoints. The sequence starts
/// at `(x0, y0)`, ends at `(x1, y1)`, and holds exactly
/// `max(|x1 - x0|, |y0 - y1|) + 1` points, each adjacent (including
/// diagonally) to its predecessor.
#[must_use]
pub fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let mut dx = (x1 - x0).abs();
    let mut dy = (y0 - y1).abs();
    let sx = (x1 - x0).signum();
    let sy = (y0 - y1).signum();

    // Step along the longer axis so the short axis advances at most one
    // pixel per iteration.
    let swapped = if dx < dy {
        mem::swap(&mut dx, &mut dy);
        true
    } else {
        false
    };

    let mut decision = 2 * dy - dx;
    let mut x = x0;
    let mut y = y0;
    let mut points = Vec::from([(x, y)]);

    while x != x1 || y != y1 {
        if decision > 0 {
            if swapped {
                x += sx;
            } else {
                y -= sy;
            }
            decision -= 2 * dx;
        }

        if swapped {
            y -= sy;
        } else {
            x += sx;
        }

        decision += 2 * dy;
        points.push((x, y));
    }

    points
}

/// Plots a segment with the single-octant walk of [`octant_points`].
///
/// Carries that walk's limitations; use [`rasterize_v2`] unless the
/// two variants are being compared.
pub fn rasterize_v1(
    canvas: &mut Canvas,
    color: Color,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Result<(), CanvasError> {
    for (x, y) in octant_points(x0, y0, x1, y1) {
        canvas.plot(x, y, color)?;
    }

    Ok(())
}

/// Plots a segment between any two points with [`line_points`].
///
/// Fails with [`CanvasError::OutOfBounds`] on the first pixel outside
/// the canvas, leaving the pixels before it written.
pub fn rasterize_v2(
    canvas: &mut Canvas,
    color: Color,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Result<(), CanvasError> {
    for (x, y) in line_points(x0, y0, x1, y1) {
        canvas.plot(x, y, color)?;
    }

    Ok(())
}
