//! Freehand polygon finalisation.

use super::{ShapeGeometry, ShapeKind};
use kurbo::{Point, Size};
use thiserror::Error;

/// Fewest captured points that make a polygon booth.
pub const MIN_TRACE_POINTS: usize = 2;

/// A freehand trace too short to become a booth (a click without a drag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("freehand trace has {captured} point(s), need at least {MIN_TRACE_POINTS}")]
pub struct DegenerateShape {
    pub captured: usize,
}

/// Turn a world-space trace into an anchored polygon.
///
/// The anchor is the minimum x and minimum y over the trace. Every point
/// is stored relative to it, so the stored outline has min x and min y of
/// exactly zero.
pub fn finalize_trace(trace: &[Point]) -> Result<ShapeGeometry, DegenerateShape> {
    if trace.len() < MIN_TRACE_POINTS {
        return Err(DegenerateShape {
            captured: trace.len(),
        });
    }

    let min_x = trace.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = trace.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let anchor = Point::new(min_x, min_y);

    let points = trace
        .iter()
        .map(|p| Point::new(p.x - min_x, p.y - min_y))
        .collect();

    Ok(ShapeGeometry {
        kind: ShapeKind::FreehandPolygon,
        anchor,
        size: Size::ZERO,
        points,
    })
}
