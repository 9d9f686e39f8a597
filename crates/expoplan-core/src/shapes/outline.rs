//! World-space booth outlines for rendering and hit testing.

use kurbo::{BezPath, Point, Rect, Shape as KurboShape};

/// A booth outline resolved to world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Closed polygon with at least two vertices.
    Polygon(Vec<Point>),
}

impl Outline {
    /// Path representation for rendering. Polygons are closed.
    pub fn to_path(&self) -> BezPath {
        match self {
            Outline::Rect(rect) => rect.to_path(0.1),
            Outline::Polygon(points) => {
                let mut path = BezPath::new();
                let mut iter = points.iter();
                if let Some(&first) = iter.next() {
                    path.move_to(first);
                    for &p in iter {
                        path.line_to(p);
                    }
                    path.close_path();
                }
                path
            }
        }
    }

    /// Bounding box in world coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Rect(rect) => *rect,
            Outline::Polygon(points) => {
                let mut iter = points.iter();
                let Some(&first) = iter.next() else {
                    return Rect::ZERO;
                };
                iter.fold(Rect::from_points(first, first), |acc, &p| acc.union_pt(p))
            }
        }
    }

    /// Check if a world point lies inside the outline (non-zero winding).
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Outline::Rect(rect) => rect.contains(point),
            Outline::Polygon(_) => self.to_path().contains(point),
        }
    }
}
