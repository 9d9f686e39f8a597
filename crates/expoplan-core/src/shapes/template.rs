//! Fixed booth templates placed with a single click.

use super::{ShapeGeometry, ShapeKind};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// A shape that is instantiated from one placement point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Template {
    Rectangle,
    I,
    L,
    U,
}

// Template outlines are fixed vertex lists relative to the anchor.
// They do not scale with `w`/`h`.
const I_OUTLINE: [(f64, f64); 4] = [(0.0, 0.0), (120.0, 0.0), (120.0, 30.0), (0.0, 30.0)];
const L_OUTLINE: [(f64, f64); 6] = [
    (0.0, 0.0),
    (120.0, 0.0),
    (120.0, 30.0),
    (30.0, 30.0),
    (30.0, 120.0),
    (0.0, 120.0),
];
const U_OUTLINE: [(f64, f64); 8] = [
    (0.0, 0.0),
    (140.0, 0.0),
    (140.0, 30.0),
    (110.0, 30.0),
    (110.0, 90.0),
    (30.0, 90.0),
    (30.0, 30.0),
    (0.0, 30.0),
];

fn outline(vertices: &[(f64, f64)]) -> Vec<Point> {
    vertices.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

impl Template {
    /// The persisted shape kind for this template.
    pub fn kind(self) -> ShapeKind {
        match self {
            Template::Rectangle => ShapeKind::Rectangle,
            Template::I => ShapeKind::TemplateI,
            Template::L => ShapeKind::TemplateL,
            Template::U => ShapeKind::TemplateU,
        }
    }

    /// Instantiate the template with its top-left corner at `anchor`.
    ///
    /// `rect_size` is the size of a plain rectangle; the other templates
    /// carry their own nominal size.
    pub fn instantiate(self, anchor: Point, rect_size: Size) -> ShapeGeometry {
        let (size, points) = match self {
            Template::Rectangle => (rect_size, Vec::new()),
            Template::I => (Size::new(120.0, 30.0), outline(&I_OUTLINE)),
            Template::L => (Size::new(120.0, 120.0), outline(&L_OUTLINE)),
            Template::U => (Size::new(140.0, 90.0), outline(&U_OUTLINE)),
        };
        ShapeGeometry {
            kind: self.kind(),
            anchor,
            size,
            points,
        }
    }
}
