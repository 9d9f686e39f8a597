//! Booth shape definitions.
//!
//! A booth outline is always stored relative to its anchor point, so
//! moving a booth only ever touches the anchor. Rectangles are the one
//! kind described by width/height instead of a vertex list.

mod freehand;
mod outline;
mod template;

pub use freehand::{DegenerateShape, MIN_TRACE_POINTS, finalize_trace};
pub use outline::Outline;
pub use template::Template;

use kurbo::{Point, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Shape variant of a booth, as persisted in the `shape` field.
///
/// The short tags written by older plan files are accepted on import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    #[serde(rename = "rectangle", alias = "rect")]
    Rectangle,
    #[serde(rename = "template-I", alias = "i")]
    TemplateI,
    #[serde(rename = "template-L", alias = "l")]
    TemplateL,
    #[serde(rename = "template-U", alias = "u")]
    TemplateU,
    #[serde(rename = "freehand-polygon", alias = "polygon")]
    FreehandPolygon,
}

impl ShapeKind {
    /// Whether the outline comes from the `points` list.
    pub fn uses_points(self) -> bool {
        match self {
            ShapeKind::Rectangle => false,
            ShapeKind::TemplateI
            | ShapeKind::TemplateL
            | ShapeKind::TemplateU
            | ShapeKind::FreehandPolygon => true,
        }
    }
}

/// Occupancy status of a booth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoothStatus {
    #[default]
    Available,
    Reserved,
    Occupied,
}

/// Alpha applied to the status colour when filling a booth.
const FILL_ALPHA: u8 = 0x59;

impl BoothStatus {
    /// All statuses in display order.
    pub const ALL: [BoothStatus; 3] = [
        BoothStatus::Available,
        BoothStatus::Reserved,
        BoothStatus::Occupied,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            BoothStatus::Available => "Available",
            BoothStatus::Reserved => "Reserved",
            BoothStatus::Occupied => "Occupied",
        }
    }

    fn rgb(self) -> (u8, u8, u8) {
        match self {
            BoothStatus::Available => (0x10, 0xB9, 0x81),
            BoothStatus::Reserved => (0xF5, 0x9E, 0x0B),
            BoothStatus::Occupied => (0xEF, 0x44, 0x44),
        }
    }

    /// Opaque status colour (legend swatches).
    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::from_rgba8(r, g, b, 255)
    }

    /// Translucent booth fill, so the background plan stays visible.
    pub fn fill(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::from_rgba8(r, g, b, FILL_ALPHA)
    }
}

/// Geometry of a newly created booth, before it gets an id and a name.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    pub kind: ShapeKind,
    /// World-space anchor (top-left of the outline's bounding box).
    pub anchor: Point,
    /// Nominal size. True dimensions only for rectangles; zero for freehand.
    pub size: Size,
    /// Outline vertices relative to `anchor`. Empty for rectangles.
    pub points: Vec<Point>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_tags() {
        let tags: Vec<String> = [
            ShapeKind::Rectangle,
            ShapeKind::TemplateI,
            ShapeKind::TemplateL,
            ShapeKind::TemplateU,
            ShapeKind::FreehandPolygon,
        ]
        .iter()
        .map(|k| serde_json::to_string(k).unwrap())
        .collect();
        assert_eq!(
            tags,
            [
                "\"rectangle\"",
                "\"template-I\"",
                "\"template-L\"",
                "\"template-U\"",
                "\"freehand-polygon\""
            ]
        );
    }

    #[test]
    fn test_legacy_shape_tags() {
        let parse = |s: &str| serde_json::from_str::<ShapeKind>(s).unwrap();
        assert_eq!(parse("\"rect\""), ShapeKind::Rectangle);
        assert_eq!(parse("\"i\""), ShapeKind::TemplateI);
        assert_eq!(parse("\"l\""), ShapeKind::TemplateL);
        assert_eq!(parse("\"u\""), ShapeKind::TemplateU);
        assert_eq!(parse("\"polygon\""), ShapeKind::FreehandPolygon);
        assert!(serde_json::from_str::<ShapeKind>("\"hexagon\"").is_err());
    }

    #[test]
    fn test_status_serde_and_default() {
        assert_eq!(BoothStatus::default(), BoothStatus::Available);
        assert_eq!(serde_json::to_string(&BoothStatus::Reserved).unwrap(), "\"reserved\"");
        assert_eq!(
            serde_json::from_str::<BoothStatus>("\"occupied\"").unwrap(),
            BoothStatus::Occupied
        );
    }

    #[test]
    fn test_status_fill_is_translucent() {
        for status in BoothStatus::ALL {
            let fill = status.fill().to_rgba8();
            let solid = status.color().to_rgba8();
            assert_eq!(fill.a, FILL_ALPHA);
            assert_eq!(solid.a, 255);
            assert_eq!((fill.r, fill.g, fill.b), (solid.r, solid.g, solid.b));
        }
    }

    #[test]
    fn test_only_rectangle_ignores_points() {
        assert!(!ShapeKind::Rectangle.uses_points());
        assert!(ShapeKind::FreehandPolygon.uses_points());
        assert!(ShapeKind::TemplateU.uses_points());
    }
}
