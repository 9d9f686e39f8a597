//! Booths placed on the plan and the store that holds them.

use crate::company::CompanyRef;
use crate::shapes::{BoothStatus, Outline, ShapeGeometry, ShapeKind};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a booth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoothId(String);

impl BoothId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BoothId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for BoothId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for BoothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A booth shape placed on the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booth {
    pub(crate) id: BoothId,
    pub name: String,
    pub shape: ShapeKind,
    /// Anchor x in world coordinates.
    pub x: f64,
    /// Anchor y in world coordinates.
    pub y: f64,
    /// Nominal width (true width only for rectangles).
    pub w: f64,
    /// Nominal height (true height only for rectangles).
    pub h: f64,
    #[serde(default)]
    pub status: BoothStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyRef>,
    /// Outline vertices relative to the anchor, persisted as a flat
    /// `[x0, y0, x1, y1, ...]` number list.
    #[serde(default, with = "flat_points")]
    pub points: Vec<Point>,
}

impl Booth {
    /// Create an available, unassigned booth from placed geometry.
    pub fn new(id: BoothId, name: impl Into<String>, geometry: ShapeGeometry) -> Self {
        Self {
            id,
            name: name.into(),
            shape: geometry.kind,
            x: geometry.anchor.x,
            y: geometry.anchor.y,
            w: geometry.size.width,
            h: geometry.size.height,
            status: BoothStatus::default(),
            company_id: None,
            points: geometry.points,
        }
    }

    pub fn id(&self) -> &BoothId {
        &self.id
    }

    /// Anchor point in world coordinates.
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the booth. The relative outline is untouched.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    /// Nominal bounding size.
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// World-space outline, or `None` when a point-based shape has fewer
    /// than two vertices and cannot be drawn.
    pub fn outline(&self) -> Option<Outline> {
        match self.shape {
            ShapeKind::Rectangle => Some(Outline::Rect(Rect::from_origin_size(
                self.anchor(),
                self.size(),
            ))),
            ShapeKind::TemplateI
            | ShapeKind::TemplateL
            | ShapeKind::TemplateU
            | ShapeKind::FreehandPolygon => {
                if self.points.len() < 2 {
                    return None;
                }
                let offset = self.anchor().to_vec2();
                Some(Outline::Polygon(
                    self.points.iter().map(|&p| p + offset).collect(),
                ))
            }
        }
    }

    /// Bounding box in world coordinates.
    pub fn bounds(&self) -> Option<Rect> {
        self.outline().map(|o| o.bounds())
    }

    /// Check if a world point hits this booth.
    pub fn contains(&self, point: Point) -> bool {
        self.outline().is_some_and(|o| o.contains(point))
    }
}

/// Sparse update for a booth. Only present fields are applied;
/// `company: Some(None)` unassigns the booth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoothPatch {
    pub name: Option<String>,
    pub status: Option<BoothStatus>,
    pub company: Option<Option<CompanyRef>>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl BoothPatch {
    /// Patch that moves the anchor.
    pub fn moved_to(anchor: Point) -> Self {
        Self {
            x: Some(anchor.x),
            y: Some(anchor.y),
            ..Default::default()
        }
    }

    fn apply(&self, booth: &mut Booth) {
        if let Some(name) = &self.name {
            booth.name.clone_from(name);
        }
        if let Some(status) = self.status {
            booth.status = status;
        }
        if let Some(company) = &self.company {
            booth.company_id.clone_from(company);
        }
        if let Some(x) = self.x {
            booth.x = x;
        }
        if let Some(y) = self.y {
            booth.y = y;
        }
    }
}

/// Booths in insertion order (which is also paint order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoothStore {
    booths: Vec<Booth>,
}

impl BoothStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a booth. A booth with the same id is replaced in place.
    pub fn add(&mut self, booth: Booth) {
        match self.booths.iter_mut().find(|b| b.id == booth.id) {
            Some(existing) => {
                log::debug!("Replacing booth {}", booth.id);
                *existing = booth;
            }
            None => self.booths.push(booth),
        }
    }

    /// Merge fields into a booth. Returns false (and does nothing) if absent.
    pub fn patch(&mut self, id: &BoothId, patch: &BoothPatch) -> bool {
        let Some(booth) = self.booths.iter_mut().find(|b| &b.id == id) else {
            log::debug!("Ignoring patch for missing booth {id}");
            return false;
        };
        patch.apply(booth);
        true
    }

    /// Remove a booth, returning it if it was present.
    pub fn remove(&mut self, id: &BoothId) -> Option<Booth> {
        let index = self.booths.iter().position(|b| &b.id == id)?;
        Some(self.booths.remove(index))
    }

    pub fn get(&self, id: &BoothId) -> Option<&Booth> {
        self.booths.iter().find(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BoothId) -> bool {
        self.get(id).is_some()
    }

    /// All booths, in insertion order.
    pub fn list(&self) -> &[Booth] {
        &self.booths
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booth> {
        self.booths.iter()
    }

    pub fn len(&self) -> usize {
        self.booths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booths.is_empty()
    }

    /// Topmost booth under a world point (the most recently added wins).
    pub fn booth_at(&self, point: Point) -> Option<&Booth> {
        self.booths.iter().rev().find(|b| b.contains(point))
    }
}

/// Serde adapter between `Vec<Point>` and a flat list of numbers.
mod flat_points {
    use kurbo::Point;
    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(points.len() * 2))?;
        for p in points {
            seq.serialize_element(&p.x)?;
            seq.serialize_element(&p.y)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let numbers = Vec::<f64>::deserialize(deserializer)?;
        if numbers.len() % 2 != 0 {
            return Err(D::Error::custom(format!(
                "points must hold x/y pairs, got {} numbers",
                numbers.len()
            )));
        }
        Ok(numbers
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect())
    }
}
