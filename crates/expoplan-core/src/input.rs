//! Pointer events delivered by the renderer.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer event in screen coordinates.
///
/// Mouse, pen and touch all arrive as the same stream; the editor does
/// not distinguish buttons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    Wheel { position: Point, delta: Vec2 },
}

impl PointerEvent {
    /// Screen position of the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Wheel { position, .. } => position,
        }
    }
}
