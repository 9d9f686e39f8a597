//! Tool system: which tool is active and which gesture is in progress.
//!
//! The tool manager never touches the plan or the camera itself. Each
//! pointer callback returns a [`ToolAction`] that the canvas applies, so
//! the gesture logic can be exercised without any editor state.

use crate::shapes::{ShapeGeometry, Template, finalize_trace};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Pan,
    Rectangle,
    TemplateI,
    TemplateL,
    TemplateU,
    Freehand,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 7] = [
        ToolKind::Select,
        ToolKind::Pan,
        ToolKind::Rectangle,
        ToolKind::TemplateI,
        ToolKind::TemplateL,
        ToolKind::TemplateU,
        ToolKind::Freehand,
    ];

    /// The template this tool places on click, if it is a placement tool.
    pub fn template(self) -> Option<Template> {
        match self {
            ToolKind::Rectangle => Some(Template::Rectangle),
            ToolKind::TemplateI => Some(Template::I),
            ToolKind::TemplateL => Some(Template::L),
            ToolKind::TemplateU => Some(Template::U),
            ToolKind::Select | ToolKind::Pan | ToolKind::Freehand => None,
        }
    }
}

/// Gesture in progress. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToolState {
    /// Waiting for a pointer-down.
    #[default]
    Idle,
    /// Dragging the view.
    Panning {
        /// Screen position of the pointer-down.
        start: Point,
        /// Camera offset at the pointer-down.
        origin: Vec2,
    },
    /// Capturing a freehand outline.
    DrawingFreehand {
        /// Captured points in world coordinates.
        points: Vec<Point>,
    },
}

/// What the canvas must do in response to a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolAction {
    /// Nothing to apply.
    None,
    /// Drop the current selection.
    ClearSelection,
    /// Set the camera offset.
    SetOffset(Vec2),
    /// Place a template at a world-space click point.
    Place {
        template: Template,
        click: Point,
    },
    /// Add a finished freehand booth.
    Commit(ShapeGeometry),
}

/// Manages the current tool and its gesture state.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    state: ToolState,
    /// Minimum spacing between captured freehand points (0 keeps all).
    min_distance: f64,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tool manager that thins freehand traces.
    pub fn with_min_distance(min_distance: f64) -> Self {
        Self {
            min_distance,
            ..Self::default()
        }
    }

    /// Current gesture state.
    pub fn state(&self) -> &ToolState {
        &self.state
    }

    /// Set the current tool. A gesture still in progress is abandoned.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.is_active() {
            log::debug!("Tool switched to {tool:?} mid-gesture, abandoning it");
        }
        self.current_tool = tool;
        self.state = ToolState::Idle;
    }

    /// Check if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, ToolState::Idle)
    }

    /// Freehand points captured so far (empty unless drawing).
    pub fn draft_points(&self) -> &[Point] {
        match &self.state {
            ToolState::DrawingFreehand { points } => points,
            ToolState::Idle | ToolState::Panning { .. } => &[],
        }
    }

    /// Start a gesture.
    ///
    /// `screen` is the raw pointer position, `world` the same point in
    /// world space, `offset` the current camera offset.
    pub fn pointer_down(&mut self, screen: Point, world: Point, offset: Vec2) -> ToolAction {
        if self.is_active() {
            log::debug!("Pointer down during {:?}, restarting gesture", self.state);
            self.state = ToolState::Idle;
        }

        match (self.current_tool, self.current_tool.template()) {
            (_, Some(template)) => ToolAction::Place {
                template,
                click: world,
            },
            (ToolKind::Pan, None) => {
                self.state = ToolState::Panning {
                    start: screen,
                    origin: offset,
                };
                ToolAction::None
            }
            (ToolKind::Freehand, None) => {
                self.state = ToolState::DrawingFreehand {
                    points: vec![world],
                };
                ToolAction::ClearSelection
            }
            (_, None) => ToolAction::ClearSelection,
        }
    }

    /// Continue the gesture.
    pub fn pointer_move(&mut self, screen: Point, world: Point) -> ToolAction {
        let min_distance = self.min_distance;
        match &mut self.state {
            ToolState::Idle => ToolAction::None,
            ToolState::Panning { start, origin } => ToolAction::SetOffset(*origin + (screen - *start)),
            ToolState::DrawingFreehand { points } => {
                let far_enough = points
                    .last()
                    .is_none_or(|last| min_distance <= 0.0 || last.distance(world) >= min_distance);
                if far_enough {
                    points.push(world);
                }
                ToolAction::None
            }
        }
    }

    /// Finish the gesture and return to idle.
    ///
    /// A freehand trace shorter than two points is dropped without a
    /// booth being created.
    pub fn pointer_up(&mut self) -> ToolAction {
        match std::mem::take(&mut self.state) {
            ToolState::Idle | ToolState::Panning { .. } => ToolAction::None,
            ToolState::DrawingFreehand { points } => match finalize_trace(&points) {
                Ok(geometry) => ToolAction::Commit(geometry),
                Err(err) => {
                    log::debug!("Discarding freehand gesture: {err}");
                    ToolAction::None
                }
            },
        }
    }

    /// Cancel the current gesture.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
    }
}
