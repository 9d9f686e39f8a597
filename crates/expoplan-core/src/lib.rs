//! ExpoPlan Core Library
//!
//! Platform-agnostic data model and interaction logic for the ExpoPlan
//! floor-plan editor: booths drawn over a rasterised background document,
//! a pan/zoom camera, and a tool state machine fed by pointer events.

pub mod booth;
pub mod camera;
pub mod canvas;
pub mod company;
pub mod config;
pub mod document;
pub mod input;
pub mod plan;
pub mod shapes;
pub mod storage;
pub mod tools;

pub use booth::{Booth, BoothId, BoothPatch, BoothStore};
pub use camera::{Camera, MAX_SCALE, MIN_SCALE, ViewState, ZoomDirection};
pub use canvas::Canvas;
pub use company::{Company, CompanyDraft, CompanyId, CompanyPatch, CompanyRef, CompanyStore, UNASSIGNED};
pub use config::EditorConfig;
pub use document::{DocumentDecodeError, DocumentRenderer, ImageHandle, RasterImage};
pub use input::PointerEvent;
pub use plan::{DEFAULT_PLAN_FILE_NAME, Plan, PlanError};
pub use shapes::{BoothStatus, DegenerateShape, Outline, ShapeGeometry, ShapeKind, Template};
pub use tools::{ToolAction, ToolKind, ToolManager, ToolState};
