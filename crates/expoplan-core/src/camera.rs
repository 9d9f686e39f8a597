//! Camera module for pan/zoom transforms.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.2;
/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 5.0;

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scrolling down (positive delta) zooms out, anything else zooms in.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            ZoomDirection::Out
        } else {
            ZoomDirection::In
        }
    }
}

/// Plain `{x, y, scale}` snapshot of the view, as consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Camera manages the view transform for the plan.
///
/// World coordinates are the coordinates of the plan content (background
/// image pixels and booth anchors). Screen coordinates are viewport pixels
/// as delivered by pointer events. `screen = world * scale + offset`.
///
/// The scale is kept inside `[MIN_SCALE, MAX_SCALE]` by every operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Current translation offset (pan), in screen units.
    pub offset: Vec2,
    scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

impl Camera {
    /// Create a new camera at the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Snapshot of the view for rendering.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            x: self.offset.x,
            y: self.offset.y,
            scale: self.scale,
        }
    }

    /// Get the affine transform for rendering (world to screen).
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        Point::new(
            (screen_point.x - self.offset.x) / self.scale,
            (screen_point.y - self.offset.y) / self.scale,
        )
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        Point::new(
            world_point.x * self.scale + self.offset.x,
            world_point.y * self.scale + self.offset.y,
        )
    }

    /// Pan relative to where a drag started.
    ///
    /// The new offset is `origin + (current - start)`, so repeated calls
    /// during one drag never accumulate rounding drift.
    pub fn pan_from(&mut self, origin: Vec2, start: Point, current: Point) {
        self.offset = origin + (current - start);
    }

    /// Set a new scale while keeping the world point under `screen_point` fixed.
    fn rescale_at(&mut self, screen_point: Point, requested: f64) {
        let world_point = self.screen_to_world(screen_point);
        let new_scale = clamp_scale(requested);
        self.offset = screen_point.to_vec2() - world_point.to_vec2() * new_scale;
        self.scale = new_scale;
    }

    /// Zoom by `factor`, keeping the given screen point fixed.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        self.rescale_at(screen_point, self.scale * factor);
    }

    /// One wheel step: multiply or divide the scale by `step`.
    pub fn zoom_step(&mut self, screen_point: Point, direction: ZoomDirection, step: f64) {
        let requested = match direction {
            ZoomDirection::In => self.scale * step,
            ZoomDirection::Out => self.scale / step,
        };
        self.rescale_at(screen_point, requested);
    }

    /// Zoom by `factor` around the centre of the viewport.
    pub fn zoom_around_center(&mut self, viewport: Size, factor: f64) {
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        self.zoom_at(center, factor);
    }

    /// Reset camera to the identity transform.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.scale = 1.0;
    }

    /// Fit content of the given size into the viewport and centre it.
    ///
    /// Content without area resets the camera instead.
    pub fn fit_to_size(&mut self, content: Size, viewport: Size) {
        if content.width <= 0.0 || content.height <= 0.0 {
            self.reset();
            return;
        }

        let fit = (viewport.width / content.width).min(viewport.height / content.height);
        self.scale = clamp_scale(fit);
        self.offset = Vec2::new(
            (viewport.width - content.width * self.scale) / 2.0,
            (viewport.height - content.height * self.scale) / 2.0,
        );
    }
}
