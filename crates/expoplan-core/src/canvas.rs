//! Editing session: plan, view, tools and selection.

use crate::booth::{Booth, BoothId, BoothPatch};
use crate::camera::{Camera, ViewState, ZoomDirection};
use crate::company::{CompanyDraft, CompanyId, CompanyPatch};
use crate::config::EditorConfig;
use crate::document::{self, DocumentDecodeError, DocumentRenderer, RasterImage};
use crate::input::PointerEvent;
use crate::plan::{Plan, PlanError};
use crate::shapes::{ShapeGeometry, Template};
use crate::tools::{ToolAction, ToolKind, ToolManager};
use kurbo::{Point, Size, Vec2};

/// Runtime editor state for one editing session.
///
/// Pointer events go in through [`Canvas::handle_event`]; the renderer
/// reads the plan, the camera, the selection and the draft trace back out.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Booths and companies being edited. Removing booths directly here
    /// bypasses selection bookkeeping; prefer [`Canvas::delete_booth`].
    pub plan: Plan,
    /// Camera for view transform.
    pub camera: Camera,
    /// Tool manager.
    pub tool_manager: ToolManager,
    /// Viewport size, as last reported by the host.
    pub viewport_size: Size,
    selection: Option<BoothId>,
    background: Option<RasterImage>,
    config: EditorConfig,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a session with an empty plan and default settings.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create a session with custom settings.
    pub fn with_config(config: EditorConfig) -> Self {
        let config = config.sanitized();
        Self {
            plan: Plan::new(),
            camera: Camera::new(),
            tool_manager: ToolManager::with_min_distance(config.freehand_min_distance),
            viewport_size: config.viewport,
            selection: None,
            background: None,
            config,
        }
    }

    /// Create a session editing an existing plan.
    pub fn with_plan(plan: Plan) -> Self {
        Self {
            plan,
            ..Self::new()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Set the viewport size.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = Size::new(width, height);
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool_manager.set_tool(tool);
    }

    pub fn tool(&self) -> ToolKind {
        self.tool_manager.current_tool
    }

    /// Booths can be dragged only with the select tool.
    pub fn can_drag_booths(&self) -> bool {
        self.tool() == ToolKind::Select
    }

    /// View snapshot for the renderer.
    pub fn view_state(&self) -> ViewState {
        self.camera.view_state()
    }

    // --- Pointer input ---

    /// Dispatch a pointer event.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { .. } => self.pointer_up(),
            PointerEvent::Wheel { position, delta } => self.wheel(position, delta),
        }
    }

    /// Pointer pressed on the empty plan (not on a booth).
    pub fn pointer_down(&mut self, screen: Point) {
        let world = self.camera.screen_to_world(screen);
        let action = self.tool_manager.pointer_down(screen, world, self.camera.offset);
        self.apply(action);
    }

    pub fn pointer_move(&mut self, screen: Point) {
        let world = self.camera.screen_to_world(screen);
        let action = self.tool_manager.pointer_move(screen, world);
        self.apply(action);
    }

    pub fn pointer_up(&mut self) {
        let action = self.tool_manager.pointer_up();
        self.apply(action);
    }

    /// Wheel zoom around the pointer. Works in any gesture state.
    pub fn wheel(&mut self, screen: Point, delta: Vec2) {
        let direction = ZoomDirection::from_wheel_delta(delta.y);
        self.camera
            .zoom_step(screen, direction, self.config.wheel_zoom_step);
    }

    fn apply(&mut self, action: ToolAction) {
        match action {
            ToolAction::None => {}
            ToolAction::ClearSelection => self.clear_selection(),
            ToolAction::SetOffset(offset) => self.camera.offset = offset,
            ToolAction::Place { template, click } => {
                self.place_booth(template, click);
            }
            ToolAction::Commit(geometry) => {
                let id = self.add_booth(geometry);
                self.select(id);
            }
        }
    }

    /// Freehand trace to preview, once it has enough points to draw.
    pub fn draft_preview(&self) -> Option<&[Point]> {
        let points = self.tool_manager.draft_points();
        (points.len() >= 2).then_some(points)
    }

    // --- View ---

    /// Zoom in around the viewport centre.
    pub fn zoom_in(&mut self) {
        self.camera
            .zoom_around_center(self.viewport_size, self.config.button_zoom_step);
    }

    /// Zoom out around the viewport centre.
    pub fn zoom_out(&mut self) {
        self.camera
            .zoom_around_center(self.viewport_size, 1.0 / self.config.button_zoom_step);
    }

    /// Fit the background into the viewport, or reset when there is none.
    pub fn reset_view(&mut self) {
        match self.background {
            Some(image) => self.camera.fit_to_size(image.size(), self.viewport_size),
            None => self.camera.reset(),
        }
    }

    // --- Background document ---

    pub fn background(&self) -> Option<&RasterImage> {
        self.background.as_ref()
    }

    /// Install a finished rasterisation and fit the view to it.
    ///
    /// On error the previous background and view are kept. When several
    /// rasterisations overlap, whichever completes last wins.
    pub fn apply_rasterized(
        &mut self,
        result: Result<RasterImage, DocumentDecodeError>,
    ) -> Result<(), DocumentDecodeError> {
        let image = result.and_then(document::validate).inspect_err(|err| {
            log::warn!("Background document rejected: {err}");
        })?;
        log::info!("Background set to {}x{} image", image.width, image.height);
        self.background = Some(image);
        self.reset_view();
        Ok(())
    }

    /// Rasterise a document with a synchronous renderer and install it.
    pub fn import_document(
        &mut self,
        renderer: &dyn DocumentRenderer,
        bytes: &[u8],
    ) -> Result<(), DocumentDecodeError> {
        self.apply_rasterized(renderer.rasterize(bytes))
    }

    // --- Selection ---

    /// Select a booth (renderer hit-region callback). Unknown ids are ignored.
    pub fn select(&mut self, id: BoothId) {
        if self.plan.booths.contains(&id) {
            self.selection = Some(id);
        } else {
            log::debug!("Ignoring selection of missing booth {id}");
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Selected booth id. An id whose booth no longer exists reads as none.
    pub fn selection(&self) -> Option<&BoothId> {
        self.selection
            .as_ref()
            .filter(|id| self.plan.booths.contains(id))
    }

    pub fn is_selected(&self, id: &BoothId) -> bool {
        self.selection() == Some(id)
    }

    pub fn selected_booth(&self) -> Option<&Booth> {
        self.selection.as_ref().and_then(|id| self.plan.booths.get(id))
    }

    // --- Booths ---

    /// Add a booth with a fresh id and the next default name.
    pub fn add_booth(&mut self, geometry: ShapeGeometry) -> BoothId {
        let id = BoothId::new();
        let name = format!("Booth {}", self.plan.booths.len() + 1);
        log::debug!("Adding {:?} booth {id} at {:?}", geometry.kind, geometry.anchor);
        self.plan.booths.add(Booth::new(id.clone(), name, geometry));
        id
    }

    /// Place a template centred on a world-space click and select it.
    ///
    /// Centring uses half the default booth size for every template.
    pub fn place_booth(&mut self, template: Template, click: Point) -> BoothId {
        let size = self.config.default_booth_size;
        let anchor = Point::new(click.x - size.width / 2.0, click.y - size.height / 2.0);
        let id = self.add_booth(template.instantiate(anchor, size));
        self.select(id.clone());
        id
    }

    /// Drag a booth to a new anchor.
    pub fn move_booth(&mut self, id: &BoothId, anchor: Point) -> bool {
        self.plan.booths.patch(id, &BoothPatch::moved_to(anchor))
    }

    pub fn update_booth(&mut self, id: &BoothId, patch: &BoothPatch) -> bool {
        self.plan.booths.patch(id, patch)
    }

    /// Delete a booth, clearing the selection if it pointed at it.
    pub fn delete_booth(&mut self, id: &BoothId) -> Option<Booth> {
        if self.is_selected(id) {
            self.selection = None;
        }
        self.plan.booths.remove(id)
    }

    /// Delete the selected booth, if any.
    pub fn delete_selected(&mut self) -> Option<Booth> {
        let id = self.selection.take()?;
        self.plan.booths.remove(&id)
    }

    /// Company name shown for a booth, or the unassigned sentinel.
    pub fn company_name(&self, booth: &Booth) -> &str {
        self.plan.company_name(booth)
    }

    /// Multi-line info text for a booth (shown on double-click).
    pub fn booth_summary(&self, id: &BoothId) -> Option<String> {
        let booth = self.plan.booths.get(id)?;
        Some(format!(
            "Booth: {}\nStatus: {}\nCompany: {}",
            booth.name,
            booth.status.label(),
            self.company_name(booth)
        ))
    }

    // --- Companies ---

    /// Submit the company form. Returns `None` if the name is blank.
    pub fn add_company(&mut self, draft: CompanyDraft) -> Option<CompanyId> {
        let Some(company) = draft.into_company(CompanyId::new()) else {
            log::debug!("Rejected company with blank name");
            return None;
        };
        let id = company.id().clone();
        self.plan.companies.add(company);
        Some(id)
    }

    pub fn update_company(&mut self, id: &CompanyId, patch: &CompanyPatch) -> bool {
        self.plan.companies.patch(id, patch)
    }

    /// Delete a company. Booths keep their (now dangling) reference.
    pub fn delete_company(&mut self, id: &CompanyId) -> bool {
        self.plan.companies.remove(id).is_some()
    }

    // --- Persistence ---

    /// Serialize the current plan.
    pub fn export_plan(&self) -> Result<Vec<u8>, PlanError> {
        let bytes = self.plan.export()?;
        log::info!(
            "Exported plan: {} booths, {} companies",
            self.plan.booths.len(),
            self.plan.companies.len()
        );
        Ok(bytes)
    }

    /// Replace the whole plan with an imported one.
    ///
    /// On error nothing changes. On success the selection survives only
    /// if the selected id exists in the new plan.
    pub fn import_plan(&mut self, bytes: &[u8]) -> Result<(), PlanError> {
        let plan = Plan::import(bytes).inspect_err(|err| {
            log::warn!("Plan import failed: {err}");
        })?;
        log::info!(
            "Imported plan: {} booths, {} companies",
            plan.booths.len(),
            plan.companies.len()
        );
        self.plan = plan;
        if self
            .selection
            .as_ref()
            .is_some_and(|id| !self.plan.booths.contains(id))
        {
            self.selection = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::{CompanyRef, UNASSIGNED};
    use crate::document::ImageHandle;
    use crate::shapes::{BoothStatus, ShapeKind};

    fn down(canvas: &mut Canvas, x: f64, y: f64) {
        canvas.handle_event(PointerEvent::Down { position: Point::new(x, y) });
    }

    fn drag(canvas: &mut Canvas, x: f64, y: f64) {
        canvas.handle_event(PointerEvent::Move { position: Point::new(x, y) });
    }

    fn up(canvas: &mut Canvas, x: f64, y: f64) {
        canvas.handle_event(PointerEvent::Up { position: Point::new(x, y) });
    }

    struct FakeRenderer;

    impl DocumentRenderer for FakeRenderer {
        fn rasterize(&self, document: &[u8]) -> Result<RasterImage, DocumentDecodeError> {
            if document.starts_with(b"%PDF") {
                Ok(RasterImage {
                    handle: ImageHandle(7),
                    width: 720,
                    height: 1120,
                })
            } else {
                Err(DocumentDecodeError::InvalidDocument("missing header".to_string()))
            }
        }
    }

    #[test]
    fn test_rectangle_placement_scenario() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 100.0, 100.0);
        up(&mut canvas, 100.0, 100.0);

        assert_eq!(canvas.plan.booths.len(), 1);
        let booth = &canvas.plan.booths.list()[0];
        assert_eq!(booth.shape, ShapeKind::Rectangle);
        assert_eq!((booth.x, booth.y), (40.0, 60.0));
        assert_eq!((booth.w, booth.h), (120.0, 80.0));
        assert!(booth.points.is_empty());
        assert_eq!(booth.name, "Booth 1");
        assert_eq!(booth.status, BoothStatus::Available);
        assert!(canvas.is_selected(booth.id()));
    }

    #[test]
    fn test_placement_uses_world_coordinates() {
        let mut canvas = Canvas::new();
        canvas.camera.offset = Vec2::new(20.0, 20.0);
        canvas.camera.zoom_at(Point::new(20.0, 20.0), 2.0);
        canvas.set_tool(ToolKind::TemplateL);
        down(&mut canvas, 220.0, 220.0);

        let booth = &canvas.plan.booths.list()[0];
        assert_eq!(booth.shape, ShapeKind::TemplateL);
        assert_eq!((booth.x, booth.y), (40.0, 60.0));
        assert_eq!((booth.w, booth.h), (120.0, 120.0));
        assert_eq!(booth.points.len(), 6);
    }

    #[test]
    fn test_booth_names_follow_count() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::TemplateI);
        for i in 0..3 {
            down(&mut canvas, f64::from(i) * 200.0, 0.0);
            up(&mut canvas, f64::from(i) * 200.0, 0.0);
        }
        let names: Vec<&str> = canvas.plan.booths.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Booth 1", "Booth 2", "Booth 3"]);
    }

    #[test]
    fn test_freehand_scenario() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Freehand);
        down(&mut canvas, 10.0, 10.0);
        assert!(canvas.draft_preview().is_none());
        drag(&mut canvas, 60.0, 10.0);
        assert_eq!(canvas.draft_preview().map(<[Point]>::len), Some(2));
        drag(&mut canvas, 40.0, 50.0);
        up(&mut canvas, 40.0, 50.0);

        assert_eq!(canvas.plan.booths.len(), 1);
        let booth = &canvas.plan.booths.list()[0];
        assert_eq!(booth.shape, ShapeKind::FreehandPolygon);
        assert_eq!(booth.anchor(), Point::new(10.0, 10.0));
        assert_eq!((booth.w, booth.h), (0.0, 0.0));
        assert_eq!(
            booth.points,
            vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0), Point::new(30.0, 40.0)]
        );
        assert!(canvas.is_selected(booth.id()));
        assert!(canvas.draft_preview().is_none());
    }

    #[test]
    fn test_freehand_click_creates_nothing() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 0.0, 0.0);
        let placed = canvas.selection().cloned().unwrap();

        canvas.set_tool(ToolKind::Freehand);
        down(&mut canvas, 300.0, 300.0);
        up(&mut canvas, 300.0, 300.0);

        assert_eq!(canvas.plan.booths.len(), 1);
        assert!(!canvas.tool_manager.is_active());
        // Starting a freehand gesture deselects.
        assert!(!canvas.is_selected(&placed));
    }

    #[test]
    fn test_select_tool_deselects() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 0.0, 0.0);
        assert!(canvas.selection().is_some());

        canvas.set_tool(ToolKind::Select);
        down(&mut canvas, 500.0, 500.0);
        up(&mut canvas, 500.0, 500.0);
        assert!(canvas.selection().is_none());
        assert_eq!(canvas.plan.booths.len(), 1);
        assert!(canvas.can_drag_booths());
    }

    #[test]
    fn test_pan_scenario() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Pan);
        down(&mut canvas, 100.0, 100.0);
        drag(&mut canvas, 130.0, 90.0);
        drag(&mut canvas, 150.0, 120.0);
        up(&mut canvas, 150.0, 120.0);
        assert_eq!(canvas.view_state(), ViewState { x: 50.0, y: 20.0, scale: 1.0 });
        assert!(!canvas.can_drag_booths());

        drag(&mut canvas, 400.0, 400.0);
        assert_eq!(canvas.camera.offset, Vec2::new(50.0, 20.0));
    }

    #[test]
    fn test_wheel_during_pan_keeps_gesture() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Pan);
        down(&mut canvas, 0.0, 0.0);
        canvas.handle_event(PointerEvent::Wheel {
            position: Point::new(50.0, 50.0),
            delta: Vec2::new(0.0, -100.0),
        });
        assert!(canvas.tool_manager.is_active());
        assert!((canvas.camera.scale() - 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_wheel_zoom_anchor() {
        let mut canvas = Canvas::new();
        let cursor = Point::new(123.0, 77.0);
        for dy in [-1.0, -1.0, 1.0, -1.0] {
            let before = canvas.camera.screen_to_world(cursor);
            canvas.wheel(cursor, Vec2::new(0.0, dy));
            let after = canvas.camera.screen_to_world(cursor);
            assert!((before.x - after.x).abs() < 1e-9);
            assert!((before.y - after.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zoom_buttons_and_reset() {
        let mut canvas = Canvas::new();
        canvas.set_viewport_size(400.0, 300.0);
        canvas.zoom_in();
        assert!((canvas.camera.scale() - 1.2).abs() < 1e-12);
        canvas.zoom_out();
        assert!((canvas.camera.scale() - 1.0).abs() < 1e-12);

        canvas.zoom_in();
        canvas.reset_view();
        assert_eq!(canvas.view_state(), ViewState { x: 0.0, y: 0.0, scale: 1.0 });
    }

    #[test]
    fn test_document_import_fits_view() {
        let mut canvas = Canvas::new();
        canvas.set_viewport_size(360.0, 560.0);
        canvas.import_document(&FakeRenderer, b"%PDF-1.7").unwrap();

        assert_eq!(canvas.background().unwrap().handle, ImageHandle(7));
        assert!((canvas.camera.scale() - 0.5).abs() < 1e-12);
        assert!((canvas.camera.offset.x - 0.0).abs() < 1e-12);
        assert!((canvas.camera.offset.y - 0.0).abs() < 1e-12);

        canvas.zoom_in();
        canvas.reset_view();
        assert!((canvas.camera.scale() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_document_keeps_state() {
        let mut canvas = Canvas::new();
        canvas.import_document(&FakeRenderer, b"%PDF").unwrap();
        let view = canvas.view_state();

        let err = canvas.import_document(&FakeRenderer, b"GIF89a").unwrap_err();
        assert!(matches!(err, DocumentDecodeError::InvalidDocument(_)));
        assert_eq!(canvas.background().unwrap().handle, ImageHandle(7));
        assert_eq!(canvas.view_state(), view);

        let empty = Ok(RasterImage {
            handle: ImageHandle(9),
            width: 0,
            height: 0,
        });
        assert!(canvas.apply_rasterized(empty).is_err());
        assert_eq!(canvas.background().unwrap().handle, ImageHandle(7));
    }

    #[test]
    fn test_last_rasterization_wins() {
        let mut canvas = Canvas::new();
        for handle in [1, 2] {
            canvas
                .apply_rasterized(Ok(RasterImage {
                    handle: ImageHandle(handle),
                    width: 100,
                    height: 100,
                }))
                .unwrap();
        }
        assert_eq!(canvas.background().unwrap().handle, ImageHandle(2));
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 0.0, 0.0);
        down(&mut canvas, 300.0, 0.0);
        let second = canvas.selection().cloned().unwrap();
        let first = canvas.plan.booths.list()[0].id().clone();

        canvas.delete_booth(&first);
        assert_eq!(canvas.selection(), Some(&second));

        canvas.delete_booth(&second);
        assert!(canvas.selection().is_none());
        assert!(canvas.plan.booths.is_empty());

        assert!(canvas.delete_booth(&second).is_none());
        assert!(canvas.delete_selected().is_none());
    }

    #[test]
    fn test_direct_store_removal_hides_selection() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 0.0, 0.0);
        let id = canvas.selection().cloned().unwrap();

        canvas.plan.booths.remove(&id);
        assert!(canvas.selection().is_none());
        assert!(!canvas.is_selected(&id));
        assert!(canvas.selected_booth().is_none());
        assert!(canvas.delete_selected().is_none());
    }

    #[test]
    fn test_delete_selected() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::TemplateU);
        down(&mut canvas, 0.0, 0.0);
        assert!(canvas.delete_selected().is_some());
        assert!(canvas.plan.booths.is_empty());
        assert!(canvas.selected_booth().is_none());
    }

    #[test]
    fn test_move_booth_only_changes_anchor() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::TemplateU);
        down(&mut canvas, 0.0, 0.0);
        let id = canvas.selection().cloned().unwrap();
        let points = canvas.selected_booth().unwrap().points.clone();

        assert!(canvas.move_booth(&id, Point::new(500.0, 250.0)));
        let booth = canvas.selected_booth().unwrap();
        assert_eq!(booth.anchor(), Point::new(500.0, 250.0));
        assert_eq!(booth.points, points);
        assert!(!canvas.move_booth(&BoothId::from("nope"), Point::ZERO));
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut canvas = Canvas::new();
        canvas.select(BoothId::from("ghost"));
        assert!(canvas.selection().is_none());
    }

    #[test]
    fn test_company_assignment_and_dangling_delete() {
        let mut canvas = Canvas::new();
        let acme = canvas
            .add_company(CompanyDraft {
                name: "Acme".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert!(canvas.add_company(CompanyDraft::default()).is_none());

        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 0.0, 0.0);
        let booth_id = canvas.selection().cloned().unwrap();
        let patch = BoothPatch {
            status: Some(BoothStatus::Reserved),
            company: Some(Some(CompanyRef::to(&acme))),
            ..Default::default()
        };
        assert!(canvas.update_booth(&booth_id, &patch));
        assert_eq!(
            canvas.booth_summary(&booth_id).unwrap(),
            "Booth: Booth 1\nStatus: Reserved\nCompany: Acme"
        );

        assert!(canvas.delete_company(&acme));
        let booth = canvas.plan.booths.get(&booth_id).unwrap();
        assert_eq!(booth.company_id.as_ref().map(CompanyRef::id), Some(&acme));
        assert_eq!(canvas.company_name(booth), UNASSIGNED);
        assert!(!canvas.delete_company(&acme));
    }

    #[test]
    fn test_update_company() {
        let mut canvas = Canvas::new();
        let id = canvas
            .add_company(CompanyDraft {
                name: "Initech".to_string(),
                ..Default::default()
            })
            .unwrap();
        let patch = CompanyPatch {
            phone: Some(Some("555-0100".to_string())),
            ..Default::default()
        };
        assert!(canvas.update_company(&id, &patch));
        assert_eq!(
            canvas.plan.companies.get(&id).unwrap().phone.as_deref(),
            Some("555-0100")
        );
    }

    #[test]
    fn test_import_companies_scenario() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 0.0, 0.0);

        canvas
            .import_plan(br#"{"booths":[],"companies":[{"id":"c1","name":"Acme"}]}"#)
            .unwrap();
        assert!(canvas.plan.booths.is_empty());
        assert_eq!(canvas.plan.companies.len(), 1);
        assert_eq!(canvas.plan.companies.list()[0].name, "Acme");
        assert!(canvas.selection().is_none());
    }

    #[test]
    fn test_malformed_import_keeps_state() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 0.0, 0.0);
        canvas.add_company(CompanyDraft {
            name: "Acme".to_string(),
            ..Default::default()
        });
        let before = canvas.plan.clone();
        let selection = canvas.selection().cloned();

        let err = canvas.import_plan(b"{\"booths\": [").unwrap_err();
        assert!(matches!(err, PlanError::Format(_)));
        assert_eq!(canvas.plan, before);
        assert_eq!(canvas.selection().cloned(), selection);

        // Still usable afterwards.
        down(&mut canvas, 400.0, 0.0);
        assert_eq!(canvas.plan.booths.len(), 2);
    }

    #[test]
    fn test_export_import_roundtrip() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 10.0, 10.0);
        canvas.set_tool(ToolKind::Freehand);
        down(&mut canvas, 33.3, 44.4);
        drag(&mut canvas, 77.7, 12.1);
        drag(&mut canvas, 50.05, 99.9);
        up(&mut canvas, 50.05, 99.9);
        canvas.add_company(CompanyDraft {
            name: "Acme".to_string(),
            website: "acme.test".to_string(),
            ..Default::default()
        });

        let bytes = canvas.export_plan().unwrap();
        let mut other = Canvas::new();
        other.import_plan(&bytes).unwrap();
        assert_eq!(other.plan, canvas.plan);
    }

    #[test]
    fn test_import_keeps_selection_when_id_survives() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 0.0, 0.0);
        let bytes = canvas.export_plan().unwrap();
        let selected = canvas.selection().cloned();

        canvas.import_plan(&bytes).unwrap();
        assert_eq!(canvas.selection().cloned(), selected);
    }

    #[test]
    fn test_config_drives_defaults() {
        let config = EditorConfig {
            default_booth_size: Size::new(200.0, 100.0),
            freehand_min_distance: 10.0,
            ..EditorConfig::default()
        };
        let mut canvas = Canvas::with_config(config);
        canvas.set_tool(ToolKind::Rectangle);
        down(&mut canvas, 100.0, 100.0);
        let booth = &canvas.plan.booths.list()[0];
        assert_eq!((booth.x, booth.y, booth.w, booth.h), (0.0, 50.0, 200.0, 100.0));

        canvas.set_tool(ToolKind::Freehand);
        down(&mut canvas, 0.0, 0.0);
        drag(&mut canvas, 3.0, 0.0);
        drag(&mut canvas, 12.0, 0.0);
        assert_eq!(canvas.tool_manager.draft_points().len(), 2);
    }
}
