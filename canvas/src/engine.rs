use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::{MIN_ELEMENT_SIZE, WHEEL_ZOOM_RATE};
use crate::hit;
use crate::input::{Button, InputState, Key, Modifiers, Tool, UiState, WheelDelta};
use crate::render;
use crate::scene::{Element, ElementId, ElementKind, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCursor(String),
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Tool / viewport ---

    /// Switch the active tool. Aborts any in-flight gesture; leaving the
    /// select tool drops the selection.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.ui.tool = tool;
        self.input = InputState::Idle;

        let mut actions = Vec::new();
        if tool != Tool::Select && !self.ui.selected.is_empty() {
            self.ui.clear_selection();
            actions.push(Action::RenderNeeded);
        }
        actions.push(Action::SetCursor(self.resting_cursor().to_string()));
        actions
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Queries ---

    /// The selected element ids, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[ElementId] {
        &self.ui.selected
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.scene.get(id)
    }

    // --- Input events ---

    /// Start a gesture: pan (middle button or hand tool), select/drag, or
    /// draw, depending on the button and active tool.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        match button {
            Button::Secondary => return Vec::new(),
            Button::Middle => return self.start_pan(screen_pt),
            Button::Primary => {}
        }

        match self.ui.tool {
            Tool::Hand => self.start_pan(screen_pt),
            Tool::Select => self.select_at(screen_pt, modifiers),
            Tool::Rect => {
                let world = self.camera.screen_to_world(screen_pt);
                self.start_draw(Element::new_rect(world, 0.0, 0.0), world)
            }
            Tool::Line => {
                let world = self.camera.screen_to_world(screen_pt);
                self.start_draw(Element::new_line(world, world), world)
            }
        }
    }

    /// Advance the in-flight gesture. Idle moves are a no-op.
    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
            InputState::DraggingElement { id, grab_offset } => {
                let world = self.camera.screen_to_world(screen_pt);
                let Some(el) = self.scene.get(id) else {
                    return Vec::new();
                };
                // Keep the grabbed element anchored under the pointer.
                let dx = world.x - grab_offset.x - el.x;
                let dy = world.y - grab_offset.y - el.y;
                if dx == 0.0 && dy == 0.0 {
                    return Vec::new();
                }
                for sel_id in &self.ui.selected {
                    if let Some(el) = self.scene.get_mut(*sel_id) {
                        el.translate(dx, dy);
                    }
                }
                if !self.ui.is_selected(id) {
                    if let Some(el) = self.scene.get_mut(id) {
                        el.translate(dx, dy);
                    }
                }
                vec![Action::RenderNeeded]
            }
            InputState::DrawingElement { id, anchor } => {
                let world = self.camera.screen_to_world(screen_pt);
                let Some(el) = self.scene.get_mut(id) else {
                    return Vec::new();
                };
                match el.kind {
                    ElementKind::Rect => {
                        el.x = anchor.x.min(world.x);
                        el.y = anchor.y.min(world.y);
                        el.width = (world.x - anchor.x).abs();
                        el.height = (world.y - anchor.y).abs();
                    }
                    ElementKind::Line => {
                        el.width = world.x;
                        el.height = world.y;
                    }
                }
                vec![Action::RenderNeeded]
            }
        }
    }

    /// End the in-flight gesture. Finishing a draw discards shapes too small
    /// to have been intentional; the active tool persists.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle | InputState::DraggingElement { .. } => Vec::new(),
            InputState::Panning { .. } => {
                vec![Action::SetCursor(self.resting_cursor().to_string()), Action::RenderNeeded]
            }
            InputState::DrawingElement { id, .. } => {
                if self.remove_if_degenerate(id) {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Wheel scroll pans the camera; with ctrl or meta held it zooms about
    /// the cursor instead.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.ctrl || modifiers.meta {
            let factor = (-delta.dy * WHEEL_ZOOM_RATE).exp();
            self.camera.zoom_about(screen_pt, factor);
        } else {
            self.camera.pan_by(-delta.dx, -delta.dy);
        }
        vec![Action::RenderNeeded]
    }

    /// Delete/Backspace removes the selection; Escape cancels the gesture
    /// and selection. Other keys are ignored.
    pub fn on_key_down(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selection(),
            "Escape" => self.cancel_gesture(),
            _ => Vec::new(),
        }
    }

    // --- Gesture helpers ---

    fn start_pan(&mut self, screen_pt: Point) -> Vec<Action> {
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::SetCursor("grabbing".to_string())]
    }

    fn select_at(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        let hit = hit::hit_test(self.scene.elements(), world).and_then(|id| self.scene.get(id)).copied();

        let Some(el) = hit else {
            if self.ui.selected.is_empty() {
                return Vec::new();
            }
            self.ui.clear_selection();
            return vec![Action::RenderNeeded];
        };

        if modifiers.shift {
            self.ui.add_to_selection(el.id);
        } else {
            self.ui.select_only(el.id);
        }
        self.input = InputState::DraggingElement {
            id: el.id,
            grab_offset: Point::new(world.x - el.x, world.y - el.y),
        };
        vec![Action::RenderNeeded]
    }

    fn start_draw(&mut self, element: Element, anchor: Point) -> Vec<Action> {
        let id = element.id;
        self.scene.push(element);
        self.input = InputState::DrawingElement { id, anchor };
        vec![Action::RenderNeeded]
    }

    fn remove_if_degenerate(&mut self, id: ElementId) -> bool {
        let Some(el) = self.scene.get(id) else {
            return false;
        };
        let degenerate = match el.kind {
            ElementKind::Rect => el.width < MIN_ELEMENT_SIZE && el.height < MIN_ELEMENT_SIZE,
            ElementKind::Line => {
                let (start, end) = (el.line_start(), el.line_end());
                (end.x - start.x).hypot(end.y - start.y) < MIN_ELEMENT_SIZE
            }
        };
        if degenerate {
            self.scene.remove(id);
        }
        degenerate
    }

    fn delete_selection(&mut self) -> Vec<Action> {
        if self.ui.selected.is_empty() {
            return Vec::new();
        }
        for id in std::mem::take(&mut self.ui.selected) {
            self.scene.remove(id);
        }
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    fn cancel_gesture(&mut self) -> Vec<Action> {
        let mut changed = !self.ui.selected.is_empty();
        self.ui.clear_selection();

        let mut actions = Vec::new();
        match std::mem::take(&mut self.input) {
            InputState::Idle => {}
            InputState::Panning { .. } => {
                changed = true;
                actions.push(Action::SetCursor(self.resting_cursor().to_string()));
            }
            InputState::DraggingElement { .. } => changed = true,
            InputState::DrawingElement { id, .. } => {
                self.scene.remove(id);
                changed = true;
            }
        }
        if changed {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn resting_cursor(&self) -> &'static str {
        match self.ui.tool {
            Tool::Hand => "grab",
            _ => "pointer",
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the canvas backing store to
    /// CSS size times device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr) as u32);
        self.canvas.set_height((height_css * dpr) as u32);
    }

    // --- Delegated tool / input events ---

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the 2D context is unavailable or a Canvas2D call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(
            &ctx,
            &self.core.scene,
            self.core.camera,
            &self.core.ui,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> &[ElementId] {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.core.element(id)
    }
}
