//! Input vocabulary and gesture state for the engine.
//!
//! The types here are deliberately DOM-free: the client maps raw browser
//! events into them, and [`crate::engine::EngineCore`] consumes them. That
//! keeps every gesture unit-testable without a browser.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::scene::ElementId;

/// The active interaction mode, selected from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pan the canvas by dragging.
    Hand,
    /// Select and drag elements.
    Select,
    /// Draw rectangles.
    #[default]
    Rect,
    /// Draw lines.
    Line,
}

/// Keyboard modifier state carried on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer button, already collapsed from the DOM's numeric encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

/// A keyboard key by its DOM `key` value (e.g. `"Escape"`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel scroll delta in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Tool and selection state shared between the engine and its host.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub tool: Tool,
    pub selected: Vec<ElementId>,
}

impl UiState {
    #[must_use]
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected.contains(&id)
    }

    /// Replace the selection with a single element.
    pub fn select_only(&mut self, id: ElementId) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Extend the selection; already-selected ids are not duplicated.
    pub fn add_to_selection(&mut self, id: ElementId) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

/// The in-flight pointer gesture, if any.
///
/// Exactly one gesture can be active; pointer-up (or Escape) returns the
/// engine to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    /// Panning the camera; `last_screen` is the previous pointer position.
    Panning { last_screen: Point },
    /// Dragging the selection. `grab_offset` is the world-space offset from
    /// the dragged element's origin to the pointer at gesture start.
    DraggingElement { id: ElementId, grab_offset: Point },
    /// Sizing a freshly created element; `anchor` is the pointer-down point.
    DrawingElement { id: ElementId, anchor: Point },
}
