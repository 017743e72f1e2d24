//! Local UI chrome state (the active tool).
//!
//! DESIGN
//! ======
//! Keeps tool choice out of the canvas host so the toolbar and canvas can
//! evolve independently. Components read it from context as
//! `RwSignal<UiState>`; the canvas host pushes changes into the engine.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::input::Tool;

/// UI state for the active tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tool: Tool,
}
