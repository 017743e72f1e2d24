//! UI components.

pub mod canvas_host;
pub mod toolbar;
