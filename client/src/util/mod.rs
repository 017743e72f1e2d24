//! Shared client-side helpers.

pub mod canvas_input;
pub mod canvas_viewport;
