//! Canvas rendering and input engine for the whiteboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the canvas: translating raw DOM input events into scene
//! mutations, maintaining camera state for pan/zoom, hit-testing elements, and
//! rendering the scene. The host layer is responsible only for wiring DOM
//! events to the engine and applying the resulting [`engine::Action`]s
//! (scheduling repaints, setting the cursor).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | In-memory element list and element types |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against scene elements |
//! | [`render`] | Scene rendering |
//! | [`consts`] | Shared numeric constants (zoom limits, tolerances, colors) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
pub mod scene;
