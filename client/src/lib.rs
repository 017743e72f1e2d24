//! # client
//!
//! Leptos + WASM frontend for the whiteboard: a toolbar and a canvas host
//! wired through a single global tool store. The crate integrates with the
//! `canvas` crate for imperative canvas rendering via the `CanvasHost` bridge
//! component; everything runs client-side (CSR via Trunk).

pub mod app;
pub mod components;
pub mod state;
pub mod util;
