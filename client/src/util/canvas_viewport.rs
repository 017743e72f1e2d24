//! Canvas viewport synchronization helpers shared by the canvas host.

use leptos::prelude::*;

use canvas::engine::Engine;

/// Read the canvas element's CSS dimensions and device pixel ratio, then push
/// them to the engine.
///
/// Must be called whenever the window may have resized so that coordinate
/// transforms stay accurate. Uses CSS pixel dimensions (`client_width` /
/// `client_height`) rather than backing-store pixels; the engine multiplies
/// by DPR internally when sizing the canvas backing store.
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}

/// Milliseconds since the epoch, for render timing.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
