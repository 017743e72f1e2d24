//! Rendering: draws the full canvas scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of scene and camera state and produces pixels —
//! it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;
use crate::consts::{SELECTION_COLOR, SELECTION_GAP_PX, STROKE_COLOR};
use crate::input::UiState;
use crate::scene::{Element, ElementKind, Scene};

/// Draw the full scene: elements and selection highlights.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel
/// ratio. Elements paint in list order; strokes are kept at one screen pixel
/// by dividing the line width by the zoom factor.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    camera: Camera,
    ui: &UiState,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear and set up transforms so element drawing happens in
    // world coordinates.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;
    ctx.set_line_width(1.0 / camera.zoom);

    // Layer 2: elements in paint order (bottom first).
    for el in scene.elements() {
        draw_element(ctx, el);
    }

    // Layer 3: selection highlights, offset by a fixed screen-space gap.
    let gap = SELECTION_GAP_PX / camera.zoom;
    for sel_id in &ui.selected {
        if let Some(el) = scene.get(*sel_id) {
            draw_selection(ctx, el, gap);
        }
    }

    Ok(())
}

// =============================================================
// Element renderers
// =============================================================

fn draw_element(ctx: &CanvasRenderingContext2d, el: &Element) {
    ctx.set_stroke_style_str(STROKE_COLOR);
    match el.kind {
        ElementKind::Rect => ctx.stroke_rect(el.x, el.y, el.width, el.height),
        ElementKind::Line => {
            let (start, end) = (el.line_start(), el.line_end());
            ctx.begin_path();
            ctx.move_to(start.x, start.y);
            ctx.line_to(end.x, end.y);
            ctx.stroke();
        }
    }
}

// =============================================================
// Selection UI
// =============================================================

fn draw_selection(ctx: &CanvasRenderingContext2d, el: &Element, gap: f64) {
    ctx.set_stroke_style_str(SELECTION_COLOR);
    match el.kind {
        ElementKind::Rect => ctx.stroke_rect(
            el.x - gap,
            el.y - gap,
            el.width + gap * 2.0,
            el.height + gap * 2.0,
        ),
        // Lines get a pair of parallels offset horizontally to either side.
        ElementKind::Line => {
            let (start, end) = (el.line_start(), el.line_end());
            ctx.begin_path();
            ctx.move_to(start.x + gap, start.y);
            ctx.line_to(end.x + gap, end.y);
            ctx.move_to(start.x - gap, start.y);
            ctx.line_to(end.x - gap, end.y);
            ctx.stroke();
        }
    }
}
