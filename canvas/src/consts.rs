//! Shared numeric constants for the canvas crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Maximum distance in world units between a point and a line segment for the
/// segment to count as hit.
pub const LINE_HIT_TOLERANCE: f64 = 60.0;

// ── Geometry ────────────────────────────────────────────────────

/// Elements smaller than this in world units are discarded when a drawing
/// gesture ends, so a click without a drag does not leave invisible shapes
/// behind.
pub const MIN_ELEMENT_SIZE: f64 = 4.0;

// ── Rendering ───────────────────────────────────────────────────

/// Gap between an element and its selection highlight, in screen pixels.
pub const SELECTION_GAP_PX: f64 = 8.0;

/// Stroke color for element outlines.
pub const STROKE_COLOR: &str = "white";

/// Stroke color for the selection highlight.
pub const SELECTION_COLOR: &str = "lightblue";

// ── Camera ──────────────────────────────────────────────────────

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 10.0;

/// Exponential zoom rate per wheel-delta unit for ctrl+wheel zooming.
pub const WHEEL_ZOOM_RATE: f64 = 0.0015;
