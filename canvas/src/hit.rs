//! Hit-testing: mapping a world-space point to the element under it.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::consts::LINE_HIT_TOLERANCE;
use crate::scene::{Element, ElementId, ElementKind};

/// Return the id of the element under `world`, scanning in paint order.
///
/// The first match in list order wins, so where elements overlap the
/// bottom-most one is picked.
#[must_use]
pub fn hit_test(elements: &[Element], world: Point) -> Option<ElementId> {
    elements.iter().find(|el| contains(el, world)).map(|el| el.id)
}

fn contains(element: &Element, point: Point) -> bool {
    match element.kind {
        ElementKind::Rect => rect_contains(element, point),
        ElementKind::Line => {
            segment_distance(point, element.line_start(), element.line_end()) < LINE_HIT_TOLERANCE
        }
    }
}

/// Strict interior test: points exactly on the border do not hit.
fn rect_contains(element: &Element, point: Point) -> bool {
    point.x > element.x
        && point.y > element.y
        && point.x < element.x + element.width
        && point.y < element.y + element.height
}

/// Distance from `point` to the closest point on the segment `start`..`end`.
fn segment_distance(point: Point, start: Point, end: Point) -> f64 {
    let seg_x = end.x - start.x;
    let seg_y = end.y - start.y;
    let len_sq = seg_x * seg_x + seg_y * seg_y;
    if len_sq == 0.0 {
        return (point.x - start.x).hypot(point.y - start.y);
    }

    let t = ((point.x - start.x) * seg_x + (point.y - start.y) * seg_y) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let nearest_x = start.x + t * seg_x;
    let nearest_y = start.y + t * seg_y;
    (point.x - nearest_x).hypot(point.y - nearest_y)
}
