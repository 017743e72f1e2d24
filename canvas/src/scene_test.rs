#![allow(clippy::float_cmp)]

use super::*;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Element {
    Element::new_rect(Point::new(x, y), w, h)
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Element {
    Element::new_line(Point::new(x1, y1), Point::new(x2, y2))
}

// =============================================================
// Element constructors
// =============================================================

#[test]
fn new_rect_sets_fields() {
    let el = rect(10.0, 20.0, 30.0, 40.0);
    assert_eq!(el.kind, ElementKind::Rect);
    assert_eq!(el.x, 10.0);
    assert_eq!(el.y, 20.0);
    assert_eq!(el.width, 30.0);
    assert_eq!(el.height, 40.0);
}

#[test]
fn new_line_stores_end_point_in_extent_fields() {
    let el = line(1.0, 2.0, 50.0, 60.0);
    assert_eq!(el.kind, ElementKind::Line);
    assert_eq!(el.x, 1.0);
    assert_eq!(el.y, 2.0);
    assert_eq!(el.width, 50.0);
    assert_eq!(el.height, 60.0);
}

#[test]
fn new_elements_get_distinct_ids() {
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let b = rect(0.0, 0.0, 1.0, 1.0);
    assert_ne!(a.id, b.id);
}

#[test]
fn line_endpoint_accessors() {
    let el = line(-5.0, 3.0, 7.0, -9.0);
    assert_eq!(el.line_start(), Point::new(-5.0, 3.0));
    assert_eq!(el.line_end(), Point::new(7.0, -9.0));
}

// =============================================================
// Element::translate
// =============================================================

#[test]
fn translate_rect_moves_origin_only() {
    let mut el = rect(10.0, 10.0, 20.0, 30.0);
    el.translate(5.0, -2.0);
    assert_eq!(el.x, 15.0);
    assert_eq!(el.y, 8.0);
    assert_eq!(el.width, 20.0);
    assert_eq!(el.height, 30.0);
}

#[test]
fn translate_line_moves_both_endpoints() {
    let mut el = line(0.0, 0.0, 10.0, 10.0);
    el.translate(3.0, 4.0);
    assert_eq!(el.line_start(), Point::new(3.0, 4.0));
    assert_eq!(el.line_end(), Point::new(13.0, 14.0));
}

#[test]
fn translate_zero_is_noop() {
    let mut el = line(1.0, 2.0, 3.0, 4.0);
    let before = el;
    el.translate(0.0, 0.0);
    assert_eq!(el, before);
}

// =============================================================
// Scene list operations
// =============================================================

#[test]
fn scene_starts_empty() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
}

#[test]
fn push_preserves_insertion_order() {
    let mut scene = Scene::new();
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let b = line(0.0, 0.0, 1.0, 1.0);
    let c = rect(5.0, 5.0, 1.0, 1.0);
    scene.push(a);
    scene.push(b);
    scene.push(c);
    let ids: Vec<ElementId> = scene.elements().iter().map(|el| el.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[test]
fn get_finds_by_id() {
    let mut scene = Scene::new();
    let el = rect(9.0, 9.0, 2.0, 2.0);
    scene.push(el);
    assert_eq!(scene.get(el.id).map(|e| e.x), Some(9.0));
}

#[test]
fn get_unknown_id_is_none() {
    let scene = Scene::new();
    assert!(scene.get(Uuid::new_v4()).is_none());
}

#[test]
fn get_mut_allows_in_place_edit() {
    let mut scene = Scene::new();
    let el = rect(0.0, 0.0, 1.0, 1.0);
    scene.push(el);
    if let Some(found) = scene.get_mut(el.id) {
        found.width = 99.0;
    }
    assert_eq!(scene.get(el.id).map(|e| e.width), Some(99.0));
}

#[test]
fn remove_returns_element_and_keeps_order() {
    let mut scene = Scene::new();
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let b = rect(1.0, 1.0, 1.0, 1.0);
    let c = rect(2.0, 2.0, 1.0, 1.0);
    scene.push(a);
    scene.push(b);
    scene.push(c);

    let removed = scene.remove(b.id);
    assert_eq!(removed.map(|el| el.id), Some(b.id));

    let ids: Vec<ElementId> = scene.elements().iter().map(|el| el.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
}

#[test]
fn remove_unknown_id_is_none() {
    let mut scene = Scene::new();
    scene.push(rect(0.0, 0.0, 1.0, 1.0));
    assert!(scene.remove(Uuid::new_v4()).is_none());
    assert_eq!(scene.len(), 1);
}
