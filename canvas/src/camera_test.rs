#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, -4.5);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, -4.5);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

// --- screen_to_world ---

#[test]
fn screen_to_world_identity() {
    let cam = Camera::default();
    let world = cam.screen_to_world(Point::new(120.0, 45.0));
    assert!(point_approx_eq(world, Point::new(120.0, 45.0)));
}

#[test]
fn screen_to_world_with_pan() {
    let cam = Camera { pan_x: 30.0, pan_y: -10.0, zoom: 1.0 };
    let world = cam.screen_to_world(Point::new(30.0, -10.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
}

#[test]
fn screen_to_world_with_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(50.0, 80.0));
    assert!(point_approx_eq(world, Point::new(25.0, 40.0)));
}

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 100.0, pan_y: 40.0, zoom: 4.0 };
    let world = cam.screen_to_world(Point::new(140.0, 80.0));
    assert!(point_approx_eq(world, Point::new(10.0, 10.0)));
}

// --- world_to_screen ---

#[test]
fn world_to_screen_identity() {
    let cam = Camera::default();
    let screen = cam.world_to_screen(Point::new(-7.0, 9.0));
    assert!(point_approx_eq(screen, Point::new(-7.0, 9.0)));
}

#[test]
fn world_to_screen_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 3.0 };
    let screen = cam.world_to_screen(Point::new(5.0, 5.0));
    assert!(approx_eq(screen.x, 35.0));
    assert!(approx_eq(screen.y, 25.0));
}

// --- Round trips ---

#[test]
fn round_trip_world_first() {
    let cam = Camera { pan_x: 50.0, pan_y: -30.0, zoom: 2.5 };
    let world = Point::new(123.4, -567.8);
    let back = cam.screen_to_world(cam.world_to_screen(world));
    assert!(point_approx_eq(world, back));
}

#[test]
fn round_trip_screen_first() {
    let cam = Camera { pan_x: 13.7, pan_y: 42.3, zoom: 0.75 };
    let screen = Point::new(400.0, 300.0);
    let back = cam.world_to_screen(cam.screen_to_world(screen));
    assert!(point_approx_eq(screen, back));
}

// --- screen_dist_to_world ---

#[test]
fn screen_dist_to_world_scales_by_zoom() {
    let cam = Camera { pan_x: 999.0, pan_y: -999.0, zoom: 4.0 };
    assert!(approx_eq(cam.screen_dist_to_world(8.0), 2.0));
}

#[test]
fn screen_dist_to_world_identity_at_default_zoom() {
    let cam = Camera::default();
    assert!(approx_eq(cam.screen_dist_to_world(42.0), 42.0));
}

// --- pan_by ---

#[test]
fn pan_by_accumulates() {
    let mut cam = Camera::default();
    cam.pan_by(10.0, -5.0);
    cam.pan_by(2.5, 2.5);
    assert!(approx_eq(cam.pan_x, 12.5));
    assert!(approx_eq(cam.pan_y, -2.5));
}

#[test]
fn pan_by_does_not_touch_zoom() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 3.0 };
    cam.pan_by(100.0, 100.0);
    assert_eq!(cam.zoom, 3.0);
}

// --- zoom_about ---

#[test]
fn zoom_about_scales_zoom() {
    let mut cam = Camera::default();
    cam.zoom_about(Point::new(0.0, 0.0), 2.0);
    assert!(approx_eq(cam.zoom, 2.0));
}

#[test]
fn zoom_about_keeps_anchor_point_fixed() {
    let mut cam = Camera { pan_x: 37.0, pan_y: -12.0, zoom: 1.5 };
    let anchor = Point::new(250.0, 140.0);
    let world_before = cam.screen_to_world(anchor);
    cam.zoom_about(anchor, 1.8);
    let world_after = cam.screen_to_world(anchor);
    assert!(point_approx_eq(world_before, world_after));
}

#[test]
fn zoom_about_clamps_to_max() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 8.0 };
    cam.zoom_about(Point::new(100.0, 100.0), 1000.0);
    assert_eq!(cam.zoom, crate::consts::MAX_ZOOM);
}

#[test]
fn zoom_about_clamps_to_min() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 0.2 };
    cam.zoom_about(Point::new(100.0, 100.0), 0.0001);
    assert_eq!(cam.zoom, crate::consts::MIN_ZOOM);
}

#[test]
fn zoom_about_anchor_fixed_even_when_clamped() {
    let mut cam = Camera { pan_x: -40.0, pan_y: 25.0, zoom: 9.0 };
    let anchor = Point::new(60.0, 90.0);
    let world_before = cam.screen_to_world(anchor);
    cam.zoom_about(anchor, 5.0);
    assert_eq!(cam.zoom, crate::consts::MAX_ZOOM);
    let world_after = cam.screen_to_world(anchor);
    assert!(point_approx_eq(world_before, world_after));
}

#[test]
fn zoom_about_identity_factor_is_noop() {
    let mut cam = Camera { pan_x: 5.0, pan_y: 6.0, zoom: 2.0 };
    cam.zoom_about(Point::new(10.0, 10.0), 1.0);
    assert!(approx_eq(cam.pan_x, 5.0));
    assert!(approx_eq(cam.pan_y, 6.0));
    assert!(approx_eq(cam.zoom, 2.0));
}
