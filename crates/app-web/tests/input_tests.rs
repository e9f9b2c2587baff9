// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn rect() -> CanvasRect {
    CanvasRect {
        left: 100.0,
        top: 50.0,
        width: 800.0,
        height: 400.0,
    }
}

#[test]
fn canvas_center_maps_to_origin() {
    assert_eq!(rect().ndc(500.0, 250.0), Vec2::ZERO);
}

#[test]
fn canvas_corners_map_to_unit_square() {
    let r = rect();
    assert_eq!(r.ndc(100.0, 50.0), Vec2::new(-1.0, 1.0));
    assert_eq!(r.ndc(900.0, 450.0), Vec2::new(1.0, -1.0));
}

#[test]
fn y_axis_points_up() {
    let r = rect();
    assert!(r.ndc(500.0, 60.0).y > 0.9);
    assert!(r.ndc(500.0, 440.0).y < -0.9);
}

#[test]
fn pointer_outside_canvas_leaves_unit_range() {
    assert!(rect().ndc(0.0, 250.0).x < -1.0);
}

#[test]
fn empty_rect_yields_origin() {
    let r = CanvasRect::default();
    assert_eq!(r.ndc(10.0, 10.0), Vec2::ZERO);
}

#[test]
fn wheel_line_and_page_modes_scale_to_pixels() {
    assert_eq!(wheel_delta_px(100.0, 0), 100.0);
    assert_eq!(wheel_delta_px(3.0, 1), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2), -800.0);
}

#[test]
fn screenshot_names_use_whole_milliseconds() {
    assert_eq!(screenshot_file_name(1_700_000_000_123.9), "scene-1700000000123.png");
    assert_eq!(screenshot_file_name(-5.0), "scene-0.png");
}
