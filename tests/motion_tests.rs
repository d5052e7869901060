// Host-side tests for keyframe mapping and pointer normalisation.

#![allow(dead_code)]
mod motion {
    include!("../src/core/motion.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use motion::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn interpolate_two_keyframes() {
    let input = [0.0, 800.0];
    let output = [0.35, 0.0];
    assert!(close(interpolate(0.0, &input, &output), 0.35));
    assert!(close(interpolate(400.0, &input, &output), 0.175));
    assert!(close(interpolate(800.0, &input, &output), 0.0));
}

#[test]
fn interpolate_clamps_outside_the_range() {
    let input = [0.0, 1000.0];
    let output = [0.0, 150.0];
    assert_eq!(interpolate(-50.0, &input, &output), 0.0);
    assert_eq!(interpolate(5000.0, &input, &output), 150.0);
    assert_eq!(interpolate(f32::NAN, &input, &output), 0.0);
}

#[test]
fn interpolate_multiple_keyframes() {
    // rises, holds, falls
    let input = [0.0, 0.45, 0.55, 1.0];
    let output = [0.8, 1.1, 1.1, 0.8];
    assert!(close(interpolate(0.0, &input, &output), 0.8));
    assert!(close(interpolate(0.5, &input, &output), 1.1));
    assert!(close(interpolate(1.0, &input, &output), 0.8));
    let rising = interpolate(0.225, &input, &output);
    assert!(close(rising, 0.95));
}

#[test]
fn interpolate_is_monotone_between_keyframes() {
    let input = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
    let output = [10.0, 0.0, 0.0, 0.0, 0.0, 10.0];
    let mut prev = f32::MAX;
    let mut t = 0.0;
    while t <= 0.2 {
        let v = interpolate(t, &input, &output);
        assert!(v <= prev);
        prev = v;
        t += 0.01;
    }
}

#[test]
fn interpolate_degenerate_ranges() {
    assert_eq!(interpolate(3.0, &[], &[]), 0.0);
    assert_eq!(interpolate(3.0, &[1.0], &[7.0]), 7.0);
    // a repeated keyframe resolves to the end of the first segment
    assert_eq!(interpolate(0.5, &[0.0, 0.5, 0.5, 1.0], &[0.0, 1.0, 2.0, 3.0]), 1.0);
}

#[test]
fn scroll_fade_reaches_zero_at_the_distance() {
    assert!(close(scroll_fade_opacity(0.0, 800.0, 0.6), 0.6));
    assert!(close(scroll_fade_opacity(200.0, 800.0, 0.6), 0.45));
    assert_eq!(scroll_fade_opacity(800.0, 800.0, 0.6), 0.0);
    assert_eq!(scroll_fade_opacity(12_000.0, 800.0, 0.6), 0.0);
    assert_eq!(scroll_fade_opacity(-20.0, 800.0, 1.4), 1.0);
}

#[test]
fn pointer_offset_is_centred_and_bounded() {
    let viewport = Vec2::new(1000.0, 500.0);
    assert_eq!(normalized_offset(Vec2::new(500.0, 250.0), viewport), Vec2::ZERO);
    assert_eq!(normalized_offset(Vec2::ZERO, viewport), Vec2::splat(-0.5));
    assert_eq!(
        normalized_offset(Vec2::new(750.0, 500.0), viewport),
        Vec2::new(0.25, 0.5)
    );
    // pointer captured outside the window
    assert_eq!(
        normalized_offset(Vec2::new(-300.0, 9000.0), viewport),
        Vec2::new(-0.5, 0.5)
    );
}

#[test]
fn pointer_offset_with_empty_viewport_is_zero() {
    assert_eq!(normalized_offset(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
    assert_eq!(
        normalized_offset(Vec2::new(10.0, 10.0), Vec2::new(f32::NAN, 5.0)),
        Vec2::ZERO
    );
}
