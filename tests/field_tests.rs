// Host-side tests for the motion field.
// The crate itself is wasm-only, so the pure core modules are included directly.

#![allow(dead_code)]
mod bg {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
}

use bg::field::field;

#[test]
fn field_is_bounded() {
    for xi in 0..40 {
        for yi in 0..40 {
            for ti in 0..20 {
                let v = field(xi as f64 * 97.0, yi as f64 * 53.0, ti as f64 * 0.37);
                assert!(
                    (-2.0..=2.0).contains(&v),
                    "field out of range at ({xi}, {yi}, {ti}): {v}"
                );
            }
        }
    }
}

#[test]
fn field_at_origin_at_phase_zero() {
    // sin(0) + cos(0)
    assert_eq!(field(0.0, 0.0, 0.0), 1.0);
}

#[test]
fn field_is_deterministic() {
    for i in 0..100 {
        let (x, y, t) = (i as f64 * 13.7, i as f64 * 7.1, i as f64 * 0.21);
        assert_eq!(field(x, y, t), field(x, y, t));
    }
}

#[test]
fn field_advances_with_phase() {
    let at_rest = field(320.0, 240.0, 0.0);
    let later = field(320.0, 240.0, 1.0);
    assert_ne!(at_rest, later);
}

#[test]
fn field_is_spatially_smooth() {
    // Neighboring pixels must flow in nearly the same direction.
    for xi in 0..200 {
        let x = xi as f64 * 10.0;
        let a = field(x, 400.0, 2.5);
        let b = field(x + 1.0, 400.0, 2.5);
        assert!((a - b).abs() < 0.01, "field jumps at x={x}: {a} vs {b}");
    }
}
