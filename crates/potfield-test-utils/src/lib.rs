//! Test utilities for Potfield development.
//!
//! Provides deterministic [`Scene`] fixtures, a brute-force
//! [`reference_field`] to check the engine against, and float
//! comparison helpers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{random_scene, reference_field, Scene};

use potfield_core::Vector2;

/// Default absolute tolerance for potential comparisons.
pub const EPS: f64 = 1e-9;

/// `true` if both components differ by at most `tol`.
pub fn vec_close(a: Vector2, b: Vector2, tol: f64) -> bool {
    (a.px - b.px).abs() <= tol && (a.py - b.py).abs() <= tol
}

/// Panic with a readable message unless `a` and `b` are within `tol`.
#[track_caller]
pub fn assert_vec_close(a: Vector2, b: Vector2, tol: f64) {
    assert!(
        vec_close(a, b, tol),
        "vectors differ: ({}, {}) vs ({}, {}), tol {tol}",
        a.px,
        a.py,
        b.px,
        b.py
    );
}

/// Panic unless two row-major fields match cell by cell within `tol`.
#[track_caller]
pub fn assert_field_close(actual: &[Vector2], expected: &[Vector2], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "field sizes differ");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            vec_close(*a, *e, tol),
            "cell {i}: got ({}, {}), expected ({}, {}), tol {tol}",
            a.px,
            a.py,
            e.px,
            e.py
        );
    }
}
