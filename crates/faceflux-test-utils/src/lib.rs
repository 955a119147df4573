//! Test fixtures and assertions for faceflux development.
//!
//! Builds the small meshes, fluxes, and fields most scheme tests start
//! from, and checks the weight-field invariants every scheme must hold.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use faceflux_core::{FaceFluxField, FaceWeightField};
use faceflux_mesh::Mesh;

/// Assert every weight lies in `[0, 1]`.
pub fn assert_weights_in_unit_interval(weights: &FaceWeightField) {
    for (face, &w) in weights.iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(&w),
            "{}: face {face} weight {w} outside [0, 1]",
            weights.name()
        );
    }
}

/// Assert every weight lies between the upwind weight (from `flux`) and the
/// mesh's central weight, inclusive.
pub fn assert_between_upwind_and_central(
    mesh: &dyn Mesh,
    flux: &FaceFluxField,
    weights: &FaceWeightField,
) {
    assert_eq!(weights.len(), mesh.n_faces(), "{}: wrong length", weights.name());
    for (face, &w) in weights.iter().enumerate() {
        let w_u: f64 = if flux.get(face) >= 0.0 { 1.0 } else { 0.0 };
        let w_c = mesh.central_weight(face);
        assert!(
            w >= w_u.min(w_c) && w <= w_u.max(w_c),
            "{}: face {face} weight {w} outside [{w_u}, {w_c}] (flux {})",
            weights.name(),
            flux.get(face)
        );
    }
}

/// Assert `|actual - expected| <= tol`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}
