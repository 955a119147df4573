//! Mesh trait compliance test helpers.
//!
//! These functions verify that a Mesh implementation satisfies the
//! invariants required by the trait contract. Reused across the backend
//! test modules.

use crate::mesh::Mesh;
use faceflux_core::Vector;

/// Assert that face counts are consistent and internal faces come first.
pub fn assert_face_numbering(mesh: &dyn Mesh) {
    assert_eq!(
        mesh.n_faces(),
        mesh.n_internal_faces() + mesh.n_boundary_faces()
    );
    for face in 0..mesh.n_faces() {
        assert!(
            mesh.owner(face) < mesh.n_cells(),
            "face {face}: owner {} out of range",
            mesh.owner(face)
        );
        let internal = face < mesh.n_internal_faces();
        assert_eq!(mesh.is_boundary_face(face), !internal, "face {face}");
        match mesh.neighbour(face) {
            Some(n) => {
                assert!(internal, "boundary face {face} has neighbour {n}");
                assert!(n < mesh.n_cells(), "face {face}: neighbour {n} out of range");
            }
            None => assert!(!internal, "internal face {face} has no neighbour"),
        }
    }
}

/// Assert that central weights lie in `[0, 1]` and vanish on boundary faces.
pub fn assert_weights_bounded(mesh: &dyn Mesh) {
    let weights = mesh.central_weights();
    assert_eq!(weights.len(), mesh.n_faces());
    for (face, &w) in weights.iter().enumerate() {
        assert!((0.0..=1.0).contains(&w), "face {face}: weight {w}");
        if mesh.is_boundary_face(face) {
            assert_eq!(w, 0.0, "boundary face {face}: weight {w}");
        }
    }
}

/// Assert that every face's delta points the same way as its area vector.
pub fn assert_delta_aligned(mesh: &dyn Mesh) {
    for face in 0..mesh.n_faces() {
        let d = mesh.delta(face).dot(&mesh.area_vector(face));
        assert!(d > 0.0, "face {face}: delta · area = {d}");
    }
}

/// Assert that every cell is closed: its outward face areas sum to zero.
pub fn assert_cells_closed(mesh: &dyn Mesh) {
    let mut sums = vec![Vector::zeros(); mesh.n_cells()];
    let mut scale = 0.0f64;
    for face in 0..mesh.n_faces() {
        let s = mesh.area_vector(face);
        scale = scale.max(s.norm());
        sums[mesh.owner(face)] += s;
        if let Some(n) = mesh.neighbour(face) {
            sums[n] -= s;
        }
    }
    for (cell, sum) in sums.iter().enumerate() {
        assert!(
            sum.norm() <= 1e-12 * scale.max(1.0),
            "cell {cell}: open surface, Σ area = {sum:?}"
        );
    }
}

/// Assert that every cell has a positive finite volume.
pub fn assert_volumes_positive(mesh: &dyn Mesh) {
    for cell in 0..mesh.n_cells() {
        let v = mesh.cell_volume(cell);
        assert!(v.is_finite() && v > 0.0, "cell {cell}: volume {v}");
    }
}

/// Run all compliance checks on a mesh.
pub fn run_full_compliance(mesh: &dyn Mesh) {
    assert_face_numbering(mesh);
    assert_weights_bounded(mesh);
    assert_delta_aligned(mesh);
    assert_cells_closed(mesh);
    assert_volumes_positive(mesh);
}
