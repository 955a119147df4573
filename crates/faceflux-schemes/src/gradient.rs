//! Cell-centred Gauss gradients.

use crate::scheme::check_cell_field;
use faceflux_core::{CellField, Limitable, SchemeError};
use faceflux_mesh::Mesh;

/// Gauss-theorem gradient of `field` in every cell.
///
/// ```text
/// grad_c = (1/V_c) · Σ_f  S_f ⊗ φ_f
/// ```
///
/// `S_f` is taken as outward from cell `c` (the owner sees `+S_f`, the
/// neighbour `-S_f`). `φ_f` is the linearly interpolated value on internal
/// faces and the field's boundary value on boundary faces, so a zero-gradient
/// boundary contributes the owner's own value.
///
/// # Errors
///
/// [`SchemeError::SizeMismatch`] if the field does not fit the mesh.
pub fn gauss_gradient<T: Limitable>(
    mesh: &dyn Mesh,
    field: &CellField<T>,
) -> Result<Vec<T::Grad>, SchemeError> {
    check_cell_field(mesh, field)?;
    let mut grad = vec![T::zero_grad(); mesh.n_cells()];

    for face in 0..mesh.n_internal_faces() {
        let owner = mesh.owner(face);
        let Some(neighbour) = mesh.neighbour(face) else {
            continue;
        };
        let phi_f = T::blend(
            mesh.central_weight(face),
            field.cell(owner),
            field.cell(neighbour),
        );
        let contribution = T::outer(&mesh.area_vector(face), phi_f);
        grad[owner] = grad[owner] + contribution;
        grad[neighbour] = grad[neighbour] + contribution * -1.0;
    }

    for (rank, face) in (mesh.n_internal_faces()..mesh.n_faces()).enumerate() {
        let owner = mesh.owner(face);
        let contribution = T::outer(&mesh.area_vector(face), field.boundary_value(rank));
        grad[owner] = grad[owner] + contribution;
    }

    for (cell, g) in grad.iter_mut().enumerate() {
        *g = *g * mesh.cell_volume(cell).recip();
    }
    Ok(grad)
}
