//! The `InterpolationScheme` trait and the weighted face combination.

use faceflux_core::{
    CellField, FaceField, FaceFluxField, FaceWeightField, FieldValue, SchemeError,
};
use faceflux_mesh::Mesh;

/// A rule for turning cell values into face values.
///
/// Every scheme reduces to a weight field: the face value is
/// `w·owner + (1-w)·neighbour` on internal faces. Boundary faces take the
/// field's boundary value whatever their weight. Instances borrow the mesh (and a
/// flux, if they need one) for their whole lifetime and hold no mutable
/// state, so one instance can serve any number of calls and threads.
pub trait InterpolationScheme<T: FieldValue>: Send + Sync {
    /// Registered scheme name.
    fn name(&self) -> &str;

    /// The mesh the scheme is bound to.
    fn mesh(&self) -> &dyn Mesh;

    /// Owner weights on every face, each in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// [`SchemeError::SizeMismatch`] if `field` does not fit the mesh.
    fn weights(&self, field: &CellField<T>) -> Result<FaceWeightField, SchemeError>;

    /// Face values of `field` under this scheme.
    fn interpolate(&self, field: &CellField<T>) -> Result<FaceField<T>, SchemeError> {
        let weights = self.weights(field)?;
        combine(self.mesh(), field, &weights)
    }
}

/// Apply `weights` to `field`: `w·owner + (1-w)·neighbour` on every
/// internal face, the field's boundary value on every boundary face.
///
/// The result is named `interpolate(<field>)`.
pub fn combine<T: FieldValue>(
    mesh: &dyn Mesh,
    field: &CellField<T>,
    weights: &FaceWeightField,
) -> Result<FaceField<T>, SchemeError> {
    check_cell_field(mesh, field)?;
    check_face_len(mesh, "weights", weights.len())?;

    let values = weights
        .iter()
        .enumerate()
        .map(|(face, &w)| match mesh.neighbour(face) {
            Some(n) => T::blend(w, field.cell(mesh.owner(face)), field.cell(n)),
            None => field.boundary_value(face - mesh.n_internal_faces()),
        })
        .collect();
    Ok(FaceField::new(format!("interpolate({})", field.name()), values))
}

pub(crate) fn check_cell_field<T: FieldValue>(
    mesh: &dyn Mesh,
    field: &CellField<T>,
) -> Result<(), SchemeError> {
    if field.len() != mesh.n_cells() {
        return Err(SchemeError::SizeMismatch {
            what: "cell values",
            expected: mesh.n_cells(),
            found: field.len(),
        });
    }
    if field.boundary().len() != mesh.n_boundary_faces() {
        return Err(SchemeError::SizeMismatch {
            what: "boundary values",
            expected: mesh.n_boundary_faces(),
            found: field.boundary().len(),
        });
    }
    Ok(())
}

pub(crate) fn check_flux(mesh: &dyn Mesh, flux: &FaceFluxField) -> Result<(), SchemeError> {
    check_face_len(mesh, "flux", flux.len())
}

fn check_face_len(mesh: &dyn Mesh, what: &'static str, len: usize) -> Result<(), SchemeError> {
    if len != mesh.n_faces() {
        return Err(SchemeError::SizeMismatch {
            what,
            expected: mesh.n_faces(),
            found: len,
        });
    }
    Ok(())
}
