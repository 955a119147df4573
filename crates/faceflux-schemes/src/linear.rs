//! Central differencing.

use crate::scheme::{check_cell_field, InterpolationScheme};
use faceflux_core::{CellField, FaceWeightField, FieldValue, SchemeError};
use faceflux_mesh::Mesh;

/// Geometric (central) interpolation. Ignores the flux.
#[derive(Debug, Clone, Copy)]
pub struct Linear<'a> {
    mesh: &'a dyn Mesh,
}

impl<'a> Linear<'a> {
    /// Bind to `mesh`.
    pub fn new(mesh: &'a dyn Mesh) -> Self {
        Self { mesh }
    }
}

impl<T: FieldValue> InterpolationScheme<T> for Linear<'_> {
    fn name(&self) -> &str {
        "linear"
    }

    fn mesh(&self) -> &dyn Mesh {
        self.mesh
    }

    fn weights(&self, field: &CellField<T>) -> Result<FaceWeightField, SchemeError> {
        check_cell_field(self.mesh, field)?;
        Ok(FaceWeightField::new(
            "linearWeights",
            (0..self.mesh.n_faces())
                .map(|face| self.mesh.central_weight(face))
                .collect(),
        ))
    }
}
