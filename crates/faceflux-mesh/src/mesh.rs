//! The core `Mesh` trait.

use faceflux_core::{CellField, FaceWeightField, FieldValue, MeshInstanceId, SchemeError, Vector};
use std::fmt;

/// Face-based finite-volume mesh, as consumed by interpolation schemes.
///
/// # Face numbering
///
/// Faces `0..n_internal_faces()` are internal: they separate an owner cell
/// from a neighbour cell. Faces `n_internal_faces()..n_faces()` are
/// boundary faces with an owner only. Boundary-face rank `i` (used to index
/// [`CellField::boundary`]) is `face - n_internal_faces()`.
///
/// # Orientation
///
/// [`area_vector`](Mesh::area_vector) and [`delta`](Mesh::delta) point from
/// owner towards neighbour (outward on boundary faces). A positive face flux
/// therefore means flow from owner to neighbour.
///
/// # Thread Safety
///
/// `Sync` is required because schemes hold `&dyn Mesh` and evaluate faces in
/// parallel.
pub trait Mesh: fmt::Debug + Send + Sync + 'static {
    /// Number of cells.
    fn n_cells(&self) -> usize;

    /// Total number of faces (internal + boundary).
    fn n_faces(&self) -> usize;

    /// Number of internal faces.
    fn n_internal_faces(&self) -> usize;

    /// Number of boundary faces.
    #[inline]
    fn n_boundary_faces(&self) -> usize {
        self.n_faces() - self.n_internal_faces()
    }

    /// Owner cell of `face`. Always valid.
    fn owner(&self, face: usize) -> usize;

    /// Neighbour cell of `face`, or `None` for boundary faces.
    fn neighbour(&self, face: usize) -> Option<usize>;

    /// Whether `face` lies on the domain boundary.
    #[inline]
    fn is_boundary_face(&self, face: usize) -> bool {
        face >= self.n_internal_faces()
    }

    /// Rank of `face` among boundary faces, or `None` for internal faces.
    #[inline]
    fn boundary_rank(&self, face: usize) -> Option<usize> {
        face.checked_sub(self.n_internal_faces())
            .filter(|_| face < self.n_faces())
    }

    /// Face area vector: magnitude is the face area, direction is the unit
    /// normal from owner to neighbour.
    fn area_vector(&self, face: usize) -> Vector;

    /// Displacement from the owner centre to the neighbour centre, or to the
    /// face centre on boundary faces.
    fn delta(&self, face: usize) -> Vector;

    /// Geometric linear-interpolation weight of the owner value at `face`.
    ///
    /// In `[0, 1]` on internal faces. Boundary faces report `0.0`, so that
    /// central interpolation yields the field's boundary value there.
    fn central_weight(&self, face: usize) -> f64;

    /// Volume of `cell`.
    fn cell_volume(&self, cell: usize) -> f64;

    /// Centre of `cell`.
    fn cell_centre(&self, cell: usize) -> Vector;

    /// Unique instance identifier for this mesh object.
    fn instance_id(&self) -> MeshInstanceId;

    /// Central weights of every face as a weight field.
    fn central_weights(&self) -> FaceWeightField {
        FaceWeightField::new(
            "weights",
            (0..self.n_faces()).map(|f| self.central_weight(f)).collect(),
        )
    }
}

/// Build a cell field whose boundary faces carry their owner's value.
///
/// This is the zero-gradient convention: the field has no normal gradient
/// at the boundary. Individual boundary values can be overridden afterwards
/// with [`CellField::set_boundary_value`].
///
/// # Errors
///
/// Returns [`SchemeError::SizeMismatch`] if `cells.len() != mesh.n_cells()`.
///
/// # Examples
///
/// ```
/// use faceflux_mesh::{zero_gradient, EdgeBehavior, Line1D};
///
/// let line = Line1D::new(3, EdgeBehavior::Clamp).unwrap();
/// let t = zero_gradient(&line, "T", vec![1.0, 2.0, 5.0]).unwrap();
/// assert_eq!(t.boundary(), &[1.0, 5.0]);
/// ```
pub fn zero_gradient<T: FieldValue>(
    mesh: &dyn Mesh,
    name: impl Into<String>,
    cells: Vec<T>,
) -> Result<CellField<T>, SchemeError> {
    if cells.len() != mesh.n_cells() {
        return Err(SchemeError::SizeMismatch {
            what: "cell values",
            expected: mesh.n_cells(),
            found: cells.len(),
        });
    }
    let boundary = (mesh.n_internal_faces()..mesh.n_faces())
        .map(|face| cells[mesh.owner(face)])
        .collect();
    Ok(CellField::from_parts(name, cells, boundary))
}
