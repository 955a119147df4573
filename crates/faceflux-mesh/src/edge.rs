//! Domain edge behavior for structured mesh backends.

/// How a structured mesh closes its outer edges.
///
/// This controls *topology* only. What value a boundary face carries is the
/// field's business: see [`zero_gradient`](crate::zero_gradient) and
/// [`CellField::set_boundary_value`](faceflux_core::CellField::set_boundary_value).
///
/// # Examples
///
/// ```
/// use faceflux_mesh::{EdgeBehavior, Line1D, Mesh};
///
/// // Clamp: 4 cells, 3 internal faces, 2 boundary faces.
/// let closed = Line1D::new(4, EdgeBehavior::Clamp).unwrap();
/// assert_eq!(closed.n_internal_faces(), 3);
/// assert_eq!(closed.n_boundary_faces(), 2);
///
/// // Wrap: the last cell connects back to the first.
/// let periodic = Line1D::new(4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(periodic.n_internal_faces(), 4);
/// assert_eq!(periodic.n_boundary_faces(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Edges are boundary faces owned by the adjacent cell.
    Clamp,
    /// Edges connect to the opposite side (periodic).
    Wrap,
}
