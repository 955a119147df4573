//! 1D line mesh with configurable edge behavior.

use crate::edge::EdgeBehavior;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::table::FaceTable;
use faceflux_core::{MeshInstanceId, Vector};

/// A one-dimensional finite-volume mesh along the x axis.
///
/// Cell `i` spans `[x_i, x_i + width_i)` with `x_0 = 0`. Every face has
/// unit area and a `+x` normal, except the left boundary face, whose
/// outward normal is `-x`.
///
/// Face numbering:
/// - **Clamp**: faces `0..len-1` separate cell `i` (owner) from `i+1`;
///   face `len-1` is the left boundary, face `len` the right boundary.
/// - **Wrap**: faces `0..len` separate cell `i` from `(i+1) % len`; there
///   are no boundary faces.
///
/// # Examples
///
/// ```
/// use faceflux_mesh::{EdgeBehavior, Line1D, Mesh};
///
/// let line = Line1D::new(4, EdgeBehavior::Clamp).unwrap();
/// assert_eq!(line.n_cells(), 4);
/// assert_eq!(line.n_internal_faces(), 3);
/// assert_eq!(line.n_boundary_faces(), 2);
/// assert_eq!(line.owner(1), 1);
/// assert_eq!(line.neighbour(1), Some(2));
/// assert_eq!(line.neighbour(3), None);
/// assert_eq!(line.central_weight(1), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Line1D {
    widths: Vec<f64>,
    edge: EdgeBehavior,
    faces: FaceTable,
    instance_id: MeshInstanceId,
}

impl Line1D {
    /// Maximum number of cells.
    pub const MAX_LEN: usize = u32::MAX as usize;

    /// Create a line of `len` unit-width cells.
    ///
    /// Returns `Err(MeshError::EmptyMesh)` if `len == 0`, or
    /// `Err(MeshError::DimensionTooLarge)` if `len > MAX_LEN`.
    pub fn new(len: usize, edge: EdgeBehavior) -> Result<Self, MeshError> {
        Self::uniform(len, 1.0, edge)
    }

    /// Create a line of `len` cells of equal `width`.
    pub fn uniform(len: usize, width: f64, edge: EdgeBehavior) -> Result<Self, MeshError> {
        if len > Self::MAX_LEN {
            return Err(MeshError::DimensionTooLarge {
                name: "len",
                value: len,
            });
        }
        Self::with_widths(vec![width; len], edge)
    }

    /// Create a line with one cell per entry of `widths`.
    ///
    /// Returns `Err(MeshError::InvalidSpacing)` if any width is not finite
    /// and positive.
    pub fn with_widths(widths: Vec<f64>, edge: EdgeBehavior) -> Result<Self, MeshError> {
        if widths.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        if widths.len() > Self::MAX_LEN {
            return Err(MeshError::DimensionTooLarge {
                name: "len",
                value: widths.len(),
            });
        }
        if let Some(&bad) = widths.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
            return Err(MeshError::InvalidSpacing {
                name: "width",
                value: bad,
            });
        }
        let faces = build_faces(&widths, edge);
        Ok(Self {
            widths,
            edge,
            faces,
            instance_id: MeshInstanceId::next(),
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Always returns `false`: construction rejects empty lines.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Width of `cell`.
    pub fn width(&self, cell: usize) -> f64 {
        self.widths[cell]
    }
}

fn build_faces(widths: &[f64], edge: EdgeBehavior) -> FaceTable {
    let n = widths.len();
    let mut x = 0.0;
    let centres = widths
        .iter()
        .map(|&w| {
            let c = Vector::new(x + 0.5 * w, 0.0, 0.0);
            x += w;
            c
        })
        .collect();
    let mut table = FaceTable::new(centres, widths.to_vec(), n + 1);
    let half = |i: usize| Vector::new(0.5 * widths[i], 0.0, 0.0);

    let internal = match edge {
        EdgeBehavior::Clamp => n - 1,
        EdgeBehavior::Wrap => n,
    };
    for i in 0..internal {
        let j = (i + 1) % n;
        table.push_internal(i, j, Vector::x(), half(i), half(j));
    }
    if edge == EdgeBehavior::Clamp {
        table.push_boundary(0, -Vector::x(), -half(0));
        table.push_boundary(n - 1, Vector::x(), half(n - 1));
    }
    table
}

impl Mesh for Line1D {
    fn n_cells(&self) -> usize {
        self.widths.len()
    }

    fn n_faces(&self) -> usize {
        self.faces.n_faces()
    }

    fn n_internal_faces(&self) -> usize {
        self.faces.n_internal_faces()
    }

    fn owner(&self, face: usize) -> usize {
        self.faces.owner[face]
    }

    fn neighbour(&self, face: usize) -> Option<usize> {
        self.faces.neighbour.get(face).copied()
    }

    fn area_vector(&self, face: usize) -> Vector {
        self.faces.area[face]
    }

    fn delta(&self, face: usize) -> Vector {
        self.faces.delta[face]
    }

    fn central_weight(&self, face: usize) -> f64 {
        self.faces.weight[face]
    }

    fn cell_volume(&self, cell: usize) -> f64 {
        self.faces.volumes[cell]
    }

    fn cell_centre(&self, cell: usize) -> Vector {
        self.faces.centres[cell]
    }

    fn instance_id(&self) -> MeshInstanceId {
        self.instance_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn rejects_empty() {
        assert_eq!(
            Line1D::new(0, EdgeBehavior::Clamp).unwrap_err(),
            MeshError::EmptyMesh
        );
    }

    #[test]
    fn rejects_bad_width() {
        let err = Line1D::with_widths(vec![1.0, 0.0], EdgeBehavior::Clamp).unwrap_err();
        assert_eq!(
            err,
            MeshError::InvalidSpacing {
                name: "width",
                value: 0.0
            }
        );
        assert!(Line1D::with_widths(vec![f64::NAN], EdgeBehavior::Wrap).is_err());
    }

    #[test]
    fn clamp_face_layout() {
        let s = Line1D::new(4, EdgeBehavior::Clamp).unwrap();
        assert_eq!(s.n_faces(), 5);
        assert_eq!(s.n_internal_faces(), 3);
        assert_eq!(s.owner(3), 0);
        assert_eq!(s.owner(4), 3);
        assert_eq!(s.area_vector(3), -Vector::x());
        assert_eq!(s.area_vector(4), Vector::x());
        assert_eq!(s.boundary_rank(3), Some(0));
        assert_eq!(s.boundary_rank(4), Some(1));
        assert_eq!(s.boundary_rank(2), None);
        assert_eq!(s.boundary_rank(5), None);
    }

    #[test]
    fn wrap_face_layout() {
        let s = Line1D::new(4, EdgeBehavior::Wrap).unwrap();
        assert_eq!(s.n_faces(), 4);
        assert_eq!(s.n_boundary_faces(), 0);
        assert_eq!(s.owner(3), 3);
        assert_eq!(s.neighbour(3), Some(0));
        assert_eq!(s.delta(3), Vector::x());
    }

    #[test]
    fn single_cell_clamp_has_only_boundary_faces() {
        let s = Line1D::new(1, EdgeBehavior::Clamp).unwrap();
        assert_eq!(s.n_internal_faces(), 0);
        assert_eq!(s.n_boundary_faces(), 2);
        assert!(s.is_boundary_face(0));
    }

    // ── Geometry ────────────────────────────────────────────────

    #[test]
    fn non_uniform_weights_favour_nearer_cell() {
        // Owner width 1, neighbour width 3: face is 0.5 from owner centre
        // and 1.5 from neighbour centre.
        let s = Line1D::with_widths(vec![1.0, 3.0], EdgeBehavior::Clamp).unwrap();
        assert!((s.central_weight(0) - 0.75).abs() < 1e-15);
        assert_eq!(s.delta(0), Vector::new(2.0, 0.0, 0.0));
        assert_eq!(s.cell_centre(1), Vector::new(2.5, 0.0, 0.0));
        assert_eq!(s.cell_volume(1), 3.0);
    }

    #[test]
    fn boundary_weights_are_zero() {
        let s = Line1D::new(3, EdgeBehavior::Clamp).unwrap();
        let w = s.central_weights();
        assert_eq!(w.name(), "weights");
        assert_eq!(w.values(), &[0.5, 0.5, 0.0, 0.0]);
        assert_eq!(s.delta(2), Vector::new(-0.5, 0.0, 0.0));
    }

    #[test]
    fn instance_ids_are_unique_and_survive_clone() {
        let a = Line1D::new(3, EdgeBehavior::Clamp).unwrap();
        let b = Line1D::new(3, EdgeBehavior::Clamp).unwrap();
        assert_ne!(a.instance_id(), b.instance_id());
        assert_eq!(a.clone().instance_id(), a.instance_id());
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_clamp() {
        compliance::run_full_compliance(&Line1D::new(6, EdgeBehavior::Clamp).unwrap());
    }

    #[test]
    fn compliance_wrap() {
        compliance::run_full_compliance(&Line1D::new(6, EdgeBehavior::Wrap).unwrap());
    }

    #[test]
    fn compliance_single_cell() {
        compliance::run_full_compliance(&Line1D::new(1, EdgeBehavior::Clamp).unwrap());
    }

    proptest! {
        #[test]
        fn compliance_random_widths(
            widths in prop::collection::vec(0.01f64..10.0, 1..24),
            wrap in any::<bool>(),
        ) {
            let edge = if wrap { EdgeBehavior::Wrap } else { EdgeBehavior::Clamp };
            let s = Line1D::with_widths(widths, edge).unwrap();
            compliance::run_full_compliance(&s);
        }
    }
}
