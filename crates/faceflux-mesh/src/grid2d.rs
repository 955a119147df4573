//! 2D Cartesian grid mesh.

use crate::edge::EdgeBehavior;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::table::FaceTable;
use faceflux_core::{MeshInstanceId, Vector};

/// A two-dimensional Cartesian finite-volume mesh in the xy plane.
///
/// Cells are numbered row-major: cell `(r, c)` has index `r * cols + c` and
/// centre `((c + ½)·dx, (r + ½)·dy)`. The mesh has unit depth in z, so
/// x-faces have area `dy` and y-faces area `dx`.
///
/// Face numbering: internal x-faces (between `(r, c)` and `(r, c+1)`)
/// first, then internal y-faces (between `(r, c)` and `(r+1, c)`). Under
/// `Clamp` these are followed by boundary faces in west, east, south,
/// north order; under `Wrap` opposite edges are joined and there are no
/// boundary faces.
///
/// # Examples
///
/// ```
/// use faceflux_mesh::{EdgeBehavior, Grid2D, Mesh};
///
/// let g = Grid2D::new(2, 3, EdgeBehavior::Clamp).unwrap();
/// assert_eq!(g.n_cells(), 6);
/// // 2 rows × 2 x-faces + 1 × 3 y-faces
/// assert_eq!(g.n_internal_faces(), 7);
/// // 2 west + 2 east + 3 south + 3 north
/// assert_eq!(g.n_boundary_faces(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Grid2D {
    rows: usize,
    cols: usize,
    dx: f64,
    dy: f64,
    edge: EdgeBehavior,
    faces: FaceTable,
    instance_id: MeshInstanceId,
}

impl Grid2D {
    /// Maximum extent along either axis.
    pub const MAX_DIM: usize = u16::MAX as usize;

    /// Create a `rows × cols` grid of unit squares.
    pub fn new(rows: usize, cols: usize, edge: EdgeBehavior) -> Result<Self, MeshError> {
        Self::with_spacing(rows, cols, 1.0, 1.0, edge)
    }

    /// Create a `rows × cols` grid with cell size `dx × dy`.
    ///
    /// Returns `Err(MeshError::EmptyMesh)` if either dimension is zero,
    /// `Err(MeshError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or `Err(MeshError::InvalidSpacing)` if
    /// a spacing is not finite and positive.
    pub fn with_spacing(
        rows: usize,
        cols: usize,
        dx: f64,
        dy: f64,
        edge: EdgeBehavior,
    ) -> Result<Self, MeshError> {
        if rows == 0 || cols == 0 {
            return Err(MeshError::EmptyMesh);
        }
        for (name, value) in [("rows", rows), ("cols", cols)] {
            if value > Self::MAX_DIM {
                return Err(MeshError::DimensionTooLarge { name, value });
            }
        }
        for (name, value) in [("dx", dx), ("dy", dy)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MeshError::InvalidSpacing { name, value });
            }
        }
        let faces = build_faces(rows, cols, dx, dy, edge);
        Ok(Self {
            rows,
            cols,
            dx,
            dy,
            edge,
            faces,
            instance_id: MeshInstanceId::next(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell size along x.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Cell size along y.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Cell index of `(row, col)`.
    #[inline]
    pub fn cell_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

fn build_faces(rows: usize, cols: usize, dx: f64, dy: f64, edge: EdgeBehavior) -> FaceTable {
    let idx = |r: usize, c: usize| r * cols + c;
    let centres = (0..rows)
        .flat_map(|r| {
            (0..cols).map(move |c| Vector::new((c as f64 + 0.5) * dx, (r as f64 + 0.5) * dy, 0.0))
        })
        .collect();
    let volumes = vec![dx * dy; rows * cols];
    let capacity = 2 * rows * cols + 2 * (rows + cols);
    let mut table = FaceTable::new(centres, volumes, capacity);

    let half_x = Vector::new(0.5 * dx, 0.0, 0.0);
    let half_y = Vector::new(0.0, 0.5 * dy, 0.0);
    let x_area = Vector::new(dy, 0.0, 0.0);
    let y_area = Vector::new(0.0, dx, 0.0);

    let (x_span, y_span) = match edge {
        EdgeBehavior::Clamp => (cols - 1, rows - 1),
        EdgeBehavior::Wrap => (cols, rows),
    };
    for r in 0..rows {
        for c in 0..x_span {
            table.push_internal(idx(r, c), idx(r, (c + 1) % cols), x_area, half_x, half_x);
        }
    }
    for r in 0..y_span {
        for c in 0..cols {
            table.push_internal(idx(r, c), idx((r + 1) % rows, c), y_area, half_y, half_y);
        }
    }

    if edge == EdgeBehavior::Clamp {
        for r in 0..rows {
            table.push_boundary(idx(r, 0), -x_area, -half_x);
        }
        for r in 0..rows {
            table.push_boundary(idx(r, cols - 1), x_area, half_x);
        }
        for c in 0..cols {
            table.push_boundary(idx(0, c), -y_area, -half_y);
        }
        for c in 0..cols {
            table.push_boundary(idx(rows - 1, c), y_area, half_y);
        }
    }
    table
}

impl Mesh for Grid2D {
    fn n_cells(&self) -> usize {
        self.rows * self.cols
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
