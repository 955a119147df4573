//! Precomputed face geometry shared by the structured backends.

use faceflux_core::Vector;

/// Flat per-face and per-cell geometry arrays.
///
/// Backends push all internal faces before any boundary face, which is the
/// numbering contract of [`Mesh`](crate::Mesh).
#[derive(Clone, Debug)]
pub(crate) struct FaceTable {
    pub(crate) owner: Vec<usize>,
    pub(crate) neighbour: Vec<usize>,
    pub(crate) area: Vec<Vector>,
    pub(crate) delta: Vec<Vector>,
    pub(crate) weight: Vec<f64>,
    pub(crate) centres: Vec<Vector>,
    pub(crate) volumes: Vec<f64>,
}

impl FaceTable {
    pub(crate) fn new(centres: Vec<Vector>, volumes: Vec<f64>, face_capacity: usize) -> Self {
        Self {
            owner: Vec::with_capacity(face_capacity),
            neighbour: Vec::with_capacity(face_capacity),
            area: Vec::with_capacity(face_capacity),
            delta: Vec::with_capacity(face_capacity),
            weight: Vec::with_capacity(face_capacity),
            centres,
            volumes,
        }
    }

    /// Push an internal face. `to_face` runs owner centre → face centre,
    /// `from_face` runs face centre → neighbour centre.
    pub(crate) fn push_internal(
        &mut self,
        owner: usize,
        neighbour: usize,
        area: Vector,
        to_face: Vector,
        from_face: Vector,
    ) {
        debug_assert_eq!(
            self.owner.len(),
            self.neighbour.len(),
            "internal face pushed after a boundary face"
        );
        let normal = area.normalize();
        let d_owner = normal.dot(&to_face).abs();
        let d_neighbour = normal.dot(&from_face).abs();
        self.owner.push(owner);
        self.neighbour.push(neighbour);
        self.area.push(area);
        self.delta.push(to_face + from_face);
        self.weight.push(d_neighbour / (d_owner + d_neighbour));
    }

    /// Push a boundary face owned by `owner`.
    pub(crate) fn push_boundary(&mut self, owner: usize, area: Vector, to_face: Vector) {
        self.owner.push(owner);
        self.area.push(area);
        self.delta.push(to_face);
        self.weight.push(0.0);
    }

    pub(crate) fn n_faces(&self) -> usize {
        self.owner.len()
    }

    pub(crate) fn n_internal_faces(&self) -> usize {
        self.neighbour.len()
    }
}
