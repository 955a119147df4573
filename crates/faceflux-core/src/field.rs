//! Cell- and face-centred field containers.

use crate::value::{FieldValue, ValueKind};

/// A field with one value per mesh cell and one per boundary face.
///
/// Boundary values are indexed by boundary-face rank: the face with global
/// index `n_internal_faces + i` reads `boundary()[i]`. The mesh crate builds
/// these with a zero-gradient convention (boundary value = owner value);
/// individual entries can be overridden to impose fixed values.
///
/// The field's name selects its interpolation scheme from the domain's
/// scheme table.
#[derive(Clone, Debug, PartialEq)]
pub struct CellField<T> {
    name: String,
    cells: Vec<T>,
    boundary: Vec<T>,
}

impl<T: FieldValue> CellField<T> {
    /// Assemble a field from cell values and boundary-face values.
    pub fn from_parts(name: impl Into<String>, cells: Vec<T>, boundary: Vec<T>) -> Self {
        Self {
            name: name.into(),
            cells,
            boundary,
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value kind of the stored elements.
    pub fn kind(&self) -> ValueKind {
        T::KIND
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the field has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cell values, in cell-index order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// All boundary-face values, in boundary-face order.
    pub fn boundary(&self) -> &[T] {
        &self.boundary
    }

    /// Value at `cell`.
    #[inline]
    pub fn cell(&self, cell: usize) -> T {
        self.cells[cell]
    }

    /// Value on the `i`-th boundary face.
    #[inline]
    pub fn boundary_value(&self, i: usize) -> T {
        self.boundary[i]
    }

    /// Override the value on the `i`-th boundary face.
    ///
    /// Returns `false` (and changes nothing) if `i` is out of range.
    pub fn set_boundary_value(&mut self, i: usize, value: T) -> bool {
        match self.boundary.get_mut(i) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// A field with one value per mesh face.
///
/// Faces are ordered internal faces first, then boundary faces, matching
/// the mesh's face numbering.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceField<T> {
    name: String,
    values: Vec<T>,
}

/// Signed volumetric or mass flux; positive means owner → neighbour.
pub type FaceFluxField = FaceField<f64>;

/// Interpolation weights: face value = `w·owner + (1-w)·neighbour`.
pub type FaceWeightField = FaceField<f64>;

impl<T: FieldValue> FaceField<T> {
    /// Create a face field from per-face values.
    pub fn new(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// A face field with `len` copies of `value`.
    pub fn uniform(name: impl Into<String>, len: usize, value: T) -> Self {
        Self::new(name, vec![value; len])
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value kind of the stored elements.
    pub fn kind(&self) -> ValueKind {
        T::KIND
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the field has no faces.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value on `face`.
    #[inline]
    pub fn get(&self, face: usize) -> T {
        self.values[face]
    }

    /// All face values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Mutable access to the face values, for solvers that update a flux
    /// field in place between interpolation calls.
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Iterate over face values.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Consume the field, returning its values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Apply `f` to every face value, producing a new field.
    pub fn map<U: FieldValue>(&self, name: impl Into<String>, f: impl Fn(T) -> U) -> FaceField<U> {
        FaceField::new(name, self.values.iter().map(|&v| f(v)).collect())
    }
}

impl<'a, T: FieldValue> IntoIterator for &'a FaceField<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_field_accessors() {
        let mut f = CellField::from_parts("T", vec![1.0, 2.0, 3.0], vec![1.0, 3.0]);
        assert_eq!(f.name(), "T");
        assert_eq!(f.len(), 3);
        assert_eq!(f.kind(), ValueKind::Scalar);
        assert_eq!(f.cell(1), 2.0);
        assert_eq!(f.boundary_value(1), 3.0);
        assert!(f.set_boundary_value(0, 9.0));
        assert_eq!(f.boundary(), &[9.0, 3.0]);
        assert!(!f.set_boundary_value(2, 0.0));
    }

    #[test]
    fn face_field_map_and_iter() {
        let phi = FaceField::new("phi", vec![-1.0, 0.0, 2.0]);
        let signs = phi.map("sign", |v: f64| if v < 0.0 { 0.0 } else { 1.0 });
        assert_eq!(signs.values(), &[0.0, 1.0, 1.0]);
        assert_eq!(phi.iter().copied().sum::<f64>(), 1.0);
        assert_eq!((&phi).into_iter().count(), 3);
    }

    #[test]
    fn uniform_face_field() {
        let w = FaceField::uniform("w", 4, 0.5);
        assert_eq!(w.len(), 4);
        assert!(w.iter().all(|&v| v == 0.5));
        assert_eq!(w.into_values(), vec![0.5; 4]);
    }
}
