//! A mesh bundled with its named fields and scheme selection.

use crate::mesh::Mesh;
use crate::schemes::SchemeTable;
use crate::store::FieldStore;

/// Everything an interpolation call needs besides the field itself.
///
/// The mesh is owned as a trait object so that domains over different
/// backends share one type.
///
/// # Examples
///
/// ```
/// use faceflux_core::FaceField;
/// use faceflux_mesh::{Domain, EdgeBehavior, Line1D, Mesh, SchemeTable};
///
/// let mut domain = Domain::new(Line1D::new(3, EdgeBehavior::Clamp).unwrap())
///     .with_schemes(SchemeTable::new().with_default("upwind"));
/// let n = domain.mesh().n_faces();
/// domain.fields_mut().insert(FaceField::uniform("phi", n, 1.0));
/// assert!(domain.fields().contains("phi"));
/// ```
#[derive(Debug)]
pub struct Domain {
    mesh: Box<dyn Mesh>,
    fields: FieldStore,
    schemes: SchemeTable,
}

impl Domain {
    /// A domain over `mesh` with no fields and an empty scheme table.
    pub fn new(mesh: impl Mesh) -> Self {
        Self::from_boxed(Box::new(mesh))
    }

    /// Like [`new`](Self::new), for an already boxed mesh.
    pub fn from_boxed(mesh: Box<dyn Mesh>) -> Self {
        Self {
            mesh,
            fields: FieldStore::new(),
            schemes: SchemeTable::new(),
        }
    }

    /// Replace the scheme table.
    pub fn with_schemes(mut self, schemes: SchemeTable) -> Self {
        self.schemes = schemes;
        self
    }

    /// Replace the field store.
    pub fn with_fields(mut self, fields: FieldStore) -> Self {
        self.fields = fields;
        self
    }

    /// The mesh.
    pub fn mesh(&self) -> &dyn Mesh {
        self.mesh.as_ref()
    }

    /// Named fields.
    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Mutable access to the named fields.
    pub fn fields_mut(&mut self) -> &mut FieldStore {
        &mut self.fields
    }

    /// Scheme selection table.
    pub fn schemes(&self) -> &SchemeTable {
        &self.schemes
    }

    /// Mutable access to the scheme selection table.
    pub fn schemes_mut(&mut self) -> &mut SchemeTable {
        &mut self.schemes
    }
}
