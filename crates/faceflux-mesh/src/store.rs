//! Named, typed field storage.

use faceflux_core::{CellField, FaceField, FieldValue, SchemeError};
use indexmap::IndexMap;
use std::any::Any;

/// A field type that can live in a [`FieldStore`].
pub trait StorableField: Any + Send + Sync {
    /// Name the field is stored under.
    fn field_name(&self) -> &str;

    /// Human-readable type description used in mismatch errors,
    /// e.g. `"face scalar field"`.
    fn describe() -> String
    where
        Self: Sized;
}

impl<T: FieldValue> StorableField for FaceField<T> {
    fn field_name(&self) -> &str {
        self.name()
    }

    fn describe() -> String {
        format!("face {} field", T::KIND)
    }
}

impl<T: FieldValue> StorableField for CellField<T> {
    fn field_name(&self) -> &str {
        self.name()
    }

    fn describe() -> String {
        format!("cell {} field", T::KIND)
    }
}

struct Entry {
    field: Box<dyn Any + Send + Sync>,
    description: String,
}

/// Fields of any supported type, keyed by name.
///
/// Schemes configured with a field name (e.g. `"upwind phi"`) find their
/// flux here. Iteration follows insertion order.
///
/// # Examples
///
/// ```
/// use faceflux_core::{FaceField, FaceFluxField, SchemeError};
/// use faceflux_mesh::FieldStore;
///
/// let mut store = FieldStore::new();
/// store.insert(FaceField::new("phi", vec![1.0, -1.0]));
/// assert_eq!(store.lookup::<FaceFluxField>("phi").unwrap().len(), 2);
/// assert!(matches!(
///     store.lookup::<FaceFluxField>("U"),
///     Err(SchemeError::MissingField { .. })
/// ));
/// ```
#[derive(Default)]
pub struct FieldStore {
    entries: IndexMap<String, Entry>,
}

impl FieldStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `field` under its own name, replacing any field of that name.
    ///
    /// Returns `true` if an existing field was replaced.
    pub fn insert<F: StorableField>(&mut self, field: F) -> bool {
        let name = field.field_name().to_string();
        let entry = Entry {
            field: Box::new(field),
            description: F::describe(),
        };
        self.entries.insert(name, entry).is_some()
    }

    /// Borrow the field called `name` as an `F`.
    ///
    /// # Errors
    ///
    /// [`SchemeError::MissingField`] if no field has that name,
    /// [`SchemeError::FieldTypeMismatch`] if it is not an `F`.
    pub fn lookup<F: StorableField>(&self, name: &str) -> Result<&F, SchemeError> {
        let entry = self.entry(name)?;
        entry
            .field
            .downcast_ref::<F>()
            .ok_or_else(|| mismatch::<F>(name, &entry.description))
    }

    /// Mutably borrow the field called `name` as an `F`.
    pub fn lookup_mut<F: StorableField>(&mut self, name: &str) -> Result<&mut F, SchemeError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| SchemeError::MissingField {
                name: name.to_string(),
            })?;
        let description = &entry.description;
        match entry.field.downcast_mut::<F>() {
            Some(field) => Ok(field),
            None => Err(mismatch::<F>(name, description)),
        }
    }

    /// Whether a field called `name` exists (of any type).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Type description of the field called `name`.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|e| e.description.as_str())
    }

    /// Remove the field called `name`. Returns `true` if it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.shift_remove(name).is_some()
    }

    /// Stored field names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, name: &str) -> Result<&Entry, SchemeError> {
        self.entries
            .get(name)
            .ok_or_else(|| SchemeError::MissingField {
                name: name.to_string(),
            })
    }
}

fn mismatch<F: StorableField>(name: &str, found: &str) -> SchemeError {
    SchemeError::FieldTypeMismatch {
        name: name.to_string(),
        expected: F::describe(),
        found: found.to_string(),
    }
}

impl std::fmt::Debug for FieldStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(name, e)| (name, e.description.as_str())),
            )
            .finish()
    }
}
