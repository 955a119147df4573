//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`MeshInstanceId`] allocation.
static MESH_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a mesh object.
///
/// Allocated from a monotonic atomic counter via [`MeshInstanceId::next`].
/// Two distinct mesh instances always have different IDs, even if they
/// have identical geometry. Scheme contexts and weight-computation trace
/// events carry the ID so diagnostics name the exact mesh involved.
///
/// Cloning a mesh preserves its instance ID, which is correct because
/// meshes are immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshInstanceId(u64);

impl MeshInstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(MESH_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for MeshInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_ids_are_unique() {
        let a = MeshInstanceId::next();
        let b = MeshInstanceId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
