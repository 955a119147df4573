//! Error types for mesh construction.

use std::fmt;

/// Errors arising from mesh construction.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Attempted to construct a mesh with zero cells.
    EmptyMesh,
    /// A cell width or spacing is zero, negative, or not finite.
    InvalidSpacing {
        /// Which spacing parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A dimension is too large to index faces with `usize` arithmetic.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The requested value.
        value: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMesh => write!(f, "mesh must have at least one cell"),
            Self::InvalidSpacing { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::DimensionTooLarge { name, value } => {
                write!(f, "{name} = {value} is too large")
            }
        }
    }
}

impl std::error::Error for MeshError {}
