//! Core types and traits for the faceflux interpolation framework.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! abstractions shared across the workspace: the value algebra that
//! interpolation is generic over, cell and face field containers, the
//! scheme configuration token stream, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod stream;
pub mod value;

pub use error::{SchemeError, StreamError};
pub use field::{CellField, FaceField, FaceFluxField, FaceWeightField};
pub use id::MeshInstanceId;
pub use stream::SchemeStream;
pub use value::{FieldValue, Limitable, Tensor, ValueKind, Vector};
