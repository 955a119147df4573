//! Finite-volume mesh topology and per-domain registries for faceflux.
//!
//! This crate defines the [`Mesh`] trait, the face-based abstraction that
//! every interpolation scheme consumes, along with structured backends and
//! the named stores a solver configures schemes through.
//!
//! # Backends
//!
//! - [`Line1D`]: 1D line, uniform or non-uniform cell widths
//! - [`Grid2D`]: 2D Cartesian grid
//!
//! Both take an [`EdgeBehavior`]: `Clamp` closes the domain with boundary
//! faces, `Wrap` connects opposite edges periodically.
//!
//! # Registries
//!
//! - [`FieldStore`]: named, typed fields (fluxes looked up by name)
//! - [`SchemeTable`]: field name → scheme specification text
//! - [`Domain`]: a mesh bundled with both

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod edge;
pub mod error;
pub mod grid2d;
pub mod line1d;
pub mod mesh;
pub mod schemes;
pub mod store;
mod table;

#[cfg(test)]
pub(crate) mod compliance;

pub use domain::Domain;
pub use edge::EdgeBehavior;
pub use error::MeshError;
pub use grid2d::Grid2D;
pub use line1d::Line1D;
pub use mesh::{zero_gradient, Mesh};
pub use schemes::{SchemeTable, DEFAULT_KEY};
pub use store::{FieldStore, StorableField};
