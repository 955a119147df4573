//! Faceflux: face interpolation for finite-volume fields.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the faceflux sub-crates. Adding `faceflux` as a single dependency is
//! enough for most solvers.
//!
//! # Quick start
//!
//! ```rust
//! use faceflux::prelude::*;
//!
//! // Four cells with boundary faces at both ends, everything flowing left to right.
//! let mesh = Line1D::new(4, EdgeBehavior::Clamp).unwrap();
//! let domain = Domain::new(mesh).with_schemes(SchemeTable::new().with("T", "vanLeer"));
//! let registry = SchemeRegistry::<f64>::with_defaults();
//!
//! let phi = FaceFluxField::uniform("phi", domain.mesh().n_faces(), 1.0);
//! let t = zero_gradient(domain.mesh(), "T", vec![0.0, 1.0, 3.0, 3.0]).unwrap();
//!
//! let t_f = interpolate(&domain, &registry, &t, &phi).unwrap();
//! let expected = [0.0, 5.0 / 3.0, 3.0, 0.0, 3.0];
//! for (got, want) in t_f.values().iter().zip(expected) {
//!     assert!((got - want).abs() < 1e-12);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `faceflux-core` | Value algebra, fields, scheme streams, errors |
//! | [`mesh`] | `faceflux-mesh` | Mesh trait, backends, field store, scheme table |
//! | [`schemes`] | `faceflux-schemes` | Schemes, limiters, registry, entry points |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Value types, field containers, and errors (`faceflux-core`).
///
/// [`types::FieldValue`] and [`types::Limitable`] are the traits every
/// scheme is generic over.
pub use faceflux_core as types;

/// Mesh topology and per-domain registries (`faceflux-mesh`).
///
/// Provides the [`mesh::Mesh`] trait and the structured backends
/// [`mesh::Line1D`] and [`mesh::Grid2D`].
pub use faceflux_mesh as mesh;

/// Interpolation schemes (`faceflux-schemes`).
///
/// Implement [`schemes::InterpolationScheme`] and register a constructor
/// with [`schemes::SchemeRegistry`] to add a scheme of your own.
pub use faceflux_schemes as schemes;

/// Common imports for typical faceflux usage.
///
/// ```rust
/// use faceflux::prelude::*;
/// ```
pub mod prelude {
    // Values and fields
    pub use faceflux_core::{
        CellField, FaceField, FaceFluxField, FaceWeightField, FieldValue, Limitable, SchemeStream,
        Tensor, Vector,
    };

    // Errors
    pub use faceflux_core::{SchemeError, StreamError};

    // Mesh
    pub use faceflux_mesh::{
        zero_gradient, Domain, EdgeBehavior, FieldStore, Grid2D, Line1D, Mesh, SchemeTable,
    };

    // Schemes
    pub use faceflux_schemes::{
        downwind_interpolate, interpolate, van_leer_interpolate, InterpolationScheme,
        SchemeContext, SchemeRegistry, TvdLimiter,
    };
}
