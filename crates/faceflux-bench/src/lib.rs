//! Benchmark profiles for the faceflux interpolation framework.
//!
//! - [`line_profile`]: long 1D line with a rough scalar field
//! - [`grid_profile`]: square 2D grid with a rough scalar field
//!
//! Field values and flux signs come from a seeded ChaCha generator, so a
//! profile is identical across runs.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use faceflux_core::{CellField, FaceFluxField};
use faceflux_mesh::{
    zero_gradient, Domain, EdgeBehavior, Grid2D, Line1D, Mesh, SchemeTable,
};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Name of the benchmark field.
pub const FIELD: &str = "T";

/// A domain plus one field and one flux to interpolate with.
pub struct Profile {
    /// Mesh, with a vanLeer default scheme.
    pub domain: Domain,
    /// Scalar field named [`FIELD`].
    pub field: CellField<f64>,
    /// Flux with mixed signs.
    pub flux: FaceFluxField,
}

/// `cells`-cell line, periodic.
pub fn line_profile(cells: usize, seed: u64) -> Profile {
    build(Line1D::new(cells, EdgeBehavior::Wrap).unwrap(), seed)
}

/// `side × side` grid with boundary faces.
pub fn grid_profile(side: usize, seed: u64) -> Profile {
    build(Grid2D::new(side, side, EdgeBehavior::Clamp).unwrap(), seed)
}

fn build(mesh: impl Mesh, seed: u64) -> Profile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..mesh.n_cells()).map(|_| unit(&mut rng)).collect();
    let flux = FaceFluxField::new(
        "phi",
        (0..mesh.n_faces()).map(|_| unit(&mut rng) - 0.5).collect(),
    );
    let field = zero_gradient(&mesh, FIELD, values).unwrap();
    let domain = Domain::new(mesh).with_schemes(SchemeTable::new().with_default("vanLeer"));
    Profile {
        domain,
        field,
        flux,
    }
}

/// Uniform sample in `[0, 1)`.
fn unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}
