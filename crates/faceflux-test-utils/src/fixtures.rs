//! Reusable meshes, fluxes, and fields.

use faceflux_core::{CellField, FaceFluxField, FieldValue};
use faceflux_mesh::{zero_gradient, Domain, EdgeBehavior, Grid2D, Line1D, Mesh, SchemeTable};

/// Name given to every flux built here.
pub const FLUX_NAME: &str = "phi";

/// Unit-spaced line of `n` cells with boundary faces.
pub fn line(n: usize) -> Line1D {
    Line1D::new(n, EdgeBehavior::Clamp).expect("test line must be non-empty")
}

/// `rows × cols` unit grid with boundary faces.
pub fn grid(rows: usize, cols: usize) -> Grid2D {
    Grid2D::new(rows, cols, EdgeBehavior::Clamp).expect("test grid must be non-empty")
}

/// Domain over [`line`]`(n)` with `schemes` and a uniform flux of `flux`
/// stored as [`FLUX_NAME`].
pub fn line_domain(n: usize, flux: f64, schemes: SchemeTable) -> Domain {
    let mut domain = Domain::new(line(n)).with_schemes(schemes);
    let phi = uniform_flux(domain.mesh(), flux);
    domain.fields_mut().insert(phi);
    domain
}

/// The same flux on every face.
pub fn uniform_flux(mesh: &dyn Mesh, value: f64) -> FaceFluxField {
    FaceFluxField::uniform(FLUX_NAME, mesh.n_faces(), value)
}

/// A flux whose value on face `f` is `f(face)`.
pub fn flux_from(mesh: &dyn Mesh, f: impl Fn(usize) -> f64) -> FaceFluxField {
    FaceFluxField::new(FLUX_NAME, (0..mesh.n_faces()).map(f).collect())
}

/// A zero-gradient cell field.
pub fn cell_field<T: FieldValue>(mesh: &dyn Mesh, name: &str, cells: Vec<T>) -> CellField<T> {
    zero_gradient(mesh, name, cells).expect("fixture field must match the mesh")
}

/// A zero-gradient field holding `value` in every cell.
pub fn constant_field<T: FieldValue>(mesh: &dyn Mesh, name: &str, value: T) -> CellField<T> {
    cell_field(mesh, name, vec![value; mesh.n_cells()])
}
