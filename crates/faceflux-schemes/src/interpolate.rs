//! Interpolation entry points.
//!
//! [`interpolate`] is the usual call: it looks up the field's scheme in the
//! domain's [`SchemeTable`](faceflux_mesh::SchemeTable), builds it through
//! the registry, and applies it. Callers that hold a scheme across many
//! calls use [`interpolate_with`] instead.

use crate::registry::{SchemeContext, SchemeRegistry};
use crate::scheme::InterpolationScheme;
use faceflux_core::{CellField, FaceField, FaceFluxField, FieldValue, SchemeError};
use faceflux_mesh::Domain;

/// Scheme-table key read by [`van_leer_interpolate`].
pub const VAN_LEER_KEY: &str = "vanLeer";

/// Scheme-table key read by [`downwind_interpolate`].
pub const DOWNWIND_KEY: &str = "downwind";

/// Face values of `field` under the scheme configured for its name.
///
/// The scheme is built for this call only and bound to `flux` and the
/// domain's mesh.
///
/// # Errors
///
/// - [`SchemeError::NoSchemeConfigured`]: no entry for the field and no
///   default
/// - [`SchemeError::UnknownScheme`]: the entry names an unregistered scheme
/// - construction errors from the scheme (missing flux field, bad
///   parameters) and [`SchemeError::SizeMismatch`]
///
/// # Examples
///
/// ```
/// use faceflux_core::FaceFluxField;
/// use faceflux_mesh::{zero_gradient, Domain, EdgeBehavior, Line1D, Mesh, SchemeTable};
/// use faceflux_schemes::{interpolate, SchemeRegistry};
///
/// let domain = Domain::new(Line1D::new(4, EdgeBehavior::Clamp).unwrap())
///     .with_schemes(SchemeTable::new().with("T", "upwind"));
/// let registry = SchemeRegistry::<f64>::with_defaults();
/// let phi = FaceFluxField::uniform("phi", domain.mesh().n_faces(), -1.0);
/// let t = zero_gradient(domain.mesh(), "T", vec![1.0, 2.0, 3.0, 4.0]).unwrap();
///
/// let t_f = interpolate(&domain, &registry, &t, &phi).unwrap();
/// assert_eq!(&t_f.values()[..3], &[2.0, 3.0, 4.0]);
/// ```
pub fn interpolate<T: FieldValue>(
    domain: &Domain,
    registry: &SchemeRegistry<T>,
    field: &CellField<T>,
    flux: &FaceFluxField,
) -> Result<FaceField<T>, SchemeError> {
    interpolate_keyed(domain, registry, field.name(), field, flux)
}

/// Like [`interpolate`], taking the field and flux by value.
///
/// Both are dropped before the result is returned, so their storage is
/// released as soon as the face field exists.
pub fn interpolate_consuming<T: FieldValue>(
    domain: &Domain,
    registry: &SchemeRegistry<T>,
    field: CellField<T>,
    flux: FaceFluxField,
) -> Result<FaceField<T>, SchemeError> {
    let result = interpolate(domain, registry, &field, &flux);
    drop(field);
    drop(flux);
    result
}

/// Face values of `field` under an already constructed scheme.
pub fn interpolate_with<T: FieldValue>(
    scheme: &dyn InterpolationScheme<T>,
    field: &CellField<T>,
) -> Result<FaceField<T>, SchemeError> {
    scheme.interpolate(field)
}

/// [`interpolate`] using the `vanLeer` scheme-table entry (or the default)
/// regardless of the field's name.
pub fn van_leer_interpolate<T: FieldValue>(
    domain: &Domain,
    registry: &SchemeRegistry<T>,
    field: &CellField<T>,
    flux: &FaceFluxField,
) -> Result<FaceField<T>, SchemeError> {
    interpolate_keyed(domain, registry, VAN_LEER_KEY, field, flux)
}

/// [`interpolate`] using the `downwind` scheme-table entry (or the default)
/// regardless of the field's name.
pub fn downwind_interpolate<T: FieldValue>(
    domain: &Domain,
    registry: &SchemeRegistry<T>,
    field: &CellField<T>,
    flux: &FaceFluxField,
) -> Result<FaceField<T>, SchemeError> {
    interpolate_keyed(domain, registry, DOWNWIND_KEY, field, flux)
}

fn interpolate_keyed<T: FieldValue>(
    domain: &Domain,
    registry: &SchemeRegistry<T>,
    key: &str,
    field: &CellField<T>,
    flux: &FaceFluxField,
) -> Result<FaceField<T>, SchemeError> {
    let spec = domain.schemes().lookup(key)?;
    let ctx = SchemeContext::from_domain(domain).with_flux(flux);
    let scheme = registry.resolve(spec, &ctx)?;
    interpolate_with(scheme.as_ref(), field)
}
