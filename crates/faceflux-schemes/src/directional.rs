//! Schemes weighted by flux direction alone.

use crate::registry::SchemeContext;
use crate::scheme::{check_cell_field, check_flux, InterpolationScheme};
use faceflux_core::{CellField, FaceFluxField, FaceWeightField, FieldValue, SchemeError, SchemeStream};
use faceflux_mesh::Mesh;
use tracing::trace;

/// `1` where `x >= 0`, else `0`.
#[inline]
pub fn pos0(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// `1` where `x < 0`, else `0`.
#[inline]
pub fn neg(x: f64) -> f64 {
    if x < 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Which cell a directional scheme takes the face value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The cell the flux comes from. Zero flux counts as coming from the
    /// owner.
    Upwind,
    /// The cell the flux goes to. Exactly `1 - upwind` on every face.
    Downwind,
}

impl Direction {
    /// Owner weight for a face carrying `flux`.
    #[inline]
    pub fn weight(self, flux: f64) -> f64 {
        match self {
            Self::Upwind => pos0(flux),
            Self::Downwind => neg(flux),
        }
    }

    /// Registered scheme name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Upwind => "upwind",
            Self::Downwind => "downwind",
        }
    }
}

/// Upwind or downwind interpolation against a borrowed flux.
///
/// The weights depend only on the sign of the flux, so one instance serves
/// fields of every value type.
///
/// # Examples
///
/// ```
/// use faceflux_core::FaceFluxField;
/// use faceflux_mesh::{zero_gradient, EdgeBehavior, Line1D};
/// use faceflux_schemes::{Directional, InterpolationScheme};
///
/// let line = Line1D::new(3, EdgeBehavior::Wrap).unwrap();
/// let phi = FaceFluxField::new("phi", vec![1.0, -1.0, 0.0]);
/// let t = zero_gradient(&line, "T", vec![10.0, 20.0, 30.0]).unwrap();
///
/// let up = Directional::upwind(&line, &phi).unwrap();
/// assert_eq!(up.interpolate(&t).unwrap().values(), &[10.0, 30.0, 30.0]);
/// let down = Directional::downwind(&line, &phi).unwrap();
/// assert_eq!(down.interpolate(&t).unwrap().values(), &[20.0, 20.0, 10.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Directional<'a> {
    direction: Direction,
    mesh: &'a dyn Mesh,
    flux: &'a FaceFluxField,
}

impl<'a> Directional<'a> {
    /// Bind to `mesh` and `flux`.
    ///
    /// # Errors
    ///
    /// [`SchemeError::SizeMismatch`] if the flux does not have one value
    /// per face.
    pub fn new(
        direction: Direction,
        mesh: &'a dyn Mesh,
        flux: &'a FaceFluxField,
    ) -> Result<Self, SchemeError> {
        check_flux(mesh, flux)?;
        Ok(Self {
            direction,
            mesh,
            flux,
        })
    }

    /// An upwind scheme.
    pub fn upwind(mesh: &'a dyn Mesh, flux: &'a FaceFluxField) -> Result<Self, SchemeError> {
        Self::new(Direction::Upwind, mesh, flux)
    }

    /// A downwind scheme.
    pub fn downwind(mesh: &'a dyn Mesh, flux: &'a FaceFluxField) -> Result<Self, SchemeError> {
        Self::new(Direction::Downwind, mesh, flux)
    }

    /// Bind from configuration: a flux name on `stream` if there is one,
    /// else the context's explicit flux.
    pub fn from_stream(
        direction: Direction,
        ctx: &SchemeContext<'a>,
        stream: &mut SchemeStream,
    ) -> Result<Self, SchemeError> {
        let flux = ctx.bind_flux(direction.name(), stream)?;
        Self::new(direction, ctx.mesh, flux)
    }

    /// Upwind or downwind.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The bound flux.
    pub fn flux(&self) -> &'a FaceFluxField {
        self.flux
    }
}

impl<T: FieldValue> InterpolationScheme<T> for Directional<'_> {
    fn name(&self) -> &str {
        self.direction.name()
    }

    fn mesh(&self) -> &dyn Mesh {
        self.mesh
    }

    fn weights(&self, field: &CellField<T>) -> Result<FaceWeightField, SchemeError> {
        check_cell_field(self.mesh, field)?;
        trace!(
            scheme = self.direction.name(),
            mesh = %self.mesh.instance_id(),
            field = field.name(),
            flux = self.flux.name(),
            "directional weights"
        );
        Ok(self
            .flux
            .map(format!("{}Weights", self.direction.name()), |phi| {
                self.direction.weight(phi)
            }))
    }
}
