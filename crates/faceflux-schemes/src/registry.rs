//! Runtime scheme selection by name.

use crate::directional::{Direction, Directional};
use crate::limited::Limited;
use crate::limiter::{LimitedLinear, Minmod, Muscl, SuperBee, TvdLimiter, VanAlbada, VanLeer};
use crate::linear::Linear;
use crate::scheme::InterpolationScheme;
use faceflux_core::{FaceFluxField, FieldValue, Limitable, SchemeError, SchemeStream};
use faceflux_mesh::{Domain, FieldStore, Mesh};
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// What a scheme constructor may bind to.
#[derive(Clone, Copy)]
pub struct SchemeContext<'a> {
    /// Mesh the scheme will be bound to.
    pub mesh: &'a dyn Mesh,
    /// Named fields, for schemes configured with a field name.
    pub fields: &'a FieldStore,
    /// Flux passed explicitly by the caller, if any.
    pub flux: Option<&'a FaceFluxField>,
}

impl<'a> SchemeContext<'a> {
    /// A context with no explicit flux.
    pub fn new(mesh: &'a dyn Mesh, fields: &'a FieldStore) -> Self {
        Self {
            mesh,
            fields,
            flux: None,
        }
    }

    /// A context over a domain's mesh and fields.
    pub fn from_domain(domain: &'a Domain) -> Self {
        Self::new(domain.mesh(), domain.fields())
    }

    /// Attach an explicit flux.
    pub fn with_flux(mut self, flux: &'a FaceFluxField) -> Self {
        self.flux = Some(flux);
        self
    }

    /// The flux a scheme called `scheme` should bind to.
    ///
    /// If the stream's next token is present it names a flux in the field
    /// store and is consumed. Otherwise the explicit flux is used.
    ///
    /// # Errors
    ///
    /// [`SchemeError::MissingField`] / [`SchemeError::FieldTypeMismatch`]
    /// for a bad name, [`SchemeError::MissingFlux`] if there is neither a
    /// name nor an explicit flux.
    pub fn bind_flux(
        &self,
        scheme: &str,
        stream: &mut SchemeStream,
    ) -> Result<&'a FaceFluxField, SchemeError> {
        if stream.peek().is_some() {
            let name = stream.next_word()?;
            return self.fields.lookup::<FaceFluxField>(&name);
        }
        self.flux.ok_or_else(|| SchemeError::MissingFlux {
            scheme: scheme.to_string(),
        })
    }

    /// The explicit flux, required by schemes whose stream carries
    /// parameters rather than a flux name.
    pub fn require_flux(&self, scheme: &str) -> Result<&'a FaceFluxField, SchemeError> {
        self.flux.ok_or_else(|| SchemeError::MissingFlux {
            scheme: scheme.to_string(),
        })
    }
}

impl fmt::Debug for SchemeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeContext")
            .field("mesh", &self.mesh.instance_id())
            .field("fields", self.fields)
            .field("flux", &self.flux.map(|phi| phi.name()))
            .finish()
    }
}

/// Builds a scheme from a context and the tokens after the scheme name.
pub type SchemeConstructor<T> = for<'a> fn(
    &SchemeContext<'a>,
    &mut SchemeStream,
) -> Result<Box<dyn InterpolationScheme<T> + 'a>, SchemeError>;

/// Name → constructor table for schemes over values of type `T`.
///
/// Populate it once at startup, then resolve through `&self` from any
/// thread.
///
/// # Examples
///
/// ```
/// use faceflux_core::{FaceFluxField, SchemeError};
/// use faceflux_mesh::{EdgeBehavior, FieldStore, Line1D, Mesh};
/// use faceflux_schemes::{SchemeContext, SchemeRegistry};
///
/// let registry = SchemeRegistry::<f64>::with_defaults();
/// let line = Line1D::new(4, EdgeBehavior::Clamp).unwrap();
/// let store = FieldStore::new();
/// let phi = FaceFluxField::uniform("phi", line.n_faces(), 1.0);
/// let ctx = SchemeContext::new(&line, &store).with_flux(&phi);
///
/// let scheme = registry.resolve("vanLeer", &ctx).unwrap();
/// assert_eq!(scheme.name(), "vanLeer");
/// assert!(matches!(
///     registry.resolve("QUICK", &ctx),
///     Err(SchemeError::UnknownScheme { .. })
/// ));
/// ```
pub struct SchemeRegistry<T: FieldValue> {
    constructors: IndexMap<String, SchemeConstructor<T>>,
}

impl<T: FieldValue> SchemeRegistry<T> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            constructors: IndexMap::new(),
        }
    }

    /// Register `constructor` under `name`.
    ///
    /// # Errors
    ///
    /// [`SchemeError::DuplicateScheme`] if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: SchemeConstructor<T>,
    ) -> Result<(), SchemeError> {
        let name = name.into();
        if self.constructors.contains_key(&name) {
            return Err(SchemeError::DuplicateScheme { name });
        }
        debug!(scheme = %name, kind = %T::KIND, "registered interpolation scheme");
        self.constructors.insert(name, constructor);
        Ok(())
    }

    /// Register the flux-only schemes: `upwind`, `downwind`, and `linear`.
    pub fn register_directional(&mut self) -> Result<(), SchemeError> {
        self.register_all(directional_table::<T>())
    }

    /// A registry holding the flux-only schemes. Valid for every value type.
    pub fn with_directional() -> Self {
        let mut registry = Self::new();
        registry.extend(directional_table::<T>());
        registry
    }

    fn register_all(
        &mut self,
        table: impl IntoIterator<Item = (&'static str, SchemeConstructor<T>)>,
    ) -> Result<(), SchemeError> {
        for (name, constructor) in table {
            self.register(name, constructor)?;
        }
        Ok(())
    }

    // Only called on registries known not to hold these names.
    fn extend(&mut self, table: impl IntoIterator<Item = (&'static str, SchemeConstructor<T>)>) {
        for (name, constructor) in table {
            debug!(scheme = name, kind = %T::KIND, "registered interpolation scheme");
            self.constructors.insert(name.to_string(), constructor);
        }
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Number of registered schemes.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Build the scheme described by `spec`, e.g. `"limitedLinear 0.5"`.
    pub fn resolve<'a>(
        &self,
        spec: &str,
        ctx: &SchemeContext<'a>,
    ) -> Result<Box<dyn InterpolationScheme<T> + 'a>, SchemeError> {
        self.resolve_stream(&mut SchemeStream::new(spec), ctx)
    }

    /// Build a scheme from the next tokens of `stream`.
    ///
    /// The first token is the scheme name; the constructor consumes what it
    /// needs of the rest.
    ///
    /// # Errors
    ///
    /// [`SchemeError::UnknownScheme`] (listing the registered names) if the
    /// name is not registered, or whatever the constructor reports.
    pub fn resolve_stream<'a>(
        &self,
        stream: &mut SchemeStream,
        ctx: &SchemeContext<'a>,
    ) -> Result<Box<dyn InterpolationScheme<T> + 'a>, SchemeError> {
        let name = stream.next_word()?;
        let constructor = self
            .constructors
            .get(&name)
            .ok_or_else(|| SchemeError::UnknownScheme {
                known: self.names().map(str::to_string).collect(),
                name: name.clone(),
            })?;
        debug!(
            scheme = %name,
            kind = %T::KIND,
            args = ?stream.remaining(),
            "resolving interpolation scheme"
        );
        constructor(ctx, stream)
    }
}

impl<T: Limitable> SchemeRegistry<T> {
    /// Register the flux-only schemes and every limited scheme.
    pub fn register_defaults(&mut self) -> Result<(), SchemeError> {
        self.register_directional()?;
        self.register_all(limited_table::<T>())
    }

    /// A registry holding every built-in scheme.
    pub fn with_defaults() -> Self {
        let mut registry = Self::with_directional();
        registry.extend(limited_table::<T>());
        registry
    }
}

impl<T: FieldValue> Default for SchemeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FieldValue> fmt::Debug for SchemeRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeRegistry")
            .field("kind", &T::KIND)
            .field("schemes", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn directional_table<T: FieldValue>() -> [(&'static str, SchemeConstructor<T>); 3] {
    [
        ("upwind", build_directional::<T, true>),
        ("downwind", build_directional::<T, false>),
        ("linear", build_linear::<T>),
    ]
}

fn build_directional<'a, T: FieldValue, const UPWIND: bool>(
    ctx: &SchemeContext<'a>,
    stream: &mut SchemeStream,
) -> Result<Box<dyn InterpolationScheme<T> + 'a>, SchemeError> {
    let direction = if UPWIND {
        Direction::Upwind
    } else {
        Direction::Downwind
    };
    Ok(Box::new(Directional::from_stream(direction, ctx, stream)?))
}

fn build_linear<'a, T: FieldValue>(
    ctx: &SchemeContext<'a>,
    _stream: &mut SchemeStream,
) -> Result<Box<dyn InterpolationScheme<T> + 'a>, SchemeError> {
    Ok(Box::new(Linear::new(ctx.mesh)))
}

fn limited_table<T: Limitable>() -> [(&'static str, SchemeConstructor<T>); 6] {
    [
        ("vanLeer", build_limited::<T, VanLeer>),
        ("Minmod", build_limited::<T, Minmod>),
        ("SuperBee", build_limited::<T, SuperBee>),
        ("vanAlbada", build_limited::<T, VanAlbada>),
        ("MUSCL", build_limited::<T, Muscl>),
        ("limitedLinear", build_limited_linear::<T>),
    ]
}

fn build_limited<'a, T: Limitable, L>(
    ctx: &SchemeContext<'a>,
    _stream: &mut SchemeStream,
) -> Result<Box<dyn InterpolationScheme<T> + 'a>, SchemeError>
where
    L: TvdLimiter + Default + 'static,
{
    let limiter = L::default();
    let flux = ctx.require_flux(TvdLimiter::name(&limiter))?;
    Ok(Box::new(Limited::<T>::new(ctx.mesh, flux, limiter)?))
}

fn build_limited_linear<'a, T: Limitable>(
    ctx: &SchemeContext<'a>,
    stream: &mut SchemeStream,
) -> Result<Box<dyn InterpolationScheme<T> + 'a>, SchemeError> {
    let limiter = LimitedLinear::from_stream(stream)?;
    let flux = ctx.require_flux("limitedLinear")?;
    Ok(Box::new(Limited::<T>::new(ctx.mesh, flux, limiter)?))
}
