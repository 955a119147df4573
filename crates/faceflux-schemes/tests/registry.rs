//! Registry resolution, errors, and user-registered schemes.

use faceflux_core::{
    CellField, FaceWeightField, SchemeError, SchemeStream, StreamError, Tensor, ValueKind,
};
use faceflux_mesh::{FieldStore, Mesh};
use faceflux_schemes::{InterpolationScheme, SchemeContext, SchemeRegistry};
use faceflux_test_utils::fixtures::{cell_field, line, uniform_flux, FLUX_NAME};

const DEFAULT_NAMES: [&str; 9] = [
    "upwind",
    "downwind",
    "linear",
    "vanLeer",
    "Minmod",
    "SuperBee",
    "vanAlbada",
    "MUSCL",
    "limitedLinear",
];

#[test]
fn defaults_in_registration_order() {
    let registry = SchemeRegistry::<f64>::with_defaults();
    assert_eq!(registry.names().collect::<Vec<_>>(), DEFAULT_NAMES);

    let mut manual = SchemeRegistry::<f64>::new();
    manual.register_defaults().unwrap();
    assert_eq!(manual.names().collect::<Vec<_>>(), DEFAULT_NAMES);
}

#[test]
fn unknown_scheme_lists_known_names() {
    let registry = SchemeRegistry::<f64>::with_directional();
    let mesh = line(3);
    let store = FieldStore::new();
    let phi = uniform_flux(&mesh, 1.0);
    let ctx = SchemeContext::new(&mesh, &store).with_flux(&phi);

    let err = registry.resolve("vanLeer", &ctx).err().unwrap();
    assert_eq!(
        err,
        SchemeError::UnknownScheme {
            name: "vanLeer".into(),
            known: vec!["upwind".into(), "downwind".into(), "linear".into()],
        }
    );
    assert_eq!(
        err.to_string(),
        "unknown interpolation scheme 'vanLeer', valid schemes are: [upwind, downwind, linear]"
    );
}

#[test]
fn empty_spec_is_a_stream_error() {
    let registry = SchemeRegistry::<f64>::with_defaults();
    let mesh = line(3);
    let store = FieldStore::new();
    let ctx = SchemeContext::new(&mesh, &store);
    assert_eq!(
        registry.resolve("   ", &ctx).err().unwrap(),
        SchemeError::Stream(StreamError::UnexpectedEnd { expected: "word" })
    );
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = SchemeRegistry::<f64>::with_defaults();
    assert_eq!(
        registry.register_directional().unwrap_err(),
        SchemeError::DuplicateScheme {
            name: "upwind".into()
        }
    );
    assert_eq!(registry.len(), DEFAULT_NAMES.len());
}

#[test]
fn resolving_twice_gives_identical_weights() {
    let registry = SchemeRegistry::<f64>::with_defaults();
    let mesh = line(6);
    let store = FieldStore::new();
    let phi = uniform_flux(&mesh, 2.0);
    let ctx = SchemeContext::new(&mesh, &store).with_flux(&phi);
    let t = cell_field(&mesh, "T", vec![0.0, 0.1, 0.5, 2.0, 2.1, 2.0]);

    for name in DEFAULT_NAMES {
        let spec = if name == "limitedLinear" { "limitedLinear 1" } else { name };
        let a = registry.resolve(spec, &ctx).unwrap().weights(&t).unwrap();
        let b = registry.resolve(spec, &ctx).unwrap().weights(&t).unwrap();
        assert_eq!(a, b, "{spec}");
    }
}

#[test]
fn limited_schemes_need_a_flux() {
    let registry = SchemeRegistry::<f64>::with_defaults();
    let mesh = line(3);
    let store = FieldStore::new();
    let ctx = SchemeContext::new(&mesh, &store);
    assert_eq!(
        registry.resolve("vanLeer", &ctx).err().unwrap(),
        SchemeError::MissingFlux {
            scheme: "vanLeer".into()
        }
    );
    // Linear needs none.
    assert!(registry.resolve("linear", &ctx).is_ok());
}

#[test]
fn directional_scheme_binds_named_flux_from_store() {
    let registry = SchemeRegistry::<f64>::with_defaults();
    let mesh = line(3);
    let mut store = FieldStore::new();
    store.insert(uniform_flux(&mesh, -1.0));
    let ctx = SchemeContext::new(&mesh, &store);
    let t = cell_field(&mesh, "T", vec![1.0, 2.0, 3.0]);

    let down = registry
        .resolve(&format!("downwind {FLUX_NAME}"), &ctx)
        .unwrap();
    assert_eq!(down.name(), "downwind");
    assert_eq!(down.weights(&t).unwrap().values(), &[1.0; 4]);

    assert_eq!(
        registry.resolve("upwind nope", &ctx).err().unwrap(),
        SchemeError::MissingField {
            name: "nope".into()
        }
    );
}

#[test]
fn limited_linear_parameter_errors() {
    let registry = SchemeRegistry::<f64>::with_defaults();
    let mesh = line(3);
    let store = FieldStore::new();
    let phi = uniform_flux(&mesh, 1.0);
    let ctx = SchemeContext::new(&mesh, &store).with_flux(&phi);

    assert!(matches!(
        registry.resolve("limitedLinear 2", &ctx).err().unwrap(),
        SchemeError::InvalidConfig { scheme, .. } if scheme == "limitedLinear"
    ));
    assert_eq!(
        registry.resolve("limitedLinear", &ctx).err().unwrap(),
        SchemeError::Stream(StreamError::UnexpectedEnd { expected: "scalar" })
    );
    assert_eq!(
        registry.resolve("limitedLinear half", &ctx).err().unwrap(),
        SchemeError::Stream(StreamError::InvalidNumber {
            token: "half".into()
        })
    );
}

#[test]
fn tensor_registry_offers_flux_only_schemes() {
    let registry = SchemeRegistry::<Tensor>::with_directional();
    let mesh = line(2);
    let store = FieldStore::new();
    let phi = uniform_flux(&mesh, 1.0);
    let ctx = SchemeContext::new(&mesh, &store).with_flux(&phi);
    let tau = cell_field(&mesh, "tau", vec![Tensor::identity(), Tensor::zeros()]);

    let f = registry.resolve("upwind", &ctx).unwrap().interpolate(&tau).unwrap();
    assert_eq!(f.get(0), Tensor::identity());
    assert!(registry.resolve("MUSCL", &ctx).is_err());
}

/// A user scheme that rejects every field it is given.
struct Rejecting<'a> {
    mesh: &'a dyn Mesh,
}

impl InterpolationScheme<Tensor> for Rejecting<'_> {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn mesh(&self) -> &dyn Mesh {
        self.mesh
    }

    fn weights(&self, _field: &CellField<Tensor>) -> Result<FaceWeightField, SchemeError> {
        Err(SchemeError::UnsupportedValueKind {
            scheme: "rejecting".into(),
            kind: ValueKind::Tensor,
        })
    }
}

fn build_rejecting<'a>(
    ctx: &SchemeContext<'a>,
    _stream: &mut SchemeStream,
) -> Result<Box<dyn InterpolationScheme<Tensor> + 'a>, SchemeError> {
    Ok(Box::new(Rejecting { mesh: ctx.mesh }))
}

#[test]
fn user_schemes_can_be_registered() {
    let mut registry = SchemeRegistry::<Tensor>::new();
    registry.register("rejecting", build_rejecting).unwrap();
    assert!(registry.contains("rejecting"));

    let mesh = line(2);
    let store = FieldStore::new();
    let ctx = SchemeContext::new(&mesh, &store);
    let tau = cell_field(&mesh, "tau", vec![Tensor::zeros(); 2]);
    let scheme = registry.resolve("rejecting", &ctx).unwrap();
    assert_eq!(
        scheme.weights(&tau).unwrap_err().to_string(),
        "scheme 'rejecting' does not support tensor fields"
    );
}

#[test]
fn registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SchemeRegistry<f64>>();
    assert_send_sync::<SchemeRegistry<Tensor>>();

    let registry = SchemeRegistry::<f64>::with_defaults();
    let mesh = line(5);
    let store = FieldStore::new();
    let phi = uniform_flux(&mesh, 1.0);
    let t = cell_field(&mesh, "T", vec![0.0, 1.0, 4.0, 9.0, 16.0]);
    let ctx = SchemeContext::new(&mesh, &store).with_flux(&phi);
    let expected = registry.resolve("SuperBee", &ctx).unwrap().weights(&t).unwrap();

    let (registry, mesh, store, phi, t) = (&registry, &mesh, &store, &phi, &t);
    let results: Vec<FaceWeightField> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    let ctx = SchemeContext::new(mesh, store).with_flux(phi);
                    registry.resolve("SuperBee", &ctx).unwrap().weights(t).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results.len(), 4);
    for w in results {
        assert_eq!(w, expected);
    }
}
