//! Value algebra that interpolation is generic over.
//!
//! [`FieldValue`] is everything the weighted face combination needs:
//! addition, subtraction, and scaling by `f64`. [`Limitable`] adds the
//! gradient machinery that limited schemes need to measure local
//! smoothness.

use nalgebra::{Matrix3, Vector3};
use std::fmt;
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Three-component vector value (velocities, gradients of scalars).
pub type Vector = Vector3<f64>;

/// Second-rank tensor value (gradients of vectors, stresses).
pub type Tensor = Matrix3<f64>;

/// Classification of a field's value type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// One `f64` per element.
    Scalar,
    /// A [`Vector`] per element.
    Vector,
    /// A [`Tensor`] per element.
    Tensor,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Vector => write!(f, "vector"),
            Self::Tensor => write!(f, "tensor"),
        }
    }
}

/// A value that can be stored in a field and interpolated to faces.
///
/// # Contract
///
/// - `a + (b - a) * 0.0 == a` exactly; [`FieldValue::blend`] relies on it
///   so that spatially constant fields interpolate to the same constant.
/// - Values are plain data: `Copy`, `Send`, and `Sync`.
pub trait FieldValue:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
    /// Kind tag used for typed field-store lookups and diagnostics.
    const KIND: ValueKind;

    /// The additive identity.
    fn zero() -> Self;

    /// Weighted face combination `w·owner + (1-w)·neighbour`.
    ///
    /// Evaluated as `w·(owner - neighbour) + neighbour`, which reproduces
    /// `neighbour` exactly when both sides are equal.
    #[inline]
    fn blend(weight: f64, owner: Self, neighbour: Self) -> Self {
        (owner - neighbour) * weight + neighbour
    }
}

/// A value type whose fields carry gradients, enabling limited schemes.
///
/// The gradient of a scalar is a [`Vector`]; the gradient of a vector is a
/// [`Tensor`] with `grad[(i, j)] = ∂u_j/∂x_i`.
pub trait Limitable: FieldValue {
    /// Gradient type of this value.
    type Grad: Copy
        + Debug
        + Send
        + Sync
        + 'static
        + Add<Output = Self::Grad>
        + Mul<f64, Output = Self::Grad>;

    /// The zero gradient.
    fn zero_grad() -> Self::Grad;

    /// Gauss-gradient contribution `area ⊗ value` of one face.
    fn outer(area: &Vector, value: Self) -> Self::Grad;

    /// Linear extrapolation `d · grad` along displacement `d`.
    fn extrapolate(d: &Vector, grad: &Self::Grad) -> Self;

    /// Reduce a face difference and an extrapolated difference to the
    /// scalar pair `(gradf, gradcf)` whose ratio drives the limiter.
    ///
    /// Scalars use the values directly. Vectors project both onto the face
    /// difference, so the ratio measures extrapolation quality along the
    /// direction the value actually changes.
    fn ratio_terms(delta: Self, extrapolated: Self) -> (f64, f64);
}

impl FieldValue for f64 {
    const KIND: ValueKind = ValueKind::Scalar;

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Limitable for f64 {
    type Grad = Vector;

    #[inline]
    fn zero_grad() -> Vector {
        Vector::zeros()
    }

    #[inline]
    fn outer(area: &Vector, value: f64) -> Vector {
        area * value
    }

    #[inline]
    fn extrapolate(d: &Vector, grad: &Vector) -> f64 {
        d.dot(grad)
    }

    #[inline]
    fn ratio_terms(delta: f64, extrapolated: f64) -> (f64, f64) {
        (delta, extrapolated)
    }
}

impl FieldValue for Vector {
    const KIND: ValueKind = ValueKind::Vector;

    #[inline]
    fn zero() -> Self {
        Vector::zeros()
    }
}

impl Limitable for Vector {
    type Grad = Tensor;

    #[inline]
    fn zero_grad() -> Tensor {
        Tensor::zeros()
    }

    #[inline]
    fn outer(area: &Vector, value: Vector) -> Tensor {
        area * value.transpose()
    }

    #[inline]
    fn extrapolate(d: &Vector, grad: &Tensor) -> Vector {
        grad.tr_mul(d)
    }

    #[inline]
    fn ratio_terms(delta: Vector, extrapolated: Vector) -> (f64, f64) {
        (delta.dot(&delta), delta.dot(&extrapolated))
    }
}

impl FieldValue for Tensor {
    const KIND: ValueKind = ValueKind::Tensor;

    #[inline]
    fn zero() -> Self {
        Tensor::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kind_tags() {
        assert_eq!(<f64 as FieldValue>::KIND, ValueKind::Scalar);
        assert_eq!(<Tensor as FieldValue>::KIND, ValueKind::Tensor);
        assert_eq!(ValueKind::Vector.to_string(), "vector");
    }

    #[test]
    fn blend_endpoints() {
        assert_eq!(f64::blend(1.0, 3.0, 7.0), 3.0);
        assert_eq!(f64::blend(0.0, 3.0, 7.0), 7.0);
        assert_eq!(f64::blend(0.5, 3.0, 7.0), 5.0);
    }

    #[test]
    fn vector_blend_is_componentwise() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(3.0, 2.0, 1.0);
        assert_eq!(Vector::blend(0.5, a, b), Vector::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn scalar_gradient_extrapolates_along_displacement() {
        let area = Vector::new(2.0, 0.0, 0.0);
        let grad = f64::outer(&area, 3.0);
        assert_eq!(grad, Vector::new(6.0, 0.0, 0.0));
        let d = Vector::new(0.5, 1.0, 0.0);
        assert_eq!(f64::extrapolate(&d, &grad), 3.0);
    }

    #[test]
    fn vector_gradient_extrapolates_along_displacement() {
        // u = (x, 2x, 0) => grad[(0, j)] = (1, 2, 0)
        let grad = Vector::outer(&Vector::x(), Vector::new(1.0, 2.0, 0.0));
        let d = Vector::new(0.5, 0.0, 0.0);
        assert_eq!(Vector::extrapolate(&d, &grad), Vector::new(0.5, 1.0, 0.0));
    }

    #[test]
    fn vector_ratio_terms_project_onto_delta() {
        let delta = Vector::new(1.0, 0.0, 0.0);
        let ext = Vector::new(0.5, 9.0, 0.0);
        assert_eq!(Vector::ratio_terms(delta, ext), (1.0, 0.5));
    }

    proptest! {
        #[test]
        fn blend_of_equal_values_is_exact(c in -1e6f64..1e6, w in 0.0f64..=1.0) {
            prop_assert_eq!(f64::blend(w, c, c), c);
        }

        #[test]
        fn blend_stays_between_endpoints(
            a in -1e3f64..1e3,
            b in -1e3f64..1e3,
            w in 0.0f64..=1.0,
        ) {
            let v = f64::blend(w, a, b);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }
    }
}
