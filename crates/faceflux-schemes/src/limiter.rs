//! Limiter functions for TVD schemes.
//!
//! A limiter maps the local smoothness of a field at a face to a blend
//! factor `ψ`. `ψ = 0` selects pure upwind, `ψ = 1` the central weight.
//! Every limiter here is a function of the gradient ratio `r` alone
//! ([`TvdLimiter`]); [`Limiter`] is the wider interface the limited scheme
//! calls, which also sees the face geometry and flux.
//!
//! | limiter | `ψ(r)` |
//! |---------|--------|
//! | [`VanLeer`] | `(r + |r|)/(1 + |r|)` |
//! | [`Minmod`] | `max(min(r, 1), 0)` |
//! | [`SuperBee`] | `max(max(min(2r, 1), min(r, 2)), 0)` |
//! | [`VanAlbada`] | `r(r + 1)/(r² + 1)` for `r > 0`, else 0 |
//! | [`Muscl`] | `max(min(min(2r, 0.5r + 0.5), 2), 0)` |
//! | [`LimitedLinear`] | `max(min(2r/max(k/2, ε), 1), 0)` |

use crate::ratio::gradient_ratio;
use faceflux_core::{Limitable, SchemeError, SchemeStream, Vector};
use std::fmt;

/// Per-face data a limiter may consult.
#[derive(Debug)]
pub struct LimiterInput<'a, T: Limitable> {
    /// Central (geometric) weight of the face.
    pub cd_weight: f64,
    /// Face flux; positive means owner → neighbour.
    pub flux: f64,
    /// Owner value.
    pub phi_p: T,
    /// Neighbour value.
    pub phi_n: T,
    /// Owner cell gradient.
    pub grad_p: &'a T::Grad,
    /// Neighbour cell gradient.
    pub grad_n: &'a T::Grad,
    /// Owner → neighbour displacement.
    pub d: Vector,
}

impl<T: Limitable> LimiterInput<'_, T> {
    /// Gradient ratio `r` at this face.
    pub fn ratio(&self) -> f64 {
        gradient_ratio(
            self.flux,
            self.phi_p,
            self.phi_n,
            self.grad_p,
            self.grad_n,
            &self.d,
        )
    }
}

/// A limiter usable by [`Limited`](crate::Limited) on values of type `T`.
pub trait Limiter<T: Limitable>: fmt::Debug + Send + Sync {
    /// Scheme name the limiter is registered under.
    fn name(&self) -> &'static str;

    /// Blend factor `ψ` for one face. May exceed 1; the limited scheme
    /// clamps it.
    fn limiter(&self, input: &LimiterInput<'_, T>) -> f64;
}

/// A limiter that depends only on the gradient ratio.
pub trait TvdLimiter: fmt::Debug + Send + Sync {
    /// Scheme name the limiter is registered under.
    fn name(&self) -> &'static str;

    /// `ψ(r)`.
    fn psi(&self, r: f64) -> f64;
}

impl<T: Limitable, L: TvdLimiter> Limiter<T> for L {
    fn name(&self) -> &'static str {
        TvdLimiter::name(self)
    }

    #[inline]
    fn limiter(&self, input: &LimiterInput<'_, T>) -> f64 {
        self.psi(input.ratio())
    }
}

/// van Leer's smooth limiter. Reads no parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VanLeer;

impl TvdLimiter for VanLeer {
    fn name(&self) -> &'static str {
        "vanLeer"
    }

    #[inline]
    fn psi(&self, r: f64) -> f64 {
        (r + r.abs()) / (1.0 + r.abs())
    }
}

/// The most diffusive TVD limiter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Minmod;

impl TvdLimiter for Minmod {
    fn name(&self) -> &'static str {
        "Minmod"
    }

    #[inline]
    fn psi(&self, r: f64) -> f64 {
        r.min(1.0).max(0.0)
    }
}

/// Roe's SuperBee: the least diffusive TVD limiter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SuperBee;

impl TvdLimiter for SuperBee {
    fn name(&self) -> &'static str {
        "SuperBee"
    }

    #[inline]
    fn psi(&self, r: f64) -> f64 {
        (2.0 * r).min(1.0).max(r.min(2.0)).max(0.0)
    }
}

/// van Albada's smooth limiter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VanAlbada;

impl TvdLimiter for VanAlbada {
    fn name(&self) -> &'static str {
        "vanAlbada"
    }

    #[inline]
    fn psi(&self, r: f64) -> f64 {
        if r <= 0.0 {
            0.0
        } else {
            r * (r + 1.0) / (r * r + 1.0)
        }
    }
}

/// van Leer's monotonised central limiter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Muscl;

impl TvdLimiter for Muscl {
    fn name(&self) -> &'static str {
        "MUSCL"
    }

    #[inline]
    fn psi(&self, r: f64) -> f64 {
        (2.0 * r).min(0.5 * r + 0.5).min(2.0).max(0.0)
    }
}

/// Linear-upwind blend switching to upwind in steep regions.
///
/// `k ∈ [0, 1]` sets how early the switch happens: `k = 0` is the most
/// accurate and `k = 1` the most bounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimitedLinear {
    k: f64,
    two_by_k: f64,
}

impl LimitedLinear {
    /// Floor applied to `k/2` so that `k = 0` does not divide by zero.
    pub const MIN_HALF_K: f64 = 1.0e-15;

    /// Create the limiter for coefficient `k`.
    ///
    /// # Errors
    ///
    /// [`SchemeError::InvalidConfig`] if `k` is outside `[0, 1]`.
    pub fn new(k: f64) -> Result<Self, SchemeError> {
        if !(0.0..=1.0).contains(&k) {
            return Err(SchemeError::InvalidConfig {
                scheme: "limitedLinear".into(),
                reason: format!("coefficient {k} should be >= 0 and <= 1"),
            });
        }
        Ok(Self {
            k,
            two_by_k: 2.0 / (0.5 * k).max(Self::MIN_HALF_K),
        })
    }

    /// Read `k` from the next token of `stream`.
    pub fn from_stream(stream: &mut SchemeStream) -> Result<Self, SchemeError> {
        Self::new(stream.next_scalar()?)
    }

    /// The coefficient `k`.
    pub fn k(&self) -> f64 {
        self.k
    }
}

impl TvdLimiter for LimitedLinear {
    fn name(&self) -> &'static str {
        "limitedLinear"
    }

    #[inline]
    fn psi(&self, r: f64) -> f64 {
        (self.two_by_k * r).min(1.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceflux_core::StreamError;
    use proptest::prelude::*;

    fn all() -> Vec<Box<dyn TvdLimiter>> {
        vec![
            Box::new(VanLeer),
            Box::new(Minmod),
            Box::new(SuperBee),
            Box::new(VanAlbada),
            Box::new(Muscl),
            Box::new(LimitedLinear::new(0.0).unwrap()),
            Box::new(LimitedLinear::new(0.5).unwrap()),
            Box::new(LimitedLinear::new(1.0).unwrap()),
        ]
    }

    #[test]
    fn van_leer_reference_values() {
        let l = VanLeer;
        assert_eq!(l.psi(0.0), 0.0);
        assert_eq!(l.psi(1.0), 1.0);
        assert!(l.psi(1e6) > 1.99998);
        for r in [-1.0, -100.0, 0.0] {
            assert_eq!(l.psi(r), 0.0, "r = {r}");
        }
        assert!((l.psi(0.5) - 2.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn classic_limiters_at_sample_points() {
        assert_eq!(Minmod.psi(0.5), 0.5);
        assert_eq!(Minmod.psi(3.0), 1.0);
        assert_eq!(SuperBee.psi(0.25), 0.5);
        assert_eq!(SuperBee.psi(1.5), 1.5);
        assert_eq!(SuperBee.psi(5.0), 2.0);
        assert_eq!(VanAlbada.psi(1.0), 1.0);
        assert_eq!(VanAlbada.psi(-2.0), 0.0);
        assert_eq!(Muscl.psi(0.2), 0.4);
        assert_eq!(Muscl.psi(1.0), 1.0);
        assert_eq!(Muscl.psi(10.0), 2.0);
    }

    #[test]
    fn every_limiter_is_zero_for_non_positive_ratio_and_one_at_unity() {
        for l in all() {
            for r in [-1e6, -1.0, -1e-9, 0.0] {
                assert_eq!(l.psi(r), 0.0, "{} at r = {r}", l.name());
            }
            assert!((l.psi(1.0) - 1.0).abs() < 1e-12, "{} at r = 1", l.name());
        }
    }

    #[test]
    fn limited_linear_switches_at_k_over_four() {
        let l = LimitedLinear::new(0.5).unwrap();
        assert_eq!(l.k(), 0.5);
        assert_eq!(l.psi(0.0625), 0.5);
        assert_eq!(l.psi(0.125), 1.0);
        assert_eq!(l.psi(4.0), 1.0);
    }

    #[test]
    fn limited_linear_rejects_out_of_range_k() {
        for k in [-0.1, 1.5] {
            assert!(matches!(
                LimitedLinear::new(k),
                Err(SchemeError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn limited_linear_from_stream() {
        let mut s = SchemeStream::new("0.25 phi");
        assert_eq!(LimitedLinear::from_stream(&mut s).unwrap().k(), 0.25);
        assert_eq!(s.peek(), Some("phi"));

        let mut empty = SchemeStream::new("");
        assert_eq!(
            LimitedLinear::from_stream(&mut empty).unwrap_err(),
            SchemeError::Stream(StreamError::UnexpectedEnd { expected: "scalar" })
        );
    }

    #[test]
    fn limiter_trait_evaluates_ratio() {
        let zero = Vector::zeros();
        let g = Vector::new(1.5, 0.0, 0.0);
        let input = LimiterInput::<f64> {
            cd_weight: 0.5,
            flux: 1.0,
            phi_p: 1.0,
            phi_n: 3.0,
            grad_p: &g,
            grad_n: &zero,
            d: Vector::x(),
        };
        assert_eq!(input.ratio(), 0.5);
        let l: &dyn Limiter<f64> = &VanLeer;
        assert_eq!(l.name(), "vanLeer");
        assert!((l.limiter(&input) - 2.0 / 3.0).abs() < 1e-15);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2000))]

        #[test]
        fn psi_in_tvd_region(r in -1e4f64..1e4) {
            for l in all() {
                let psi = l.psi(r);
                prop_assert!((0.0..=2.0).contains(&psi), "{} psi({r}) = {psi}", l.name());
            }
        }
    }
}
