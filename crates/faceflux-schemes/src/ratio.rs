//! Gradient ratio `r` for TVD limiters.

use faceflux_core::{Limitable, Vector};

/// Cap on `|gradcf / gradf|` before the ratio switches to its bounded form.
pub const RATIO_CAP: f64 = 1000.0;

#[inline]
fn sign(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Ratio of the upwind-extrapolated difference to the face difference.
///
/// ```text
/// gradf  = φN - φP
/// gradcf = d · grad_upwind       (grad_P if flux >= 0, else grad_N)
/// r      = 2·gradcf/gradf - 1
/// ```
///
/// Vector values are reduced to scalars by projecting onto `φN - φP`
/// (see [`Limitable::ratio_terms`]).
///
/// When `|gradcf| >= RATIO_CAP·|gradf|` (including `gradf == 0`) the
/// quotient is replaced by `2·RATIO_CAP·sign(gradcf)·sign(gradf) - 1`,
/// with `sign(0) = +1`. The result is therefore finite for finite input.
///
/// The capped form depends on face orientation when `gradf == 0`: a flat
/// face reads `+1999` or `-2001` depending on which side is upwind. Both
/// sides are equal there, so the face value does not depend on it.
///
/// # Examples
///
/// ```
/// use faceflux_core::Vector;
/// use faceflux_schemes::gradient_ratio;
///
/// let d = Vector::x();
/// let g = Vector::new(1.5, 0.0, 0.0);
/// assert_eq!(gradient_ratio(1.0, 1.0, 3.0, &g, &Vector::zeros(), &d), 0.5);
/// // flat face, sloped upwind cell
/// assert_eq!(gradient_ratio(1.0, 3.0, 3.0, &g, &Vector::zeros(), &d), 1999.0);
/// ```
pub fn gradient_ratio<T: Limitable>(
    flux: f64,
    phi_p: T,
    phi_n: T,
    grad_p: &T::Grad,
    grad_n: &T::Grad,
    d: &Vector,
) -> f64 {
    let grad_upwind = if flux >= 0.0 { grad_p } else { grad_n };
    let (gradf, gradcf) = T::ratio_terms(phi_n - phi_p, T::extrapolate(d, grad_upwind));

    if gradcf.abs() >= RATIO_CAP * gradf.abs() {
        2.0 * RATIO_CAP * sign(gradcf) * sign(gradf) - 1.0
    } else {
        2.0 * (gradcf / gradf) - 1.0
    }
}
