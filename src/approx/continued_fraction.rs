use super::{check_params, normalize, ApproxError, ApproxErrorKind};
use crate::percent::from_percent;
use crate::rational::Rational;

/// The longest continued-fraction expansion that will be tried. Every finite
/// `f64` collapses to an exact rational within this many coefficients, so a
/// longer expansion never helps.
const MAX_CF_LEN: usize = 20;

/// Returns the first coefficients (at most `max_vals` of them) of the
/// continued-fraction expansion of `v`.
///
/// The expansion is computed by repeatedly taking the floor, subtracting it
/// and reciprocating the remainder; it stops early when the remainder hits
/// exact zero. A floor that cannot be represented as an `i64` stops the
/// expansion: that is an error only when it happens on the *first*
/// coefficient — a partial expansion is still a usable approximation of `v`,
/// an empty one is not.
pub(super) fn continued_fraction(
    mut v: f64,
    max_vals: usize,
) -> Result<Vec<i64>, ApproxErrorKind> {
    if v.is_infinite() {
        return Err(ApproxErrorKind::TargetInfinite);
    }
    if v.is_nan() {
        return Err(ApproxErrorKind::TargetNaN);
    }

    let mut cf = Vec::with_capacity(max_vals);

    for _ in 0..max_vals {
        let int_part = v.floor();
        if int_part >= i64::MAX as f64 || (int_part as i64) as f64 != int_part {
            if cf.is_empty() {
                return Err(ApproxErrorKind::ValueTooBig);
            }
            break;
        }

        cf.push(int_part as i64);

        v -= int_part;
        if v <= 0. {
            break;
        }
        v = 1. / v;
    }

    Ok(cf)
}

/// Collapses a non-empty coefficient list into a single ratio, folding from
/// the last coefficient back to the first.
///
/// Whenever incorporating a coefficient would overflow an `i64`, the fold
/// *restarts* from that coefficient and the already-accumulated tail is
/// discarded. Dropping the tail loses the least significant part of the
/// expansion, so the result is still a valid (if coarser) approximation;
/// overflow here is a recovery point, not a failure.
fn collapse(cf: &[i64], sign: i64) -> Rational {
    let mut r = Rational {
        n: 1,
        d: cf[cf.len() - 1],
    };

    for &coeff in cf[..cf.len() - 1].iter().rev() {
        match coeff.checked_mul(r.d).and_then(|p| r.n.checked_add(p)) {
            Some(n) => {
                r.n = n;
                r = r.invert();
            }
            // restart, ignoring the tail folded so far
            None => {
                r = Rational { n: 1, d: coeff };
            }
        }
    }

    let mut r = r.invert(); // undo the final swap
    r.n *= sign;
    r
}

/// Returns a [`Rational`] within `accuracy` percent of `v`, found by
/// collapsing progressively longer continued-fraction expansions of `v`.
///
/// The accuracy must be greater than 0 and less than 100. Values that cannot
/// be bracketed by `i64`s (infinities, NaN, magnitudes of 2^63 or more)
/// cannot be approximated and fail immediately.
///
/// This may return a different fraction than
/// [`rational_approximation_farey`][super::rational_approximation_farey]
/// for the same input; both satisfy the accuracy bound when they succeed.
pub fn rational_approximation(v: f64, accuracy: f64) -> Result<Rational, ApproxError> {
    if v == 0. {
        return Ok(Rational::ZERO);
    }

    check_params(v, accuracy).map_err(|kind| ApproxError::new(kind, Rational::ZERO))?;

    let accuracy = from_percent(accuracy);
    let (v_abs, sign) = normalize(v);

    let mut best = Rational::ZERO;

    for cf_len in 1..=MAX_CF_LEN {
        let cf = continued_fraction(v_abs, cf_len)
            .map_err(|kind| ApproxError::new(kind, best))?;

        let r = collapse(&cf, sign);
        if r.proximity(v) <= accuracy {
            return Ok(r);
        }
        best = r;
    }

    Err(ApproxError::new(ApproxErrorKind::AccuracyNotMet, best))
}
