use super::{check_params, normalize, ApproxError, ApproxErrorKind};
use crate::percent::from_percent;
use crate::rational::Rational;

/// The maximum number of Farey-sequence entries that will be tried before
/// giving up with [`ConvergesTooSlowly`][ApproxErrorKind::ConvergesTooSlowly].
///
/// Bisection by mediants converges linearly, so targets whose fractional
/// part is very close to 0 or 1, or accuracy targets near the limits of
/// `f64`, can exhaust this bound without getting close enough.
pub const MAX_FAREY_TRIALS: usize = 100;

/// The mediant of two ratios: given a/b and c/d, the ratio (a+c)/(b+d).
///
/// When lower < upper and the pair are Farey neighbors (bc − ad == 1), the
/// mediant is guaranteed to lie strictly between them and to be a Farey
/// neighbor of each — that property is the caller's to maintain, not checked
/// here. Only the sums are checked, for overflow.
fn mediant(lower: Rational, upper: Rational) -> Result<Rational, ApproxErrorKind> {
    let n = lower
        .n
        .checked_add(upper.n)
        .ok_or(ApproxErrorKind::NumeratorOverflow)?;
    let d = lower
        .d
        .checked_add(upper.d)
        .ok_or(ApproxErrorKind::DenominatorOverflow)?;
    Ok(Rational { n, d })
}

/// Rebuilds a full signed candidate from a mediant of the fractional part:
/// (d·int_part + n) / d, with the sign applied to the numerator.
fn compose(int_part: i64, med: Rational, sign: i64) -> Result<Rational, ApproxErrorKind> {
    let n = med
        .d
        .checked_mul(int_part)
        .and_then(|w| w.checked_add(med.n))
        .ok_or(ApproxErrorKind::ValueTooBig)?;

    Ok(Rational {
        n: n * sign,
        d: med.d,
    })
}

/// Returns a [`Rational`] within `accuracy` percent of `v`, found by
/// bisecting the Farey sequence with mediants.
///
/// The accuracy must be greater than 0 and less than 100. Values that cannot
/// be bracketed by `i64`s (infinities, NaN, magnitudes of 2^63 or more)
/// cannot be approximated and fail immediately.
///
/// At most [`MAX_FAREY_TRIALS`] mediants are tried; if none is close enough
/// the call fails with `ConvergesTooSlowly`, carrying the last candidate.
/// This may return a different fraction than
/// [`rational_approximation`][super::rational_approximation] for the same
/// input; both satisfy the accuracy bound when they succeed.
pub fn rational_approximation_farey(v: f64, accuracy: f64) -> Result<Rational, ApproxError> {
    if v == 0. {
        return Ok(Rational::ZERO);
    }

    check_params(v, accuracy).map_err(|kind| ApproxError::new(kind, Rational::ZERO))?;

    let accuracy = from_percent(accuracy);
    let (v_abs, sign) = normalize(v);

    let int_part = v_abs.floor();
    let frac_part = v_abs - int_part;
    let int_part = int_part as i64;

    // an exact integer needs no bisection at all
    if frac_part == 0. {
        return Ok(Rational {
            n: int_part * sign,
            d: 1,
        });
    }

    // the base bounds of the Farey sequence, bracketing the fractional part
    let mut lower = Rational { n: 0, d: 1 };
    let mut upper = Rational { n: 1, d: 1 };

    let mut best = Rational::ZERO;

    for _ in 0..MAX_FAREY_TRIALS {
        let med = mediant(lower, upper).map_err(|kind| ApproxError::new(kind, best))?;

        let r = compose(int_part, med, sign).map_err(|kind| ApproxError::new(kind, best))?;
        if r.proximity(v) <= accuracy {
            return Ok(r);
        }
        best = r;

        if frac_part > med.as_f64() {
            lower = med;
        } else {
            upper = med;
        }
    }

    Err(ApproxError::new(ApproxErrorKind::ConvergesTooSlowly, best))
}
