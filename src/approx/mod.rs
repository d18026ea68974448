//! Rational approximation of real values.
//!
//! Two independent algorithms are provided, sharing the [`Rational`] result
//! type and the parameter validation below:
//!
//! - [`rational_approximation`] expands the value as a continued fraction
//!   and collapses progressively longer prefixes of the expansion until one
//!   lands within the requested accuracy. It jumps directly to good
//!   approximants and converges for any finite `f64` in at most 20 steps.
//! - [`rational_approximation_farey`] bisects the Farey sequence by
//!   mediants. It converges linearly and can legitimately run out of trials
//!   for targets whose fractional part is very close to 0 or 1, or when the
//!   requested accuracy is extreme.
//!
//! The two visit different candidates: for π at 1% the continued-fraction
//! method returns 22/7 while Farey bisection returns 19/6. Both results are
//! valid; callers pick the method whose convergence behavior suits them.
//!
//! Accuracy is expressed as a percentage in the open interval (0, 100): an
//! accuracy of 1 asks for a fraction within 1% of the target.

use crate::rational::Rational;

mod continued_fraction;
pub use continued_fraction::rational_approximation;

mod farey;
pub use farey::{rational_approximation_farey, MAX_FAREY_TRIALS};

/// Why an approximation could not be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApproxErrorKind {
    /// The accuracy parameter was outside the open interval (0, 100).
    InvalidAccuracy,
    /// The target value was positive or negative infinity.
    TargetInfinite,
    /// The target value was NaN.
    TargetNaN,
    /// The target value was outside the range representable by an `i64`.
    TargetTooLarge,
    /// Summing the numerators of a mediant would overflow an `i64`.
    NumeratorOverflow,
    /// Summing the denominators of a mediant would overflow an `i64`.
    DenominatorOverflow,
    /// A reconstructed numerator or a continued-fraction coefficient would
    /// overflow an `i64`.
    ValueTooBig,
    /// The continued-fraction expansion hit its length bound without
    /// reaching the requested accuracy.
    AccuracyNotMet,
    /// Farey bisection hit its trial bound without reaching the requested
    /// accuracy.
    ConvergesTooSlowly,
}

impl ApproxErrorKind {
    fn as_str(&self) -> &'static str {
        use ApproxErrorKind::*;
        match self {
            InvalidAccuracy => "accuracy must be >0 and <100",
            TargetInfinite => "the value is infinite",
            TargetNaN => "the value is not a number",
            TargetTooLarge => "the value is too big",
            NumeratorOverflow => "overflow: the numerator is too big",
            DenominatorOverflow => "overflow: the denominator is too big",
            ValueTooBig => "the value is too big",
            AccuracyNotMet => "couldn't meet the accuracy target",
            ConvergesTooSlowly => "the Farey sequence converges too slowly",
        }
    }
}

/// A failed approximation.
///
/// `best` is the last candidate computed before the failure — useful for
/// diagnostics, but it does **not** satisfy the accuracy target and is
/// [`Rational::ZERO`] when the failure preceded any candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApproxError {
    pub kind: ApproxErrorKind,
    pub best: Rational,
}

impl ApproxError {
    pub(crate) fn new(kind: ApproxErrorKind, best: Rational) -> Self {
        ApproxError { kind, best }
    }
}

impl std::fmt::Display for ApproxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, no rational approximation is possible",
            self.kind.as_str()
        )
    }
}

impl std::error::Error for ApproxError {}

/// Checks that `accuracy` is a valid percentage for an approximation, i.e.
/// strictly between 0 and 100.
fn check_accuracy(accuracy: f64) -> Result<(), ApproxErrorKind> {
    if accuracy <= 0. || accuracy >= 100. {
        return Err(ApproxErrorKind::InvalidAccuracy);
    }
    Ok(())
}

/// Checks that `v` is finite and inside the range representable by an
/// `i64`; nothing outside that range can be approximated by a ratio of
/// `i64`s.
fn check_target(v: f64) -> Result<(), ApproxErrorKind> {
    if v.is_infinite() {
        return Err(ApproxErrorKind::TargetInfinite);
    }
    if v.is_nan() {
        return Err(ApproxErrorKind::TargetNaN);
    }
    if v >= i64::MAX as f64 || v < i64::MIN as f64 {
        return Err(ApproxErrorKind::TargetTooLarge);
    }
    Ok(())
}

/// Validates both approximation parameters. The accuracy is checked first:
/// when both parameters are bad, the accuracy error is the one reported.
fn check_params(v: f64, accuracy: f64) -> Result<(), ApproxErrorKind> {
    check_accuracy(accuracy)?;
    check_target(v)
}

/// Splits `v` into its absolute value and a ±1 sign multiplier. The sign is
/// read from the sign bit, so −0.0 normalizes to (0.0, −1); callers
/// short-circuit an exact zero before getting here.
fn normalize(v: f64) -> (f64, i64) {
    let sign = if v.is_sign_negative() { -1 } else { 1 };
    (v.abs(), sign)
}
