//! Small numeric utilities with no state and no side effects.
//!
//! The interesting part of this crate is the rational approximation engine:
//! given a real value and an accuracy expressed as a percentage, it finds a
//! fraction of `i64`s within that accuracy, either by
//! [continued fractions][rational_approximation] or by
//! [bisection of the Farey sequence][rational_approximation_farey]. The two
//! methods visit different candidates and may legitimately return different
//! fractions for the same input.
//!
//! The rest of the crate is a grab bag of helpers for comparing measured
//! values within a tolerance and for sizing numbers for display.

mod rational;
pub use rational::Rational;

mod approx;
pub use approx::{
    rational_approximation, rational_approximation_farey, ApproxError, ApproxErrorKind,
    MAX_FAREY_TRIALS,
};

mod percent;
pub use percent::{from_percent, to_percent};

mod almost_equal;
pub use almost_equal::{almost_equal, within_n_percent};

mod digits;
pub use digits::{digits, digits_in_base, digits_in_base_unsigned, digits_unsigned};

mod min_max;
pub use min_max::{max_of, min_of};

mod roughly;
pub use roughly::roughly;

mod sigfigs;
pub use sigfigs::{fmt_vals_for_sig_figs, fmt_vals_for_sig_figs_multi};
