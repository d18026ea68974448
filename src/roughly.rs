use crate::percent::from_percent;
use num_traits::Float;

/// Rounds `v` to the nearest multiple of `factor`.
fn trial_round<F: Float>(v: F, factor: F) -> F {
    (v / factor).round() * factor
}

/// Converts `v` to a value that is "roughly" the same but closer to some
/// multiple of five or ten, for display purposes. The result is never more
/// than `accuracy` percent away from `v`.
///
/// The accuracy must be greater than 0 and less than 100; out-of-range
/// accuracies, like a `v` of zero, leave the value untouched.
pub fn roughly<F: Float>(v: F, accuracy: F) -> F {
    if v == F::zero() {
        return v;
    }

    if accuracy <= F::zero() || accuracy >= F::from(100).unwrap() {
        return v;
    }
    let accuracy = from_percent(accuracy);

    let sign = if v < F::zero() { -F::one() } else { F::one() };
    let mut new_v = v * sign;

    // rescale so the rounding factors below work at any magnitude
    let mut max_diff = new_v * accuracy;
    let precision = max_diff.log10().floor() - F::one();
    let scale = F::from(10).unwrap().powf(precision);
    new_v = new_v / scale;
    max_diff = max_diff / scale;

    // coarsest first: take the roughest multiple inside the allowed error
    for &factor in &[100., 50., 10., 5.] {
        let factor = F::from(factor).unwrap();
        let trial = trial_round(new_v, factor);
        if (trial - new_v).abs() < max_diff {
            new_v = trial;
            break;
        }
    }

    new_v * scale * sign
}
