/// Whether `a` and `b` are within `epsilon` of one another, as an absolute
/// difference.
pub fn almost_equal(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() < epsilon
}

/// Whether `a` and `b` are within `pct` percent of one another.
///
/// The test is strictly whether the difference between `a` and `b`, as a
/// proportion of the larger magnitude, is less than `pct`: a `pct` of 10
/// tests for numbers within 10% of each other. Values of differing sign are
/// never considered close, however small the difference.
pub fn within_n_percent(a: f64, b: f64, pct: f64) -> bool {
    if a == b {
        return true;
    }

    if a.is_sign_positive() != b.is_sign_positive() {
        return false;
    }

    let diff = 100. * (a - b).abs();
    diff / a.abs().max(b.abs()) < pct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almost_equal() {
        const CASES: [(f64, f64, f64, bool); 6] = [
            (1.2345, 1.23456, 0.0001, true),
            (1.2345, 1.23456, 0.00001, false),
            (-1.2345, -1.23456, 0.0001, true),
            (-1.2345, -1.23456, 0.00001, false),
            // sign is irrelevant to an absolute comparison
            (-0.00000001, 0.00000001, 0.00001, true),
            (1.23456789, 1.23456789, 0.00000001, true),
        ];

        for (a, b, epsilon, exp) in CASES.iter() {
            assert_eq!(
                almost_equal(*a, *b, *epsilon),
                *exp,
                "a: {}, b: {}, epsilon: {}",
                a,
                b,
                epsilon
            );
        }
    }

    #[test]
    fn test_within_n_percent() {
        const CASES: [(f64, f64, f64, bool); 6] = [
            (100., 109., 10., true),
            (100., 115., 10., false),
            (-100., -109., 10., true),
            (-100., -115., 10., false),
            // differing signs never compare close
            (-0.00000001, 0.00000001, 10., false),
            (1.23456789, 1.23456789, 0.00000001, true),
        ];

        for (a, b, pct, exp) in CASES.iter() {
            assert_eq!(
                within_n_percent(*a, *b, *pct),
                *exp,
                "a: {}, b: {}, pct: {}",
                a,
                b,
                pct
            );
        }
    }
}
