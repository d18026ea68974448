/// A ratio of two `i64`s, used as the result of the rational approximation
/// functions.
///
/// A `Rational` returned from an approximator is in the form the algorithm
/// naturally produced it in; it is **never** gcd-reduced. `2/4` stays `2/4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rational {
    /// Numerator. Carries the sign of the approximated value.
    pub n: i64,
    /// Denominator. Positive in any successfully-produced approximation.
    pub d: i64,
}

impl Rational {
    /// The canonical zero, `0/1`.
    pub const ZERO: Rational = Rational { n: 0, d: 1 };

    /// The `f64` equivalent of this ratio.
    pub fn as_f64(&self) -> f64 {
        self.n as f64 / self.d as f64
    }

    /// Swaps numerator and denominator, producing the reciprocal.
    /// Only meaningful when the numerator is nonzero.
    pub fn invert(self) -> Rational {
        Rational {
            n: self.d,
            d: self.n,
        }
    }

    /// The absolute difference between this ratio and `v`, as a proportion
    /// of `v`. Not defined for `v == 0`; the approximators special-case an
    /// exact zero before any candidate is measured.
    pub fn proximity(&self, v: f64) -> f64 {
        ((self.as_f64() - v) / v).abs()
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.n, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_f64() {
        const CASES: [(Rational, f64); 5] = [
            (Rational { n: 0, d: 1 }, 0.),
            (Rational { n: 1, d: 2 }, 0.5),
            (Rational { n: -1, d: 2 }, -0.5),
            (Rational { n: 22, d: 7 }, 22. / 7.),
            (Rational { n: 13, d: 20 }, 0.65),
        ];

        for (r, f) in CASES.iter() {
            assert_eq!(r.as_f64(), *f, "{}", r);
        }
    }

    #[test]
    fn test_invert() {
        let r = Rational { n: 3, d: 7 };
        assert_eq!(r.invert(), Rational { n: 7, d: 3 });
        assert_eq!(r.invert().invert(), r);
    }

    #[test]
    fn test_proximity() {
        let r = Rational { n: 1, d: 2 };
        assert_eq!(r.proximity(0.5), 0.);
        assert_eq!(r.proximity(0.25), 1.);
        assert_eq!(r.proximity(1.), 0.5);
        // proximity is symmetric in sign of the error, not in magnitude
        assert_eq!(Rational { n: -1, d: 2 }.proximity(-0.25), 1.);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational { n: -22, d: 7 }.to_string(), "-22/7");
        assert_eq!(Rational::ZERO.to_string(), "0/1");
    }
}
