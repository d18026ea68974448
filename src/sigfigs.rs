use num_traits::Float;

/// The width and precision needed to print `v` in fixed-point notation to
/// at least `sf` significant figures, suitable for `{:width$.precision$}`
/// formatting.
///
/// `sf` must be greater than zero; zero is a programmer error and panics.
///
/// Caveats carried by the algorithm: precision is only generated down to 9
/// fractional digits, and values extremely close to negative powers of 10
/// can gain or lose a digit because of how they round in binary floating
/// point.
pub fn fmt_vals_for_sig_figs<F: Float>(sf: u8, v: F) -> (usize, usize) {
    assert!(
        sf > 0,
        "the number of significant figures must be greater than zero"
    );

    if v == F::zero() {
        if sf > 1 {
            let precision = sf as usize - 1;
            // "0." plus the fractional digits
            return (2 + precision, precision);
        }
        return (1, 0);
    }

    let mut v = v;
    let mut digits_pre_dp = 1; // always at least one digit before the point
    let mut extra_width = 0;
    if v < F::zero() {
        extra_width += 1; // the minus sign
        v = -v;
    }

    let tenth = F::from(0.1).unwrap();
    let ten = F::from(10).unwrap();

    let mut precision = 0;
    if v < F::one() {
        let min_val = F::from(1e-9).unwrap();

        extra_width += 1; // the "."
        precision = 1;
        let mut p = tenth;
        while v < p && p > min_val {
            precision += 1;
            p = p * tenth;
        }
        precision += sf as usize - 1;
    } else {
        let mut p = ten;
        while v >= p {
            digits_pre_dp += 1;
            p = p * ten;
        }
        if digits_pre_dp < sf as usize {
            extra_width += 1; // the "."
            precision = sf as usize - digits_pre_dp;
        }
    }

    (digits_pre_dp + precision + extra_width, precision)
}

/// The width and precision suitable to display `v` and every value in
/// `vals` to at least `sf` significant figures. For instance, 3 significant
/// figures for the pair 100.0 and 0.1 needs 3 digits before the point and 3
/// after: width 7, precision 3.
///
/// `sf` must be greater than zero; zero is a programmer error and panics.
pub fn fmt_vals_for_sig_figs_multi<F: Float>(sf: u8, v: F, vals: &[F]) -> (usize, usize) {
    let (wid, prec) = fmt_vals_for_sig_figs(sf, v);

    let mut precision = prec;
    let mut width = digits_before_point(wid, prec);

    for &val in vals {
        let (wid, prec) = fmt_vals_for_sig_figs(sf, val);
        if prec > precision {
            precision = prec;
        }

        let dbp = digits_before_point(wid, prec);
        if dbp > width {
            width = dbp;
        }
    }

    width += precision;
    if precision > 0 {
        width += 1;
    }
    (width, precision)
}

/// The number of digits before the decimal point implied by a width and
/// precision.
fn digits_before_point(width: usize, precision: usize) -> usize {
    let mut before = width - precision;
    if precision > 0 {
        before -= 1; // the "."
    }
    before
}
