use num_traits::{PrimInt, Signed, Unsigned};

/// Panics unless `base` is a usable positional base; returns the log10
/// scaling factor that converts a decimal digit count into one for `base`.
fn base_log_conv(base: u32) -> f64 {
    assert!(
        base >= 2,
        "invalid base ({}): the base must be at least 2",
        base
    );
    if base == 10 {
        1.
    } else {
        f64::from(base).log10()
    }
}

fn width_in_base(v: f64, log_conv: f64) -> usize {
    ((v + 1.).log10() / log_conv).ceil() as usize
}

/// The number of characters needed to print `v` in decimal: its digit count
/// plus one for a sign marker when it is negative.
pub fn digits<T: PrimInt + Signed>(v: T) -> usize {
    digits_in_base(v, 10)
}

/// The number of characters needed to print `v` in decimal.
pub fn digits_unsigned<T: PrimInt + Unsigned>(v: T) -> usize {
    digits_in_base_unsigned(v, 10)
}

/// The number of characters needed to print `v` in base `base`, counting a
/// sign marker for negative values.
///
/// The base must be at least 2; a smaller base is a programmer error and
/// panics.
pub fn digits_in_base<T: PrimInt + Signed>(v: T, base: u32) -> usize {
    let log_conv = base_log_conv(base);

    if v.is_zero() {
        return 1;
    }

    let mut vf = v.to_f64().unwrap();
    let mut d = 0;
    if vf < 0. {
        d += 1;
        vf = -vf;
    }

    d + width_in_base(vf, log_conv)
}

/// The number of characters needed to print the unsigned `v` in base `base`.
///
/// The base must be at least 2; a smaller base is a programmer error and
/// panics.
pub fn digits_in_base_unsigned<T: PrimInt + Unsigned>(v: T, base: u32) -> usize {
    let log_conv = base_log_conv(base);

    if v.is_zero() {
        return 1;
    }

    width_in_base(v.to_f64().unwrap(), log_conv)
}
