use num_traits::{Num, NumCast};

const PERCENT_FACTOR: i32 = 100;

// The factor is representable in every primitive numeric type, so the cast
// cannot fail for any type this is usable with.
fn factor<T: NumCast>() -> T {
    T::from(PERCENT_FACTOR).unwrap()
}

/// Converts a percentage into a plain value of the same type: 4% becomes
/// 0.04. Integer inputs divide with truncation, like any integer division.
pub fn from_percent<T: Num + NumCast>(pct: T) -> T {
    pct / factor()
}

/// Converts a plain value into a percentage of the same type: 0.04 becomes
/// 4.
pub fn to_percent<T: Num + NumCast>(v: T) -> T {
    v * factor()
}
