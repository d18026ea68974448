//! Smallest/largest of a slice of `f64`s.
//!
//! `f64` is not `Ord`, so `Iterator::min`/`max` do not apply; these fold
//! with [`f64::min`]/[`f64::max`] instead. For integer (or any `Ord`) types
//! use the iterator adaptors directly.

/// The least of the values. An empty slice is a programmer error and panics.
pub fn min_of(vals: &[f64]) -> f64 {
    match vals.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |min, &v| min.min(v)),
        None => panic!("min_of: no values given"),
    }
}

/// The greatest of the values. An empty slice is a programmer error and
/// panics.
pub fn max_of(vals: &[f64]) -> f64 {
    match vals.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |max, &v| max.max(v)),
        None => panic!("max_of: no values given"),
    }
}
