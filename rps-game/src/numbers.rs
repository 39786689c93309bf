//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// `part / whole`, or 0.0 when `whole` is zero.
#[must_use]
pub fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    u64_to_f64(part) / u64_to_f64(whole)
}

/// `part / whole` as a percentage in `0.0..=100.0` for `part <= whole`.
#[must_use]
pub fn percent(part: u64, whole: u64) -> f64 {
    ratio(part, whole) * 100.0
}
