/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INDEX: f64 = 9_007_199_254_740_991.0;

/// Converts an evaluated subscript to an array index.
///
/// The value is truncated toward zero, so `3.9` selects index `3` and `-0.5`
/// selects index `0`. Returns `None` for non-finite values, for values that
/// truncate below zero, and for values beyond [`MAX_SAFE_INDEX`], which no
/// array can reach.
///
/// ## Example
/// ```
/// use arrayexpr::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(3.9), Some(3));
/// assert_eq!(f64_to_index(-0.5), Some(0));
/// assert_eq!(f64_to_index(-1.0), None);
/// assert_eq!(f64_to_index(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_index(value: f64) -> Option<usize> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > MAX_SAFE_INDEX {
        return None;
    }
    usize::try_from(truncated as u64).ok()
}

/// Parses an array size or index: a non-negative integer.
///
/// ## Example
/// ```
/// use arrayexpr::util::num::parse_index;
///
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("1.5"), None);
/// ```
#[must_use]
pub fn parse_index(text: &str) -> Option<usize> {
    text.trim().parse().ok()
}

/// Parses a symbol value: an integer or decimal number, optionally signed.
///
/// Non-finite results such as `inf` or `NaN` are rejected.
#[must_use]
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
