//! Die validation predicates for callers holding arbitrary numbers.

/// Returns true iff `value`, truncated toward zero, is at least 2.
///
/// Non-finite values are never valid dice.
#[must_use]
pub fn is_valid_die(value: f64) -> bool {
    value.is_finite() && value.trunc() >= 2.0
}

/// Truncates a validated value into a face count.
///
/// Returns `None` when [`is_valid_die`] rejects the value. Values beyond
/// `i64::MAX` saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_die(value: f64) -> Option<i64> {
    is_valid_die(value).then(|| value.trunc() as i64)
}
