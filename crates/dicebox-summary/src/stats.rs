//! Expectile statistics over draw samples.

use crate::error::SummaryError;

const MAX_BISECTIONS: usize = 200;

/// Computes the `alpha`-expectile of `values`.
///
/// The expectile is the `t` balancing `alpha * Σ(x - t)+` against
/// `(1 - alpha) * Σ(t - x)+`. At `alpha = 0.5` it is the arithmetic mean;
/// `0` and `1` give the sample minimum and maximum.
///
/// # Errors
///
/// Returns `SummaryError::EmptySample` for an empty slice and
/// `SummaryError::InvalidAlpha` if `alpha` is outside `[0, 1]` or NaN.
pub fn expectile(values: &[f64], alpha: f64) -> Result<f64, SummaryError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(SummaryError::InvalidAlpha(alpha));
    }
    if values.is_empty() {
        return Err(SummaryError::EmptySample);
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if alpha <= 0.0 {
        return Ok(lo);
    }
    if alpha >= 1.0 {
        return Ok(hi);
    }

    // Monotonically decreasing in t; positive at the minimum, negative at the maximum.
    let balance = |t: f64| {
        values.iter().fold(0.0, |acc, &x| {
            if x > t {
                acc + alpha * (x - t)
            } else {
                acc - (1.0 - alpha) * (t - x)
            }
        })
    };

    for _ in 0..MAX_BISECTIONS {
        let mid = lo + (hi - lo) / 2.0;
        if mid <= lo || mid >= hi {
            break;
        }
        if balance(mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(lo + (hi - lo) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_half_expectile_is_mean() {
        assert_close(expectile(&[1.0, 2.0, 3.0, 4.0], 0.5).unwrap(), 2.5);
        assert_close(expectile(&[1.0, 2.0, 3.0, 4.0, 10.0], 0.5).unwrap(), 4.0);
    }

    #[test]
    fn test_single_value_sample() {
        assert_close(expectile(&[7.0], 0.3).unwrap(), 7.0);
    }

    #[test]
    fn test_extreme_levels_give_min_and_max() {
        let values = [3.0, 9.0, 1.0, 4.0];
        assert_close(expectile(&values, 0.0).unwrap(), 1.0);
        assert_close(expectile(&values, 1.0).unwrap(), 9.0);
    }

    #[test]
    fn test_expectile_increases_with_level() {
        let values = [1.0, 1.0, 2.0, 6.0, 6.0, 13.0];
        let low = expectile(&values, 0.2).unwrap();
        let mid = expectile(&values, 0.5).unwrap();
        let high = expectile(&values, 0.8).unwrap();
        assert!(low < mid && mid < high);
    }

    #[test]
    fn test_known_asymmetric_expectile() {
        // 0.25 * (3 - t) = 0.75 * (t - 1)  =>  t = 1.5
        assert_close(expectile(&[1.0, 3.0], 0.25).unwrap(), 1.5);
    }

    #[test]
    fn test_empty_sample_is_rejected() {
        assert_eq!(expectile(&[], 0.5), Err(SummaryError::EmptySample));
    }

    #[test]
    fn test_invalid_alpha_is_rejected() {
        assert_eq!(expectile(&[1.0], 1.5), Err(SummaryError::InvalidAlpha(1.5)));
        assert!(matches!(
            expectile(&[1.0], f64::NAN),
            Err(SummaryError::InvalidAlpha(_))
        ));
    }
}
