//! Divide-and-conquer minimum/maximum search.
//!
//! Finds both extremes of a slice in about `3n/2` comparisons by
//! resolving pairs directly and combining halves recursively.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 9.1

use thiserror::Error;

/// Errors from statistics helpers.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StatsError {
    /// The input slice was empty.
    #[error("Input must not be empty")]
    EmptyInput,
}

/// Returns `(min, max)` of a non-empty slice.
///
/// # Example
/// ```
/// use batch_plan::stats::min_max;
///
/// assert_eq!(min_max(&[5, -2, 9, 1, 9, 3, -7, 4]), Ok((-7, 9)));
/// assert!(min_max::<f64>(&[]).is_err());
/// ```
pub fn min_max<T: PartialOrd + Copy>(values: &[T]) -> Result<(T, T), StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(min_max_rec(values))
}

fn min_max_rec<T: PartialOrd + Copy>(values: &[T]) -> (T, T) {
    match *values {
        [x] => (x, x),
        [a, b] => {
            if a < b {
                (a, b)
            } else {
                (b, a)
            }
        }
        _ => {
            // Left half takes the middle element.
            let mid = (values.len() - 1) / 2 + 1;
            let (left_min, left_max) = min_max_rec(&values[..mid]);
            let (right_min, right_max) = min_max_rec(&values[mid..]);
            (
                if right_min < left_min { right_min } else { left_min },
                if right_max > left_max { right_max } else { left_max },
            )
        }
    }
}
