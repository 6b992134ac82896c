// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Input preconditions for the search routines.
//!
//! Binary search expects an ascending slice and the two crystal balls search
//! expects a monotonic run of `false` followed by `true`. Neither routine
//! checks this on its own; callers that receive untrusted input can run the
//! predicates here first. The `check_*` functions report the first offending
//! index through `PreconditionError`.

use crate::num::KataNumeric;
use std::cmp::Ordering;

/// The error type for violated input preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    /// The element at `index` is greater than (or incomparable with)
    /// the element at `index + 1`.
    Unsorted { index: usize },
    /// The element at `index` is `false` although an earlier element is `true`.
    NotMonotonic { index: usize },
}

impl PreconditionError {
    /// Returns the index at which the violation was detected.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Unsorted { index } | Self::NotMonotonic { index } => *index,
        }
    }
}

impl std::fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsorted { index } => write!(
                f,
                "Sequence is not sorted in ascending order: element {} is out of order with element {}",
                index,
                index + 1
            ),
            Self::NotMonotonic { index } => write!(
                f,
                "Sequence is not monotonic: element {} is false after a true element",
                index
            ),
        }
    }
}

impl std::error::Error for PreconditionError {}

/// Returns the first index `i` for which `values[i] <= values[i + 1]` does not hold.
#[inline]
fn first_descent<T>(values: &[T]) -> Option<usize>
where
    T: KataNumeric,
{
    values
        .windows(2)
        .position(|w| !matches!(w[0].partial_cmp(&w[1]), Some(Ordering::Less | Ordering::Equal)))
}

/// Checks whether `values` is sorted in non-decreasing order.
///
/// Returns `true` for empty and single element slices. A slice containing
/// incomparable values (such as `NaN`) next to each other is not sorted.
///
/// # Examples
///
/// ```rust
/// # use kata_core::precondition::is_sorted_ascending;
/// assert!(is_sorted_ascending(&[1, 3, 3, 7]));
/// assert!(!is_sorted_ascending(&[1, 7, 3]));
/// assert!(is_sorted_ascending::<i32>(&[]));
/// ```
#[inline]
pub fn is_sorted_ascending<T>(values: &[T]) -> bool
where
    T: KataNumeric,
{
    first_descent(values).is_none()
}

/// Checks whether `values` is sorted in non-decreasing order, reporting the
/// first violation.
///
/// # Errors
///
/// Returns `PreconditionError::Unsorted` with the index of the first element
/// that is out of order with its successor.
#[inline]
pub fn check_sorted_ascending<T>(values: &[T]) -> Result<(), PreconditionError>
where
    T: KataNumeric,
{
    match first_descent(values) {
        Some(index) => Err(PreconditionError::Unsorted { index }),
        None => Ok(()),
    }
}

/// Returns the index of the first `false` that follows a `true`.
#[inline]
fn first_regression(breaks: &[bool]) -> Option<usize> {
    let first_true = breaks.iter().position(|&b| b)?;
    breaks[first_true..]
        .iter()
        .position(|&b| !b)
        .map(|offset| first_true + offset)
}

/// Checks whether `breaks` is a run of `false` followed by a run of `true`.
///
/// Either run may be empty.
///
/// # Examples
///
/// ```rust
/// # use kata_core::precondition::is_monotonic;
/// assert!(is_monotonic(&[false, false, true, true]));
/// assert!(is_monotonic(&[]));
/// assert!(!is_monotonic(&[false, true, false]));
/// ```
#[inline]
pub fn is_monotonic(breaks: &[bool]) -> bool {
    first_regression(breaks).is_none()
}

/// Checks whether `breaks` is monotonic, reporting the first violation.
///
/// # Errors
///
/// Returns `PreconditionError::NotMonotonic` with the index of the first
/// `false` that appears after a `true`.
#[inline]
pub fn check_monotonic(breaks: &[bool]) -> Result<(), PreconditionError> {
    match first_regression(breaks) {
        Some(index) => Err(PreconditionError::NotMonotonic { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted_ascending_empty_and_single() {
        assert!(is_sorted_ascending::<i64>(&[]));
        assert!(is_sorted_ascending(&[42_i64]));
    }

    #[test]
    fn test_is_sorted_ascending_with_duplicates() {
        assert!(is_sorted_ascending(&[1, 1, 2, 2, 2, 9]));
    }

    #[test]
    fn test_is_sorted_ascending_rejects_descent() {
        assert!(!is_sorted_ascending(&[1, 3, 2]));
    }

    #[test]
    fn test_is_sorted_ascending_rejects_nan_neighbors() {
        assert!(!is_sorted_ascending(&[1.0, f64::NAN, 2.0]));
    }

    #[test]
    fn test_check_sorted_ascending_reports_first_descent() {
        let values = [1, 5, 4, 3];
        assert_eq!(
            check_sorted_ascending(&values),
            Err(PreconditionError::Unsorted { index: 1 })
        );
        assert_eq!(check_sorted_ascending(&[1, 2, 3]), Ok(()));
    }

    #[test]
    fn test_is_monotonic_accepts_valid_runs() {
        assert!(is_monotonic(&[]));
        assert!(is_monotonic(&[false, false]));
        assert!(is_monotonic(&[true, true]));
        assert!(is_monotonic(&[false, true, true]));
    }

    #[test]
    fn test_check_monotonic_reports_first_regression() {
        let breaks = [false, true, true, false, true, false];
        assert_eq!(
            check_monotonic(&breaks),
            Err(PreconditionError::NotMonotonic { index: 3 })
        );
    }

    #[test]
    fn test_error_index_and_display() {
        let unsorted = PreconditionError::Unsorted { index: 4 };
        assert_eq!(unsorted.index(), 4);
        assert_eq!(
            unsorted.to_string(),
            "Sequence is not sorted in ascending order: element 4 is out of order with element 5"
        );

        let regression = PreconditionError::NotMonotonic { index: 2 };
        assert_eq!(regression.index(), 2);
        assert!(regression.to_string().contains("element 2 is false"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&PreconditionError::Unsorted { index: 0 });
    }
}
