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

//! Binary search over ascending slices.
//!
//! Both routines keep a half-open window `[lo, hi)` that starts as the whole
//! slice and halves on every probe. The window test happens before the probe,
//! so an empty slice (or an exhausted window) never reads out of bounds.

use kata_core::num::KataNumeric;
use kata_monitor::{algorithm::Algorithm, no_op::NoOperationMonitor, probe_monitor::ProbeMonitor};
use std::cmp::Ordering;

/// Returns `true` if `needle` occurs in `haystack`.
///
/// # Invariants
///
/// - `haystack` must be sorted in ascending order. Duplicates are fine.
///   Unsorted input is not detected and may produce a wrong answer.
///
/// # Complexity
///
/// O(log N) probes, O(1) extra space.
///
/// # Examples
///
/// ```rust
/// # use kata_search::binary_search::binary_search;
/// let haystack = [1, 3, 5, 7, 9];
/// assert!(binary_search(&haystack, 7));
/// assert!(!binary_search(&haystack, 4));
/// assert!(!binary_search::<i32>(&[], 5));
/// ```
#[inline]
pub fn binary_search<T>(haystack: &[T], needle: T) -> bool
where
    T: KataNumeric,
{
    binary_search_monitored(haystack, needle, NoOperationMonitor::new())
}

/// Same as [`binary_search`], reporting every probed index to `monitor`.
///
/// Pass a monitor by `&mut` to inspect it after the call.
///
/// # Examples
///
/// ```rust
/// # use kata_search::binary_search::binary_search_monitored;
/// # use kata_monitor::statistics::StatisticsMonitor;
/// let mut stats = StatisticsMonitor::new();
/// assert!(binary_search_monitored(&[2, 4, 6, 8], 8, &mut stats));
/// assert!(stats.probes() <= 3);
/// ```
pub fn binary_search_monitored<T, M>(haystack: &[T], needle: T, mut monitor: M) -> bool
where
    T: KataNumeric,
    M: ProbeMonitor,
{
    monitor.on_enter(Algorithm::BinarySearch, haystack.len());

    let mut lo: usize = 0;
    let mut hi: usize = haystack.len();
    let mut found = false;

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        debug_assert!(
            mid < haystack.len(),
            "`binary_search_monitored` computed mid index out of bounds"
        );
        monitor.on_probe(mid);

        // SAFETY: lo < hi <= haystack.len(), therefore mid < haystack.len().
        let probe = unsafe { *haystack.get_unchecked(mid) };
        match needle.partial_cmp(&probe) {
            Some(Ordering::Equal) => {
                found = true;
                break;
            }
            Some(Ordering::Greater) => lo = mid + 1,
            // Smaller or incomparable: keep the left half.
            _ => hi = mid,
        }
    }

    monitor.on_exit();
    found
}

/// Returns the index of the first element in `haystack` that is not less
/// than `needle`, or `haystack.len()` if every element is less.
///
/// # Invariants
///
/// - `haystack` must be sorted in ascending order.
///
/// # Examples
///
/// ```rust
/// # use kata_search::binary_search::lower_bound;
/// let haystack = [10, 20, 20, 30];
/// assert_eq!(lower_bound(&haystack, 5), 0);
/// assert_eq!(lower_bound(&haystack, 20), 1);
/// assert_eq!(lower_bound(&haystack, 25), 3);
/// assert_eq!(lower_bound(&haystack, 31), 4);
/// ```
#[inline]
pub fn lower_bound<T>(haystack: &[T], needle: T) -> usize
where
    T: KataNumeric,
{
    let mut lo: usize = 0;
    let mut hi: usize = haystack.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        // SAFETY: lo < hi <= haystack.len(), therefore mid < haystack.len().
        if unsafe { *haystack.get_unchecked(mid) } < needle {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_monitor::statistics::StatisticsMonitor;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i64;

    fn sorted_random(rng: &mut ChaCha8Rng, len: usize) -> Vec<IntegerType> {
        let mut values: Vec<IntegerType> = (0..len).map(|_| rng.random_range(-50..50)).collect();
        values.sort_unstable();
        values
    }

    #[test]
    fn test_binary_search_examples() {
        let haystack: [IntegerType; 5] = [1, 3, 5, 7, 9];
        assert!(binary_search(&haystack, 7));
        assert!(!binary_search(&haystack, 4));
        assert!(binary_search(&haystack, 1));
        assert!(binary_search(&haystack, 9));
        assert!(!binary_search(&haystack, 0));
        assert!(!binary_search(&haystack, 10));
    }

    #[test]
    fn test_binary_search_empty_never_probes() {
        let mut stats = StatisticsMonitor::new();
        let empty: [IntegerType; 0] = [];
        assert!(!binary_search_monitored(&empty, 5, &mut stats));
        assert_eq!(stats.probes(), 0);
    }

    #[test]
    fn test_binary_search_single_element() {
        assert!(binary_search(&[42_i32], 42));
        assert!(!binary_search(&[42_i32], 41));
        assert!(!binary_search(&[42_i32], 43));
    }

    #[test]
    fn test_binary_search_with_duplicates() {
        let haystack = [2_u32, 2, 2, 2, 3, 3, 8];
        assert!(binary_search(&haystack, 2));
        assert!(binary_search(&haystack, 3));
        assert!(binary_search(&haystack, 8));
        assert!(!binary_search(&haystack, 5));
    }

    #[test]
    fn test_binary_search_extreme_values() {
        let haystack = [i8::MIN, -1, 0, i8::MAX];
        assert!(binary_search(&haystack, i8::MIN));
        assert!(binary_search(&haystack, i8::MAX));
        assert!(!binary_search(&haystack, 1));
    }

    #[test]
    fn test_binary_search_floats_and_nan() {
        let haystack = [-1.5_f64, 0.0, 2.25, 10.0];
        assert!(binary_search(&haystack, 2.25));
        assert!(!binary_search(&haystack, 2.5));
        assert!(!binary_search(&haystack, f64::NAN));
    }

    #[test]
    fn test_binary_search_matches_linear_scan() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for len in 0..64 {
            let haystack = sorted_random(&mut rng, len);
            for needle in -55..55 {
                assert_eq!(
                    binary_search(&haystack, needle),
                    haystack.contains(&needle),
                    "mismatch for needle {} in {:?}",
                    needle,
                    haystack
                );
            }
        }
    }

    #[test]
    fn test_binary_search_probe_count_is_logarithmic() {
        let haystack: Vec<IntegerType> = (0..1000).collect();
        let bound = u64::from(haystack.len().ilog2()) + 1;

        for needle in -1..=1000 {
            let mut stats = StatisticsMonitor::new();
            binary_search_monitored(&haystack, needle, &mut stats);
            assert!(
                stats.probes() <= bound,
                "needle {} took {} probes, bound is {}",
                needle,
                stats.probes(),
                bound
            );
        }
    }

    #[test]
    fn test_binary_search_unsorted_input_does_not_panic() {
        // Out of contract: the answer is unspecified, but the call must return.
        let haystack = [9, 1, 8, 2, 7, 3];
        for needle in 0..10 {
            let _ = binary_search(&haystack, needle);
        }
    }

    #[test]
    fn test_lower_bound_basic() {
        let haystack: [IntegerType; 4] = [10, 20, 20, 30];
        assert_eq!(lower_bound(&haystack, 10), 0);
        assert_eq!(lower_bound(&haystack, 11), 1);
        assert_eq!(lower_bound(&haystack, 20), 1);
        assert_eq!(lower_bound(&haystack, 21), 3);
        assert_eq!(lower_bound(&haystack, 30), 3);
        assert_eq!(lower_bound(&haystack, 99), 4);
        assert_eq!(lower_bound::<IntegerType>(&[], 1), 0);
    }

    #[test]
    fn test_lower_bound_matches_partition_point() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for len in 0..48 {
            let haystack = sorted_random(&mut rng, len);
            for needle in -55..55 {
                assert_eq!(
                    lower_bound(&haystack, needle),
                    haystack.partition_point(|&v| v < needle)
                );
            }
        }
    }
}
