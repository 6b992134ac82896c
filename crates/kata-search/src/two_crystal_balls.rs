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

//! The two crystal balls search.
//!
//! Given a run of `false` followed by a run of `true`, find where the run of
//! `true` begins while being allowed to "break" (probe a `true`) only twice:
//!
//! 1. Jump ahead in steps of `⌊√N⌋` until the first ball breaks.
//! 2. Step back one jump and walk forward one element at a time with the
//!    second ball until it breaks.
//!
//! Each phase probes at most `⌊√N⌋ + 1` elements, so the whole search is
//! O(√N) probes.
//!
//! ```text
//! index:   0  1  2  3  4  5  6
//! breaks: [f, f, f, f, t, t, t]     jump = ⌊√7⌋ = 2
//!                ^     ^
//!                |     first ball breaks at 4
//!                walk from 2: 2, 3, 4 -> first true at 4
//! ```

use kata_monitor::{algorithm::Algorithm, no_op::NoOperationMonitor, probe_monitor::ProbeMonitor};

/// Returns the index of the first `true` in `breaks`, or `None` if there is none.
///
/// # Invariants
///
/// - `breaks` must be monotonic: every `true` is followed only by `true`s.
///   Non-monotonic input is not detected; the result is then unspecified
///   (but the call never panics).
///
/// # Complexity
///
/// At most `2 * ⌊√N⌋ + 2` probes, O(1) extra space.
///
/// # Examples
///
/// ```rust
/// # use kata_search::two_crystal_balls::two_crystal_balls;
/// let breaks = [false, false, false, false, true, true, true];
/// assert_eq!(two_crystal_balls(&breaks), Some(4));
/// assert_eq!(two_crystal_balls(&[true]), Some(0));
/// assert_eq!(two_crystal_balls(&[false, false, false]), None);
/// assert_eq!(two_crystal_balls(&[]), None);
/// ```
#[inline]
pub fn two_crystal_balls(breaks: &[bool]) -> Option<usize> {
    two_crystal_balls_monitored(breaks, NoOperationMonitor::new())
}

/// Same as [`two_crystal_balls`], reporting every probed index to `monitor`.
pub fn two_crystal_balls_monitored<M>(breaks: &[bool], mut monitor: M) -> Option<usize>
where
    M: ProbeMonitor,
{
    monitor.on_enter(Algorithm::TwoCrystalBalls, breaks.len());
    let found = first_true(breaks, &mut monitor);
    monitor.on_exit();
    found
}

#[inline]
fn first_true<M>(breaks: &[bool], monitor: &mut M) -> Option<usize>
where
    M: ProbeMonitor,
{
    let len = breaks.len();
    if len == 0 {
        // A zero jump would never advance.
        return None;
    }

    let jump = len.isqrt();
    debug_assert!(jump >= 1, "`two_crystal_balls` computed a zero jump for len {}", len);

    // First ball.
    let mut i = jump;
    while i < len {
        monitor.on_probe(i);
        if breaks[i] {
            break;
        }
        i += jump;
    }

    // Second ball: i >= jump here because the first phase started at `jump`.
    let start = i - jump;
    let end = len.min(start + jump + 1);
    for j in start..end {
        monitor.on_probe(j);
        if breaks[j] {
            return Some(j);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_monitor::statistics::StatisticsMonitor;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Builds a monotonic run of `len` elements whose first `true` is at `first_true`
    /// (no `true` at all when `first_true >= len`).
    fn run(len: usize, first_true: usize) -> Vec<bool> {
        (0..len).map(|i| i >= first_true).collect()
    }

    #[test]
    fn test_example_from_puzzle() {
        let breaks = [false, false, false, false, true, true, true];
        assert_eq!(two_crystal_balls(&breaks), Some(4));
    }

    #[test]
    fn test_single_true() {
        assert_eq!(two_crystal_balls(&[true]), Some(0));
    }

    #[test]
    fn test_single_false() {
        assert_eq!(two_crystal_balls(&[false]), None);
    }

    #[test]
    fn test_all_false() {
        assert_eq!(two_crystal_balls(&[false, false, false]), None);
        assert_eq!(two_crystal_balls(&run(100, 100)), None);
    }

    #[test]
    fn test_empty_never_probes() {
        let mut stats = StatisticsMonitor::new();
        assert_eq!(two_crystal_balls_monitored(&[], &mut stats), None);
        assert_eq!(stats.probes(), 0);
    }

    #[test]
    fn test_all_true_finds_index_zero() {
        for len in 1..=50 {
            assert_eq!(two_crystal_balls(&run(len, 0)), Some(0), "len {}", len);
        }
    }

    #[test]
    fn test_last_element_only() {
        for len in 1..=50 {
            assert_eq!(
                two_crystal_balls(&run(len, len - 1)),
                Some(len - 1),
                "len {}",
                len
            );
        }
    }

    #[test]
    fn test_exhaustive_monotonic_runs() {
        for len in 0..=64 {
            for first in 0..=len {
                let expected = if first < len { Some(first) } else { None };
                assert_eq!(
                    two_crystal_balls(&run(len, first)),
                    expected,
                    "len {} first_true {}",
                    len,
                    first
                );
            }
        }
    }

    #[test]
    fn test_probe_count_is_square_root() {
        for len in [1_usize, 2, 3, 4, 7, 10, 99, 100, 101, 1000, 4096] {
            let bound = 2 * len.isqrt() as u64 + 2;
            for first in [0, 1, len / 3, len / 2, len - 1, len] {
                let mut stats = StatisticsMonitor::new();
                two_crystal_balls_monitored(&run(len, first), &mut stats);
                assert!(
                    stats.probes() <= bound,
                    "len {} first_true {} took {} probes, bound is {}",
                    len,
                    first,
                    stats.probes(),
                    bound
                );
            }
        }
    }

    #[test]
    fn test_large_random_runs() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let len = rng.random_range(1..10_000);
            let first = rng.random_range(0..=len);
            let expected = if first < len { Some(first) } else { None };
            assert_eq!(two_crystal_balls(&run(len, first)), expected);
        }
    }

    #[test]
    fn test_non_monotonic_input_does_not_panic() {
        // Out of contract: any answer is acceptable as long as it is in range.
        let breaks = [true, false, true, false, false, true, false, false, false];
        if let Some(index) = two_crystal_balls(&breaks) {
            assert!(index < breaks.len());
            assert!(breaks[index]);
        }
    }
}
