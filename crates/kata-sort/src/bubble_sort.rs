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

//! Bubble sort.
//!
//! Each pass walks the unsorted prefix comparing neighbours and swapping
//! them when they are out of order, which carries the largest remaining
//! element to the end of the prefix. After pass `i` the last `i + 1`
//! elements are in their final position.
//!
//! ```text
//! [1, 3, 7, 6, 5]   pass 0: 7 > 6 swap, 7 > 5 swap
//! [1, 3, 6, 5 | 7]  pass 1: 6 > 5 swap
//! [1, 3, 5 | 6, 7]  ...
//! ```

use kata_core::num::KataNumeric;
use kata_monitor::{algorithm::Algorithm, no_op::NoOperationMonitor, probe_monitor::ProbeMonitor};

/// Sorts `arr` in ascending order, in place.
///
/// Only strictly greater neighbours are swapped, so equal elements keep
/// their relative order. Incomparable values (`NaN`) are never swapped.
///
/// # Complexity
///
/// Always `N(N-1)/2` comparisons, O(N²) swaps in the worst case and O(1)
/// extra space. There is no early exit for already sorted input; see
/// [`bubble_sort_early_exit`] for that.
///
/// # Examples
///
/// ```rust
/// # use kata_sort::bubble_sort::bubble_sort;
/// let mut arr = [5, 3, 1, 4, 2];
/// bubble_sort(&mut arr);
/// assert_eq!(arr, [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn bubble_sort<T>(arr: &mut [T])
where
    T: KataNumeric,
{
    bubble_sort_monitored(arr, NoOperationMonitor::new());
}

/// Same as [`bubble_sort`], reporting each comparison as a probe of the
/// left neighbour and each swap to `monitor`.
pub fn bubble_sort_monitored<T, M>(arr: &mut [T], mut monitor: M)
where
    T: KataNumeric,
    M: ProbeMonitor,
{
    let len = arr.len();
    monitor.on_enter(Algorithm::BubbleSort, len);

    for i in 0..len {
        for j in 0..len - 1 - i {
            bubble_step(arr, j, &mut monitor);
        }
    }

    monitor.on_exit();
}

/// Sorts `arr` in ascending order, in place, stopping as soon as a pass
/// performs no swap.
///
/// Produces the same result as [`bubble_sort`]; already sorted input costs
/// a single pass of `N - 1` comparisons.
///
/// # Examples
///
/// ```rust
/// # use kata_sort::bubble_sort::bubble_sort_early_exit;
/// let mut arr = [0.5, -1.0, 3.25];
/// bubble_sort_early_exit(&mut arr);
/// assert_eq!(arr, [-1.0, 0.5, 3.25]);
/// ```
#[inline]
pub fn bubble_sort_early_exit<T>(arr: &mut [T])
where
    T: KataNumeric,
{
    bubble_sort_early_exit_monitored(arr, NoOperationMonitor::new());
}

/// Same as [`bubble_sort_early_exit`], reporting comparisons and swaps to `monitor`.
pub fn bubble_sort_early_exit_monitored<T, M>(arr: &mut [T], mut monitor: M)
where
    T: KataNumeric,
    M: ProbeMonitor,
{
    let len = arr.len();
    monitor.on_enter(Algorithm::BubbleSort, len);

    for i in 0..len {
        let mut swapped = false;
        for j in 0..len - 1 - i {
            swapped |= bubble_step(arr, j, &mut monitor);
        }
        if !swapped {
            break;
        }
    }

    monitor.on_exit();
}

/// Compares `arr[j]` with `arr[j + 1]` and swaps them if they are out of order.
/// Returns `true` if a swap happened.
#[inline(always)]
fn bubble_step<T, M>(arr: &mut [T], j: usize, monitor: &mut M) -> bool
where
    T: KataNumeric,
    M: ProbeMonitor,
{
    debug_assert!(
        j + 1 < arr.len(),
        "called `bubble_step` with index out of bounds: the len is {} but the index is {}",
        arr.len(),
        j + 1
    );

    monitor.on_probe(j);
    if arr[j] > arr[j + 1] {
        arr.swap(j, j + 1);
        monitor.on_swap(j, j + 1);
        true
    } else {
        false
    }
}
