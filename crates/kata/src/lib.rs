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

//! # Kata
//!
//! Textbook search, sort and queue primitives with pluggable probe monitors.
//! This crate re-exports the workspace crates under one roof:
//!
//! - `base` (`kata_core`): numeric bounds, typed indices, precondition checks.
//! - `monitor` (`kata_monitor`): `ProbeMonitor` and the bundled monitors.
//! - `search` (`kata_search`): `binary_search`, `lower_bound`, `two_crystal_balls`.
//! - `sort` (`kata_sort`): `bubble_sort` and its early-exit variant.
//! - `collections` (`kata_collections`): the linked FIFO `Queue<T>`.
//!
//! The `prelude` brings the everyday entry points into scope.
//!
//! ```rust
//! use kata::prelude::*;
//!
//! let mut values = [5, 3, 1, 4, 2];
//! bubble_sort(&mut values);
//! assert!(binary_search(&values, 4));
//!
//! let breaks = [false, false, true, true];
//! assert_eq!(two_crystal_balls(&breaks), Some(2));
//!
//! let mut queue: Queue<i32> = values.into_iter().collect();
//! assert_eq!(queue.dequeue(), Some(1));
//! ```

pub use kata_core as base;
pub use kata_collections as collections;
pub use kata_monitor as monitor;
pub use kata_search as search;
pub use kata_sort as sort;

/// The everyday entry points of every kata crate.
pub mod prelude {
    #[doc(no_inline)]
    pub use kata_collections::queue::Queue;
    #[doc(no_inline)]
    pub use kata_core::{
        num::KataNumeric,
        precondition::{PreconditionError, check_monotonic, check_sorted_ascending},
    };
    #[doc(no_inline)]
    pub use kata_monitor::{
        algorithm::Algorithm, composite::CompositeMonitor, log::LogMonitor,
        no_op::NoOperationMonitor, probe_monitor::ProbeMonitor,
        statistics::StatisticsMonitor, stats::ProbeStatistics,
    };
    #[doc(no_inline)]
    pub use kata_search::{
        binary_search::{binary_search, binary_search_monitored, lower_bound},
        two_crystal_balls::{two_crystal_balls, two_crystal_balls_monitored},
    };
    #[doc(no_inline)]
    pub use kata_sort::bubble_sort::{
        bubble_sort, bubble_sort_early_exit, bubble_sort_early_exit_monitored,
        bubble_sort_monitored,
    };
}
