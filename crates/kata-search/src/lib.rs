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

//! # Kata Search
//!
//! Searches over in-memory slices that exploit ordering in their input.
//!
//! ## Modules
//!
//! - `binary_search`: Membership test (`binary_search`) and insertion point
//!   (`lower_bound`) over an ascending slice in O(log N) probes.
//! - `two_crystal_balls`: First `true` in a monotonic `false…true` run using
//!   square root sized jumps, O(√N) probes.
//!
//! Every routine has a `*_monitored` twin that reports its probes to a
//! `kata_monitor::probe_monitor::ProbeMonitor`; the plain functions run the
//! same code against the no-op monitor.
//!
//! ## Preconditions
//!
//! Sortedness and monotonicity are documented preconditions and are not
//! validated here. Violating them yields an unspecified answer, never a
//! panic. See `kata_core::precondition` for opt-in checks.

pub mod binary_search;
pub mod two_crystal_balls;
