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

//! # Probe Monitors
//!
//! Pluggable observers for the search and sort routines. Every monitored
//! entry point reports its lifecycle (`on_enter`/`on_exit`), each element it
//! reads (`on_probe`) and each swap it performs (`on_swap`) to a
//! `ProbeMonitor`. Monitors can log progress, count work, or fan events out to
//! several other monitors without the algorithms knowing about any of it.
//!
//! ## Modules
//!
//! - `algorithm`: The `Algorithm` enum naming the instrumented routines.
//! - `probe_monitor`: Core trait (`ProbeMonitor`) with the lifecycle hooks.
//! - `no_op`: `NoOperationMonitor`, inlined away by the plain entry points.
//! - `statistics`: `StatisticsMonitor`, counting probes and swaps per run.
//! - `stats`: `ProbeStatistics` and its builder.
//! - `log`: `LogMonitor`, printing a run summary (and optionally every event).
//! - `composite`: `CompositeMonitor`, forwarding events to many monitors.

pub mod algorithm;
pub mod composite;
pub mod log;
pub mod no_op;
pub mod probe_monitor;
pub mod statistics;
pub mod stats;
