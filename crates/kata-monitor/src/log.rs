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

use crate::{algorithm::Algorithm, probe_monitor::ProbeMonitor};
use std::time::Instant;

/// A monitor that prints a summary of each run to standard output.
///
/// In verbose mode every probe and swap is printed as it happens as well,
/// which is mostly useful for tracing small inputs by hand.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    verbose: bool,
    algorithm: Option<Algorithm>,
    input_len: usize,
    probes: u64,
    swaps: u64,
    start_time: Instant,
}

impl LogMonitor {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            algorithm: None,
            input_len: 0,
            probes: 0,
            swaps: 0,
            start_time: Instant::now(),
        }
    }

    #[inline]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn algorithm_name(&self) -> &'static str {
        self.algorithm.map_or("Unknown", |a| a.name())
    }

    fn header_line(&self) -> String {
        format!("[{}] start | len {}", self.algorithm_name(), self.input_len)
    }

    fn probe_line(&self, index: usize) -> String {
        format!("[{}] probe | index {}", self.algorithm_name(), index)
    }

    fn swap_line(&self, a: usize, b: usize) -> String {
        format!("[{}] swap  | {} <-> {}", self.algorithm_name(), a, b)
    }

    fn summary_line(&self, elapsed_secs: f64) -> String {
        format!(
            "[{}] done  | len {} | probes {} | swaps {} | {:.6}s",
            self.algorithm_name(),
            self.input_len,
            self.probes,
            self.swaps,
            elapsed_secs
        )
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(verbose: {})", self.verbose)
    }
}

impl ProbeMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter(&mut self, algorithm: Algorithm, len: usize) {
        self.algorithm = Some(algorithm);
        self.input_len = len;
        self.probes = 0;
        self.swaps = 0;
        self.start_time = Instant::now();
        println!("{}", self.header_line());
    }

    fn on_probe(&mut self, index: usize) {
        self.probes = self.probes.saturating_add(1);
        if self.verbose {
            println!("{}", self.probe_line(index));
        }
    }

    fn on_swap(&mut self, a: usize, b: usize) {
        self.swaps = self.swaps.saturating_add(1);
        if self.verbose {
            println!("{}", self.swap_line(a, b));
        }
    }

    fn on_exit(&mut self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        println!("{}", self.summary_line(elapsed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quiet() {
        let monitor = LogMonitor::default();
        assert!(!monitor.is_verbose());
        assert_eq!(format!("{}", monitor), "LogMonitor(verbose: false)");
    }

    #[test]
    fn test_lines_before_any_run() {
        let monitor = LogMonitor::new(true);
        assert_eq!(monitor.header_line(), "[Unknown] start | len 0");
    }

    #[test]
    fn test_lines_track_run_state() {
        let mut monitor = LogMonitor::new(false);
        monitor.on_enter(Algorithm::BubbleSort, 4);
        monitor.on_probe(0);
        monitor.on_probe(1);
        monitor.on_swap(1, 2);

        assert_eq!(monitor.header_line(), "[BubbleSort] start | len 4");
        assert_eq!(monitor.probe_line(3), "[BubbleSort] probe | index 3");
        assert_eq!(monitor.swap_line(1, 2), "[BubbleSort] swap  | 1 <-> 2");
        assert_eq!(
            monitor.summary_line(0.5),
            "[BubbleSort] done  | len 4 | probes 2 | swaps 1 | 0.500000s"
        );
        monitor.on_exit();
    }

    #[test]
    fn test_enter_resets_counters() {
        let mut monitor = LogMonitor::new(false);
        monitor.on_enter(Algorithm::BubbleSort, 2);
        monitor.on_swap(0, 1);
        monitor.on_exit();

        monitor.on_enter(Algorithm::BinarySearch, 16);
        assert_eq!(
            monitor.summary_line(0.0),
            "[BinarySearch] done  | len 16 | probes 0 | swaps 0 | 0.000000s"
        );
    }
}
