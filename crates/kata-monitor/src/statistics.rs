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

use crate::{
    algorithm::Algorithm,
    probe_monitor::ProbeMonitor,
    stats::{ProbeStatistics, ProbeStatisticsBuilder},
};
use std::time::{Duration, Instant};

/// A monitor that counts probes and swaps and times the most recent run.
///
/// Counters are reset on every `on_enter`, so after a run has finished
/// `statistics()` describes exactly that run.
#[derive(Debug, Clone, Default)]
pub struct StatisticsMonitor {
    algorithm: Option<Algorithm>,
    input_len: usize,
    probes: u64,
    swaps: u64,
    start_time: Option<Instant>,
    duration: Duration,
}

impl StatisticsMonitor {
    /// Creates a new `StatisticsMonitor` with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of probes observed in the current or last run.
    #[inline]
    pub fn probes(&self) -> u64 {
        self.probes
    }

    /// Returns the number of swaps observed in the current or last run.
    #[inline]
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Returns a snapshot of the collected statistics.
    ///
    /// While a run is in progress the duration is measured up to now.
    pub fn statistics(&self) -> ProbeStatistics {
        let duration = match self.start_time {
            Some(start) => start.elapsed(),
            None => self.duration,
        };

        let mut builder = ProbeStatisticsBuilder::new()
            .input_len(self.input_len)
            .probes(self.probes)
            .swaps(self.swaps)
            .duration(duration);
        if let Some(algorithm) = self.algorithm {
            builder = builder.algorithm(algorithm);
        }
        builder.build()
    }
}

impl ProbeMonitor for StatisticsMonitor {
    fn name(&self) -> &str {
        "StatisticsMonitor"
    }

    fn on_enter(&mut self, algorithm: Algorithm, len: usize) {
        self.algorithm = Some(algorithm);
        self.input_len = len;
        self.probes = 0;
        self.swaps = 0;
        self.duration = Duration::ZERO;
        self.start_time = Some(Instant::now());
    }

    #[inline]
    fn on_probe(&mut self, _index: usize) {
        self.probes = self.probes.saturating_add(1);
    }

    #[inline]
    fn on_swap(&mut self, _a: usize, _b: usize) {
        self.swaps = self.swaps.saturating_add(1);
    }

    fn on_exit(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.duration = start.elapsed();
        }
    }
}

impl std::fmt::Display for StatisticsMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StatisticsMonitor(probes: {}, swaps: {})",
            self.probes, self.swaps
        )
    }
}
