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

use crate::algorithm::Algorithm;
use std::time::Duration;

/// Statistics collected during a single monitored algorithm run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeStatistics {
    /// The algorithm that was run, or `None` if no run has been observed.
    pub algorithm: Option<Algorithm>,
    /// Length of the input slice.
    pub input_len: usize,
    /// Number of elements read from the input.
    pub probes: u64,
    /// Number of element exchanges.
    pub swaps: u64,
    /// Wall-clock duration between entering and leaving the run.
    pub duration: Duration,
}

impl Default for ProbeStatistics {
    fn default() -> Self {
        ProbeStatisticsBuilder::new().build()
    }
}

impl std::fmt::Display for ProbeStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Probe Statistics:")?;
        match self.algorithm {
            Some(algorithm) => writeln!(f, "  Algorithm: {}", algorithm)?,
            None => writeln!(f, "  Algorithm: n/a")?,
        }
        writeln!(f, "  Input Length: {}", self.input_len)?;
        writeln!(f, "  Probes: {}", self.probes)?;
        writeln!(f, "  Swaps: {}", self.swaps)?;
        writeln!(
            f,
            "  Duration (secs): {:.3}",
            self.duration.as_secs_f64()
        )
    }
}

/// Builder for `ProbeStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeStatisticsBuilder {
    algorithm: Option<Algorithm>,
    input_len: usize,
    probes: u64,
    swaps: u64,
    duration: Duration,
}

impl Default for ProbeStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeStatisticsBuilder {
    /// Creates a new `ProbeStatisticsBuilder` with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            algorithm: None,
            input_len: 0,
            probes: 0,
            swaps: 0,
            duration: Duration::ZERO,
        }
    }

    /// Sets the algorithm that was run.
    #[inline]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Sets the input length.
    #[inline]
    pub fn input_len(mut self, input_len: usize) -> Self {
        self.input_len = input_len;
        self
    }

    /// Sets the number of probes.
    #[inline]
    pub fn probes(mut self, probes: u64) -> Self {
        self.probes = probes;
        self
    }

    /// Sets the number of swaps.
    #[inline]
    pub fn swaps(mut self, swaps: u64) -> Self {
        self.swaps = swaps;
        self
    }

    /// Sets the run duration.
    #[inline]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Builds the `ProbeStatistics` instance.
    #[inline]
    pub fn build(self) -> ProbeStatistics {
        ProbeStatistics {
            algorithm: self.algorithm,
            input_len: self.input_len,
            probes: self.probes,
            swaps: self.swaps,
            duration: self.duration,
        }
    }
}
