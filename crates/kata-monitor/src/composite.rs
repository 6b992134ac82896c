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
use kata_core::utils::index::{TypedIndex, TypedIndexTag};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MonitorIndexTag;

impl TypedIndexTag for MonitorIndexTag {
    const NAME: &'static str = "MonitorIndex";
}

/// A typed index addressing a monitor inside a `CompositeMonitor`.
pub type MonitorIndex = TypedIndex<MonitorIndexTag>;

/// A composite monitor that aggregates multiple monitors and forwards events to all of them,
/// in insertion order.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn ProbeMonitor + 'a>>,
}

impl<'a> CompositeMonitor<'a> {
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor and returns the index it can be looked up by.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M) -> MonitorIndex
    where
        M: ProbeMonitor + 'a,
    {
        self.add_monitor_boxed(Box::new(monitor))
    }

    /// Adds a new boxed monitor and returns the index it can be looked up by.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn ProbeMonitor + 'a>) -> MonitorIndex {
        let index = MonitorIndex::new(self.monitors.len());
        self.monitors.push(monitor);
        index
    }

    /// Returns the number of monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Returns the monitor at `monitor_index`, or `None` if it is out of bounds.
    #[inline]
    pub fn monitor(&self, monitor_index: MonitorIndex) -> Option<&(dyn ProbeMonitor + 'a)> {
        self.monitors.get(monitor_index.get()).map(|m| &**m)
    }

    fn names(&self) -> String {
        self.monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl<'a> Default for CompositeMonitor<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> std::fmt::Debug for CompositeMonitor<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.names())
            .finish()
    }
}

impl<'a> std::fmt::Display for CompositeMonitor<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor([{}])", self.names())
    }
}

impl<'a> FromIterator<Box<dyn ProbeMonitor + 'a>> for CompositeMonitor<'a> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ProbeMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a> ProbeMonitor for CompositeMonitor<'a> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter(&mut self, algorithm: Algorithm, len: usize) {
        for monitor in &mut self.monitors {
            monitor.on_enter(algorithm, len);
        }
    }

    fn on_probe(&mut self, index: usize) {
        for monitor in &mut self.monitors {
            monitor.on_probe(index);
        }
    }

    fn on_swap(&mut self, a: usize, b: usize) {
        for monitor in &mut self.monitors {
            monitor.on_swap(a, b);
        }
    }

    fn on_exit(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_exit();
        }
    }
}
