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

/// Observer for the probes and swaps performed by a single algorithm run.
///
/// A run always starts with `on_enter` and ends with `on_exit`. In between,
/// `on_probe` is called once per element read (by index into the input) and
/// `on_swap` once per exchange of two elements.
pub trait ProbeMonitor {
    fn name(&self) -> &str;
    fn on_enter(&mut self, algorithm: Algorithm, len: usize);
    fn on_probe(&mut self, index: usize);
    fn on_swap(&mut self, a: usize, b: usize);
    fn on_exit(&mut self);
}

impl<M> ProbeMonitor for &mut M
where
    M: ProbeMonitor + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter(&mut self, algorithm: Algorithm, len: usize) {
        (**self).on_enter(algorithm, len);
    }

    #[inline(always)]
    fn on_probe(&mut self, index: usize) {
        (**self).on_probe(index);
    }

    #[inline(always)]
    fn on_swap(&mut self, a: usize, b: usize) {
        (**self).on_swap(a, b);
    }

    #[inline(always)]
    fn on_exit(&mut self) {
        (**self).on_exit();
    }
}

impl<'a> std::fmt::Debug for dyn ProbeMonitor + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProbeMonitor({})", self.name())
    }
}

impl<'a> std::fmt::Display for dyn ProbeMonitor + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProbeMonitor({})", self.name())
    }
}
