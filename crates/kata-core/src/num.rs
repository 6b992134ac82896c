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

//! # Kata Numeric Trait
//!
//! Unified numeric bounds for the search and sort routines. `KataNumeric`
//! collects what those routines need from an element type: value semantics
//! (`Copy`), a partial order for comparisons, and the `num_traits::Num`
//! arithmetic surface so that integers and floats are accepted alike.
//!
//! ## Notes
//!
//! Floats only provide a partial order. The algorithms treat incomparable
//! pairs (anything involving `NaN`) as "not greater" and "not equal", which
//! keeps them total and panic free without promising a meaningful result.

use num_traits::Num;

/// A trait alias for numeric element types accepted by the search and
/// sort algorithms.
///
/// Implemented automatically for every type that satisfies the bounds,
/// which covers all primitive integers and `f32`/`f64`.
///
/// # Examples
///
/// ```rust
/// # use kata_core::num::KataNumeric;
/// fn largest<T: KataNumeric>(values: &[T]) -> Option<T> {
///     values
///         .iter()
///         .copied()
///         .fold(None, |acc, v| match acc {
///             Some(a) if a >= v => Some(a),
///             _ => Some(v),
///         })
/// }
///
/// assert_eq!(largest(&[3_i32, 9, 4]), Some(9));
/// assert_eq!(largest(&[1.5_f64, -2.0]), Some(1.5));
/// assert_eq!(largest::<u8>(&[]), None);
/// ```
pub trait KataNumeric:
    Num + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> KataNumeric for T where
    T: Num + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
