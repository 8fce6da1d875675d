// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Interval
//!
//! This module provides the [`Interval`] value type, an inclusive range of
//! signed 64-bit integers, together with [`merge`], which collapses a list of
//! possibly overlapping intervals into a sorted list of disjoint ones.
//!
//! Intervals are the unit that [`crate::bucket`] splits and repacks. They are
//! `Copy` and never mutated once handed out: shrinking or splitting an
//! interval always yields new values.

use crate::error::{Error, Result};
use std::{fmt, num::NonZeroU64, ops::RangeInclusive};

/// An inclusive range `[start, end]` of integers.
///
/// The constructor guarantees `start <= end`, so an interval always holds at
/// least one number. Intervals order by `start`, then by `end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct Interval {
    /// Start of the interval (inclusive)
    start: i64,
    /// End of the interval (inclusive)
    end: i64,
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        if self.end != self.start {
            write!(f, "..={}", self.end)?;
        }
        Ok(())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.start, self.end)
    }
}

impl From<i64> for Interval {
    fn from(value: i64) -> Self {
        Self::point(value)
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = Error;

    fn try_from((start, end): (i64, i64)) -> Result<Self> {
        Self::new(start, end)
    }
}

impl TryFrom<RangeInclusive<i64>> for Interval {
    type Error = Error;

    fn try_from(value: RangeInclusive<i64>) -> Result<Self> {
        Self::new(*value.start(), *value.end())
    }
}

impl From<Interval> for (i64, i64) {
    fn from(value: Interval) -> Self {
        (value.start, value.end)
    }
}

impl From<Interval> for RangeInclusive<i64> {
    fn from(value: Interval) -> Self {
        value.start..=value.end
    }
}

impl Interval {
    /// Creates a new [`Interval`] covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `start > end`, and
    /// [`Error::IntervalTooWide`] for the one interval whose count does not
    /// fit a `u64`, namely `i64::MIN..=i64::MAX`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidInterval { start, end });
        }
        if start == i64::MIN && end == i64::MAX {
            return Err(Error::IntervalTooWide { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a new [`Interval`] containing a single number.
    #[must_use]
    pub const fn point(value: i64) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// The number of integers this interval holds, `end - start + 1`.
    #[must_use]
    pub const fn count(&self) -> u64 {
        // cannot overflow: `new` rejects the only interval with 2^64 numbers
        self.end.abs_diff(self.start) + 1
    }

    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns whether `self` and `other` share at least one number.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Iterator over all the numbers this interval holds, in ascending order.
    pub fn values(self) -> RangeInclusive<i64> {
        self.start..=self.end
    }

    /// Splits off the first `n` numbers of this interval.
    ///
    /// Returns the front part and whatever is left of `self` afterwards. If
    /// `n` is at least [`Self::count`], the whole interval is the front and
    /// nothing remains.
    #[must_use]
    pub fn split_front(self, n: NonZeroU64) -> (Self, Option<Self>) {
        if n.get() >= self.count() {
            return (self, None);
        }
        // n < count, so start + (n - 1) stays strictly below end
        let front_end = self.start.wrapping_add_unsigned(n.get() - 1);
        let front = Self {
            start: self.start,
            end: front_end,
        };
        let rest = Self {
            start: front_end + 1,
            end: self.end,
        };
        (front, Some(rest))
    }
}

/// Merges overlapping intervals.
///
/// The intervals are sorted by `start` and then scanned once: an interval
/// that begins after the end of the last emitted one opens a new output
/// interval, one that begins inside it extends its end if needed, and one
/// that lies entirely inside it is dropped. Intervals that merely touch, such
/// as `[1,2]` and `[3,4]`, are kept apart.
///
/// The result is sorted, disjoint and covers exactly the numbers covered by
/// the input.
///
/// ```rust
/// use idranges::{Interval, merge_intervals};
///
/// let ivals = [(1, 3), (2, 6), (8, 10), (15, 18)]
///     .into_iter()
///     .map(Interval::try_from)
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// let merged: Vec<_> = merge_intervals(ivals).into_iter().map(<(i64, i64)>::from).collect();
/// assert_eq!(merged, [(1, 6), (8, 10), (15, 18)]);
/// ```
#[must_use]
pub fn merge(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.into_iter().collect();
    let input_len = sorted.len();
    sorted.sort_unstable_by_key(Interval::start);

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for ival in sorted {
        match merged.last_mut() {
            Some(prev) if ival.start <= prev.end => {
                if ival.end <= prev.end {
                    // fully contained
                    continue;
                }
                if prev.start == i64::MIN && ival.end == i64::MAX {
                    // the union could not count its own numbers, so the part
                    // past prev.end is kept as a separate interval instead
                    let tail = Interval {
                        start: prev.end + 1,
                        end: ival.end,
                    };
                    merged.push(tail);
                } else {
                    prev.end = ival.end;
                }
            }
            _ => merged.push(ival),
        }
    }

    tracing::debug!(
        input = input_len,
        output = merged.len(),
        "merged overlapping intervals"
    );
    merged
}

#[cfg(feature = "arbitrary")]
impl quickcheck::Arbitrary for Interval {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let start = i64::from(<i32 as quickcheck::Arbitrary>::arbitrary(g));
        let len = <u16 as quickcheck::Arbitrary>::arbitrary(g);
        Self {
            start,
            end: start + i64::from(len),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let start = self.start;
        // lengths only ever shrink, so `start + len` stays in range
        let len = self.end.abs_diff(self.start);
        Box::new(
            quickcheck::Arbitrary::shrink(&len).map(move |len| Self {
                start,
                end: start.wrapping_add_unsigned(len),
            }),
        )
    }
}
