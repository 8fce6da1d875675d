// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Bucket and Buckets
//!
//! This module repacks a list of disjoint [`Interval`]s into [`Bucket`]s that
//! each hold at most `split_size` numbers, so that large ID ranges can be
//! processed in batches of bounded size.
//!
//! ## `Bucket`
//!
//! A `Bucket` is an ordered run of intervals together with the total number
//! of integers they cover. Buckets are only ever built by [`Buckets`], which
//! guarantees `0 < total_count <= split_size` for every bucket it yields.
//!
//! ## `Buckets`
//!
//! `Buckets` is a lazy iterator that fills buckets greedily from left to
//! right. An interval that does not fit in the room left in the current
//! bucket is cut in two: the front fills the bucket, and the rest is carried
//! over as the first interval of the next bucket. The input is never sorted
//! or reordered, so concatenating the intervals of all yielded buckets
//! reproduces the input numbers in their original order.
//!
//! ```rust
//! use idranges::{Interval, bucketize};
//!
//! let ivals = [(1, 6), (8, 10), (15, 18)]
//!     .into_iter()
//!     .map(Interval::try_from)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let buckets = bucketize(ivals, 4).unwrap();
//! let counts: Vec<_> = buckets.iter().map(|b| b.total_count()).collect();
//! assert_eq!(counts, [4, 4, 4, 1]);
//! assert_eq!(buckets[1].to_string(), "[5,6], [8,9]");
//! ```

use crate::{
    error::{Error, Result},
    interval::Interval,
};
use smallvec::SmallVec;
use std::{cmp::Ordering, fmt, iter::FusedIterator, num::NonZeroU64};

/// A run of intervals holding a bounded number of integers.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "serde_impl::RawBucket", into = "serde_impl::RawBucket")
)]
pub struct Bucket {
    intervals: SmallVec<[Interval; 4]>,
    /// Sum of the counts of `intervals`.
    total_count: u64,
}

impl fmt::Debug for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.intervals.iter()).finish()
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ivals = self.intervals.iter();
        if let Some(first) = ivals.next() {
            write!(f, "{first}")?;
            for ival in ivals {
                write!(f, ", {ival}")?;
            }
        }
        Ok(())
    }
}

impl Bucket {
    /// The number of integers covered by all intervals of this bucket.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The number of intervals (not integers) in this bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterator over every integer of this bucket, in interval order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.intervals.iter().flat_map(|ival| ival.values())
    }

    #[must_use]
    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals.into_vec()
    }

    fn push(&mut self, ival: Interval) {
        self.total_count += ival.count();
        self.intervals.push(ival);
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Lazily packs a sequence of disjoint intervals into [`Bucket`]s.
///
/// See the [module documentation](self) for the packing rules. The input is
/// expected to be disjoint, which is not checked.
#[derive(Debug, Clone)]
pub struct Buckets<I> {
    input: std::iter::Fuse<I>,
    /// What is left of an interval that did not fit into the last bucket.
    carry: Option<Interval>,
    bucket: Bucket,
    split_size: NonZeroU64,
    emitted: usize,
}

impl<I> Buckets<I>
where
    I: Iterator<Item = Interval>,
{
    /// Creates a bucketing iterator over `intervals`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `split_size` is zero.
    pub fn new(
        intervals: impl IntoIterator<Item = Interval, IntoIter = I>,
        split_size: u64,
    ) -> Result<Self> {
        let split_size =
            NonZeroU64::new(split_size).ok_or(Error::non_positive("split_size"))?;
        Ok(Self {
            input: intervals.into_iter().fuse(),
            carry: None,
            bucket: Bucket::default(),
            split_size,
            emitted: 0,
        })
    }

    #[must_use]
    pub fn split_size(&self) -> NonZeroU64 {
        self.split_size
    }

    /// How many more numbers fit into the bucket being filled.
    fn room(&self) -> NonZeroU64 {
        NonZeroU64::new(self.split_size.get() - self.bucket.total_count)
            .expect("full buckets are flushed immediately")
    }

    fn flush(&mut self) -> Bucket {
        let bucket = std::mem::take(&mut self.bucket);
        tracing::trace!(
            index = self.emitted,
            total_count = bucket.total_count,
            intervals = bucket.len(),
            "flushed bucket"
        );
        self.emitted += 1;
        bucket
    }
}

impl<I> Iterator for Buckets<I>
where
    I: Iterator<Item = Interval>,
{
    type Item = Bucket;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(ival) = self.carry.take().or_else(|| self.input.next()) else {
                // end of input: whatever is left becomes the last bucket
                return (!self.bucket.is_empty()).then(|| self.flush());
            };

            let room = self.room();
            match ival.count().cmp(&room.get()) {
                Ordering::Greater => {
                    let (front, rest) = ival.split_front(room);
                    self.bucket.push(front);
                    self.carry = rest;
                    return Some(self.flush());
                }
                Ordering::Equal => {
                    self.bucket.push(ival);
                    return Some(self.flush());
                }
                Ordering::Less => self.bucket.push(ival),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.carry.is_some() || !self.bucket.is_empty();
        (usize::from(pending), None)
    }
}

impl<I> FusedIterator for Buckets<I> where I: Iterator<Item = Interval> {}

/// Splits `intervals` into buckets of at most `split_size` numbers each.
///
/// An empty input yields no buckets.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `split_size` is zero.
pub fn split(
    intervals: impl IntoIterator<Item = Interval>,
    split_size: u64,
) -> Result<Vec<Bucket>> {
    let buckets: Vec<_> = Buckets::new(intervals, split_size)?.collect();
    tracing::debug!(split_size, buckets = buckets.len(), "bucketized intervals");
    Ok(buckets)
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Bucket, Interval};
    use crate::error::Error;
    use smallvec::SmallVec;

    #[derive(::serde::Deserialize, ::serde::Serialize)]
    pub(super) struct RawBucket {
        intervals: SmallVec<[Interval; 4]>,
        total_count: u64,
    }

    impl From<Bucket> for RawBucket {
        fn from(bucket: Bucket) -> Self {
            Self {
                intervals: bucket.intervals,
                total_count: bucket.total_count,
            }
        }
    }

    impl TryFrom<RawBucket> for Bucket {
        type Error = Error;

        fn try_from(raw: RawBucket) -> Result<Self, Self::Error> {
            if raw.intervals.is_empty() {
                return Err(Error::InvalidArgument {
                    name: "intervals",
                    reason: "a bucket holds at least one interval",
                });
            }
            let total_count = raw
                .intervals
                .iter()
                .try_fold(0u64, |total, ival| total.checked_add(ival.count()))
                .ok_or(Error::InvalidArgument {
                    name: "total_count",
                    reason: "overflows a u64",
                })?;
            if total_count != raw.total_count {
                return Err(Error::InvalidArgument {
                    name: "total_count",
                    reason: "does not match the intervals of the bucket",
                });
            }
            Ok(Bucket {
                intervals: raw.intervals,
                total_count,
            })
        }
    }
}
