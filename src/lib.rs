// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # idranges: Batching Integer ID Ranges
//!
//! This crate provides small, self-contained utilities for working with
//! ranges of integer IDs and with ordered sequences in general. Its core is a
//! bucketing algorithm that repacks a list of disjoint ID ranges into batches
//! holding a bounded number of IDs each, which is what you need when a job
//! has to process, say, "all IDs in these ranges, at most 500 at a time".
//!
//! ## Core Concepts
//!
//! - [`Interval`]: an inclusive integer range `[start, end]`.
//! - [`Bucket`]: a run of intervals whose total number of integers is capped
//!   by a caller-supplied `split_size`.
//!
//! ## Bucketing
//!
//! [`bucketize`] fills buckets greedily from left to right. When an interval
//! does not fit into the room left in the current bucket, its front fills the
//! bucket and the rest carries over into the next one:
//!
//! ```rust
//! use idranges::{Interval, bucketize};
//!
//! let ivals = vec![
//!     Interval::new(1, 6)?,
//!     Interval::new(8, 10)?,
//!     Interval::new(15, 18)?,
//! ];
//! let buckets = bucketize(ivals, 4)?;
//!
//! let rendered: Vec<String> = buckets.iter().map(|b| b.to_string()).collect();
//! assert_eq!(rendered, ["[1,4]", "[5,6], [8,9]", "[10,10], [15,17]", "[18,18]"]);
//! # Ok::<(), idranges::Error>(())
//! ```
//!
//! Three properties hold for every input of disjoint intervals:
//!
//! - **Conservation**: the buckets hold exactly as many numbers as the input.
//! - **Bound**: no bucket holds more than `split_size` numbers.
//! - **Reconstruction**: reading the buckets in order yields the input numbers
//!   in their original order.
//!
//! [`Buckets`] is the lazy iterator behind [`bucketize`], useful when the
//! input is too large to materialize all buckets at once.
//!
//! ## Merging
//!
//! [`merge_intervals`] sorts intervals and collapses overlapping ones into a
//! sorted list of disjoint intervals, which makes arbitrary input suitable
//! for bucketing.
//!
//! ## Sequences and Sets
//!
//! - [`split_fixed`] and [`split_even`] partition slices into fixed-size or
//!   near-equal consecutive chunks.
//! - [`set_difference`] and [`set_intersection`] treat slices as sets.
//!
//! The [`system`] module offers accessors for a handful of platform and
//! process properties.
//!
//! ## Logging
//!
//! Bucketing and merging emit [`tracing`] events (`trace` per flushed
//! bucket, `debug` per call). The crate never installs a subscriber.
//!
//! ## Features
//!
//! - `serde`: Provides `serde` support for [`Interval`] and [`Bucket`].
//! - `arbitrary`: Implements `quickcheck::Arbitrary` for [`Interval`], useful for
//!   property-based testing.
//!
//! ## License
//!
//! This project is licensed under either of
//!
//! - Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or http://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or http://opensource.org/licenses/MIT)
//!
//! at your option.
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod bucket;
pub use bucket::{Bucket, Buckets};
mod error;
pub use error::{Error, Result};
pub mod interval;
pub use interval::Interval;
pub mod partition;
pub use partition::EvenChunks;
pub mod set_ops;
pub mod system;

/// Splits disjoint `intervals` into buckets of at most `split_size` numbers.
///
/// The intervals are processed in the order given and are not checked for
/// disjointness. An empty input yields no buckets. See [`bucket`] for the
/// packing rules.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `split_size` is zero.
pub fn bucketize(
    intervals: impl IntoIterator<Item = Interval>,
    split_size: u64,
) -> Result<Vec<Bucket>> {
    bucket::split(intervals, split_size)
}

/// Merges overlapping intervals into a sorted list of disjoint intervals.
///
/// See [`interval::merge`].
#[must_use]
pub fn merge_intervals(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    interval::merge(intervals)
}

/// Splits `items` into consecutive chunks of `chunk_size` elements.
///
/// See [`partition::split_fixed`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `chunk_size` is zero.
pub fn split_fixed<T>(items: &[T], chunk_size: usize) -> Result<Vec<&[T]>> {
    partition::split_fixed(items, chunk_size)
}

/// Splits `items` into exactly `n` consecutive chunks of near-equal length.
///
/// See [`partition::split_even`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` is zero.
pub fn split_even<T>(items: &[T], n: usize) -> Result<Vec<&[T]>> {
    partition::split_even(items, n)
}

/// Elements present in exactly one of `a` and `b`, each once.
#[must_use]
pub fn set_difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + std::hash::Hash + Clone,
{
    set_ops::difference(a, b)
}

/// Elements present in both `a` and `b`, each once.
#[must_use]
pub fn set_intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + std::hash::Hash + Clone,
{
    set_ops::intersection(a, b)
}
