// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Splitting ordered sequences into consecutive sub-sequences.
//!
//! Chunks borrow from the input slice, so partitioning never clones elements.

use crate::error::{Error, Result};
use std::iter::FusedIterator;

/// Splits `items` into consecutive chunks of exactly `chunk_size` elements.
///
/// The last chunk holds the remainder and may be shorter. An empty input
/// yields no chunks.
///
/// ```rust
/// let items = ["1", "2", "3", "4", "5"];
/// let chunks = idranges::split_fixed(&items, 2).unwrap();
/// assert_eq!(chunks, [&["1", "2"][..], &["3", "4"], &["5"]]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `chunk_size` is zero.
pub fn split_fixed<T>(items: &[T], chunk_size: usize) -> Result<Vec<&[T]>> {
    if chunk_size == 0 {
        return Err(Error::non_positive("chunk_size"));
    }
    Ok(items.chunks(chunk_size).collect())
}

/// Splits `items` into exactly `n` consecutive chunks of near-equal length.
///
/// With `len = items.len()`, the first `len % n` chunks hold `len / n + 1`
/// elements and the rest hold `len / n`. When `n > len`, the trailing chunks
/// are empty.
///
/// ```rust
/// let items = ["1", "2", "3", "4", "5"];
/// let chunks = idranges::split_even(&items, 2).unwrap();
/// assert_eq!(chunks, [&["1", "2", "3"][..], &["4", "5"]]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` is zero.
pub fn split_even<T>(items: &[T], n: usize) -> Result<Vec<&[T]>> {
    Ok(EvenChunks::new(items, n)?.collect())
}

/// Iterator over `n` near-equal consecutive chunks of a slice.
///
/// Produced by [`EvenChunks::new`]; [`split_even`] collects it.
#[derive(Debug, Clone)]
pub struct EvenChunks<'a, T> {
    items: &'a [T],
    /// Length of the short chunks.
    base: usize,
    /// How many leading chunks get one extra element.
    long: usize,
    front: usize,
    back: usize,
}

impl<'a, T> EvenChunks<'a, T> {
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `n` is zero.
    pub fn new(items: &'a [T], n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::non_positive("n"));
        }
        Ok(Self {
            items,
            base: items.len() / n,
            long: items.len() % n,
            front: 0,
            back: n,
        })
    }

    /// Offset of the first element of chunk `k`.
    fn offset(&self, k: usize) -> usize {
        k * self.base + k.min(self.long)
    }

    fn chunk(&self, k: usize) -> &'a [T] {
        &self.items[self.offset(k)..self.offset(k + 1)]
    }
}

impl<'a, T> Iterator for EvenChunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let chunk = self.chunk(self.front);
        self.front += 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for EvenChunks<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.chunk(self.back))
    }
}

impl<T> ExactSizeIterator for EvenChunks<'_, T> {}

impl<T> FusedIterator for EvenChunks<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: [&str; 5] = ["1", "2", "3", "4", "5"];

    fn lens<T>(chunks: &[&[T]]) -> Vec<usize> {
        chunks.iter().map(|c| c.len()).collect()
    }

    #[test]
    fn fixed() {
        let chunks = split_fixed(&DIGITS, 2).unwrap();
        assert_eq!(chunks, [&["1", "2"][..], &["3", "4"], &["5"]]);

        let chunks = split_fixed(&DIGITS, 5).unwrap();
        assert_eq!(chunks, [&DIGITS[..]]);

        let chunks = split_fixed(&DIGITS, 7).unwrap();
        assert_eq!(chunks, [&DIGITS[..]]);
    }

    #[test]
    fn fixed_empty_input() {
        let chunks = split_fixed::<u8>(&[], 3).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn fixed_zero_chunk_size() {
        assert_eq!(
            split_fixed(&DIGITS, 0),
            Err(Error::InvalidArgument {
                name: "chunk_size",
                reason: "must be >= 1"
            })
        );
    }

    #[test]
    fn even() {
        let chunks = split_even(&DIGITS, 2).unwrap();
        assert_eq!(chunks, [&["1", "2", "3"][..], &["4", "5"]]);

        let chunks = split_even(&DIGITS, 3).unwrap();
        assert_eq!(lens(&chunks), [2, 2, 1]);

        let chunks = split_even(&DIGITS, 1).unwrap();
        assert_eq!(chunks, [&DIGITS[..]]);
    }

    #[test]
    fn even_more_chunks_than_items() {
        let chunks = split_even(&DIGITS, 6).unwrap();
        assert_eq!(
            chunks,
            [&["1"][..], &["2"], &["3"], &["4"], &["5"], &[] as &[&str]]
        );

        let chunks = split_even::<u8>(&[], 3).unwrap();
        assert_eq!(lens(&chunks), [0, 0, 0]);
    }

    #[test]
    fn even_zero_chunks() {
        assert!(matches!(
            split_even(&DIGITS, 0),
            Err(Error::InvalidArgument { name: "n", .. })
        ));
    }

    #[test]
    fn even_chunks_iterates_from_both_ends() {
        let items: Vec<u32> = (0..10).collect();
        let mut chunks = EvenChunks::new(&items, 4).unwrap();
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks.next_back(), Some(&[8, 9][..]));
        assert_eq!(chunks.next(), Some(&[0, 1, 2][..]));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.next_back(), Some(&[6, 7][..]));
        assert_eq!(chunks.next(), Some(&[3, 4, 5][..]));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next_back(), None);

        let reversed: Vec<_> = EvenChunks::new(&items, 3).unwrap().rev().collect();
        assert_eq!(reversed, [&[7, 8, 9][..], &[4, 5, 6], &[0, 1, 2, 3]]);
    }

    #[quickcheck]
    fn qc_fixed_concatenates(items: Vec<u8>, chunk_size: u8) -> bool {
        let chunk_size = usize::from(chunk_size) + 1;
        let chunks = split_fixed(&items, chunk_size).unwrap();
        let full = chunks.len().saturating_sub(1);
        chunks.concat() == items
            && chunks[..full].iter().all(|c| c.len() == chunk_size)
            && chunks.last().is_none_or(|c| (1..=chunk_size).contains(&c.len()))
    }

    #[quickcheck]
    fn qc_even_sizes(items: Vec<u8>, n: u8) -> bool {
        let n = usize::from(n) + 1;
        let chunks = split_even(&items, n).unwrap();
        let (base, long) = (items.len() / n, items.len() % n);
        chunks.len() == n
            && chunks.concat() == items
            && chunks
                .iter()
                .enumerate()
                .all(|(i, c)| c.len() == base + usize::from(i < long))
    }
}
