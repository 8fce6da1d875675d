// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Error type shared by every fallible operation in this crate.

/// Errors produced while validating arguments or constructing intervals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A size or count argument was outside of its accepted domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// An interval was constructed with `start > end`.
    #[error("interval start {start} must be <= end {end}")]
    InvalidInterval { start: i64, end: i64 },

    /// An interval covers more integers than fit into a `u64` count.
    ///
    /// Only the interval spanning the entire `i64` domain hits this.
    #[error("interval [{start},{end}] holds more numbers than a u64 can count")]
    IntervalTooWide { start: i64, end: i64 },
}

impl Error {
    pub(crate) fn non_positive(name: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            reason: "must be >= 1",
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
