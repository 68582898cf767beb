// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock time types for retrieval bookkeeping.
//!
//! [`TimeStamp`] is nanoseconds since the Unix epoch; [`TimeRange`] is the
//! half-open wall-clock window a segment was retrieved for. The reconciler
//! never looks at these — correlation across axes happens purely in
//! alignment space — but segments carry them so the retrieval layer can
//! decide what is cached and what still needs fetching.

use core::fmt;
use core::ops::{Add, Sub};

/// A point in wall-clock time, in nanoseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeStamp(pub i64);

impl TimeStamp {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// Returns the raw nanosecond value.
    #[inline]
    #[must_use]
    pub const fn nanos(self) -> i64 {
        self.0
    }

    /// Returns the span between `self` and an earlier timestamp, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_span_since(self, earlier: Self) -> TimeSpan {
        // Timestamps are signed; `saturating_sub` alone would hand back a
        // negative span rather than clamping at zero.
        let nanos = self.0.saturating_sub(earlier.0);
        TimeSpan(if nanos < 0 { 0 } else { nanos })
    }
}

impl Add<TimeSpan> for TimeStamp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: TimeSpan) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub<TimeSpan> for TimeStamp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: TimeSpan) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sub for TimeStamp {
    type Output = TimeSpan;

    #[inline]
    fn sub(self, rhs: Self) -> TimeSpan {
        TimeSpan(self.0 - rhs.0)
    }
}

impl fmt::Debug for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeStamp({})", self.0)
    }
}

/// A signed duration in nanoseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeSpan(pub i64);

impl TimeSpan {
    /// A zero-length span.
    pub const ZERO: Self = Self(0);
    /// One nanosecond.
    pub const NANOSECOND: Self = Self(1);
    /// One microsecond.
    pub const MICROSECOND: Self = Self(1_000);
    /// One millisecond.
    pub const MILLISECOND: Self = Self(1_000_000);
    /// One second.
    pub const SECOND: Self = Self(1_000_000_000);

    /// Returns the raw nanosecond value.
    #[inline]
    #[must_use]
    pub const fn nanos(self) -> i64 {
        self.0
    }

    /// Returns `count` copies of `self` (e.g. `TimeSpan::SECOND.mul(5)`).
    #[inline]
    #[must_use]
    pub const fn mul(self, count: i64) -> Self {
        Self(self.0 * count)
    }
}

impl Add for TimeSpan {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TimeSpan {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Debug for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeSpan({})", self.0)
    }
}

/// A half-open wall-clock window `[start, end)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeRange {
    /// Inclusive start of the window.
    pub start: TimeStamp,
    /// Exclusive end of the window.
    pub end: TimeStamp,
}

impl TimeRange {
    /// Creates a range from a start (inclusive) and end (exclusive).
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    #[inline]
    #[must_use]
    pub const fn new(start: TimeStamp, end: TimeStamp) -> Self {
        assert!(end.0 >= start.0, "time range must not be inverted");
        Self { start, end }
    }

    /// Returns the covered span.
    #[inline]
    #[must_use]
    pub const fn span(self) -> TimeSpan {
        TimeSpan(self.end.0 - self.start.0)
    }

    /// Returns `true` if the range covers no time.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.end.0 == self.start.0
    }

    /// Returns `true` if `ts` lies within `[start, end)`.
    #[inline]
    #[must_use]
    pub const fn contains(self, ts: TimeStamp) -> bool {
        ts.0 >= self.start.0 && ts.0 < self.end.0
    }

    /// Returns `true` if the two ranges share at least one instant.
    #[inline]
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        let start = if self.start.0 > other.start.0 {
            self.start.0
        } else {
            other.start.0
        };
        let end = if self.end.0 < other.end.0 {
            self.end.0
        } else {
            other.end.0
        };
        start < end
    }
}

impl fmt::Debug for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeRange({}..{})", self.start.0, self.end.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_span_arithmetic() {
        let t = TimeStamp(1_000);
        let s = TimeSpan(200);
        assert_eq!((t + s).nanos(), 1_200);
        assert_eq!((t - s).nanos(), 800);
        assert_eq!(t - TimeStamp(400), TimeSpan(600));
        assert_eq!(t.saturating_span_since(TimeStamp(2_000)), TimeSpan::ZERO);
    }

    #[test]
    fn span_since_clamps_at_zero() {
        // A later `earlier` must yield zero, not a negative span.
        assert_eq!(
            TimeStamp(1_000).saturating_span_since(TimeStamp(2_000)),
            TimeSpan::ZERO
        );
        assert_eq!(
            TimeStamp(i64::MIN).saturating_span_since(TimeStamp(i64::MAX)),
            TimeSpan::ZERO
        );
        assert_eq!(
            TimeStamp(2_000).saturating_span_since(TimeStamp(1_000)),
            TimeSpan(1_000)
        );
    }

    #[test]
    fn span_constants_compose() {
        assert_eq!(TimeSpan::SECOND, TimeSpan::MILLISECOND.mul(1_000));
        assert_eq!(TimeSpan::MILLISECOND - TimeSpan::MICROSECOND, TimeSpan(999_000));
    }

    #[test]
    fn range_contains_and_overlaps() {
        let r = TimeRange::new(TimeStamp(100), TimeStamp(200));
        assert!(r.contains(TimeStamp(100)));
        assert!(!r.contains(TimeStamp(200)), "end is exclusive");
        assert_eq!(r.span(), TimeSpan(100));

        let touching = TimeRange::new(TimeStamp(200), TimeStamp(300));
        assert!(!r.overlaps(touching));
        let crossing = TimeRange::new(TimeStamp(150), TimeStamp(300));
        assert!(r.overlaps(crossing));
    }
}
