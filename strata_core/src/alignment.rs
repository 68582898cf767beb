// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared monotonic alignment index space.
//!
//! [`Alignment`] identifies a logical sample position that is comparable
//! across independently-retrieved chunks of the same or paired channels. It
//! is *not* wall-clock time: two channels sampled together share alignment
//! positions even when their chunks arrive at different times or decimation
//! levels.
//!
//! [`AlignmentBounds`] is the half-open interval `[lower, upper)` over this
//! space. All interval math is 64-bit integer arithmetic; alignment values
//! must never pass through a float, which loses precision past 53 bits.

use core::fmt;
use core::ops::{Add, Sub};

/// A position in the shared alignment index space.
///
/// The raw value packs a domain index in the upper 32 bits and a sample
/// index within that domain in the lower 32 bits, matching the layout used
/// by the storage layer. Interval math treats the value as a plain `u64`
/// ordinal; the packing only matters to code that talks to storage.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Alignment(pub u64);

impl Alignment {
    /// The zero position.
    pub const ZERO: Self = Self(0);

    /// Packs a domain index and an intra-domain sample index.
    #[inline]
    #[must_use]
    pub const fn new(domain: u32, sample: u32) -> Self {
        Self(((domain as u64) << 32) | sample as u64)
    }

    /// Returns the raw 64-bit value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the domain index (upper 32 bits).
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "shifting down 32 bits leaves a 32-bit value"
    )]
    pub const fn domain(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Returns the sample index within the domain (lower 32 bits).
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "masking to the low 32 bits is the point"
    )]
    pub const fn sample(self) -> u32 {
        (self.0 & 0xFFFF_FFFF) as u32
    }

    /// Checked advance by `units` alignment units.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, units: u64) -> Option<Self> {
        match self.0.checked_add(units) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the distance to an earlier position, or zero if `earlier` is
    /// after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_distance_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<u64> for Alignment {
    type Output = Self;

    #[inline]
    fn add(self, rhs: u64) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub<u64> for Alignment {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: u64) -> Self {
        Self(self.0 - rhs)
    }
}

impl Sub for Alignment {
    type Output = u64;

    #[inline]
    fn sub(self, rhs: Self) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Debug for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alignment({}, {})", self.domain(), self.sample())
    }
}

/// A half-open interval `[lower, upper)` in alignment space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlignmentBounds {
    lower: Alignment,
    upper: Alignment,
}

impl AlignmentBounds {
    /// Creates bounds from a lower (inclusive) and upper (exclusive) position.
    ///
    /// # Panics
    ///
    /// Panics if `upper < lower`.
    #[inline]
    #[must_use]
    pub const fn new(lower: Alignment, upper: Alignment) -> Self {
        assert!(upper.0 >= lower.0, "alignment bounds must not be inverted");
        Self { lower, upper }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    #[must_use]
    pub const fn lower(self) -> Alignment {
        self.lower
    }

    /// Returns the exclusive upper bound.
    #[inline]
    #[must_use]
    pub const fn upper(self) -> Alignment {
        self.upper
    }

    /// Returns the number of alignment units covered.
    #[inline]
    #[must_use]
    pub const fn span(self) -> u64 {
        self.upper.0 - self.lower.0
    }

    /// Returns `true` if the interval covers no positions.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.upper.0 == self.lower.0
    }

    /// Returns `true` if `pos` lies within `[lower, upper)`.
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: Alignment) -> bool {
        pos.0 >= self.lower.0 && pos.0 < self.upper.0
    }

    /// Returns `true` if the two intervals share at least one position.
    ///
    /// Touching intervals (`a.upper == b.lower`) do not overlap.
    #[inline]
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        let lower = max(self.lower.0, other.lower.0);
        let upper = min(self.upper.0, other.upper.0);
        lower < upper
    }

    /// Returns the shared sub-interval, or `None` if the intervals are
    /// disjoint. A degenerate (zero-span) result is treated as no overlap.
    #[inline]
    #[must_use]
    pub const fn intersect(self, other: Self) -> Option<Self> {
        let lower = max(self.lower.0, other.lower.0);
        let upper = min(self.upper.0, other.upper.0);
        if lower < upper {
            Some(Self {
                lower: Alignment(lower),
                upper: Alignment(upper),
            })
        } else {
            None
        }
    }
}

impl fmt::Debug for AlignmentBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlignmentBounds({}..{})", self.lower.0, self.upper.0)
    }
}

// `core::cmp::{min, max}` are not const over u64.
const fn max(a: u64, b: u64) -> u64 {
    if a > b { a } else { b }
}

const fn min(a: u64, b: u64) -> u64 {
    if a < b { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_round_trips() {
        let a = Alignment::new(7, 42);
        assert_eq!(a.domain(), 7);
        assert_eq!(a.sample(), 42);
        assert_eq!(a.value(), (7u64 << 32) | 42);
    }

    #[test]
    fn ordering_follows_raw_value() {
        // A later domain always sorts after any sample index in an earlier one.
        assert!(Alignment::new(1, 0) > Alignment::new(0, u32::MAX));
        assert!(Alignment::new(2, 5) > Alignment::new(2, 4));
    }

    #[test]
    fn distance_arithmetic() {
        let a = Alignment(100);
        assert_eq!(a + 20 - a, 20);
        assert_eq!(a.saturating_distance_since(Alignment(130)), 0);
        assert_eq!(a.saturating_distance_since(Alignment(40)), 60);
        assert_eq!(Alignment(u64::MAX).checked_add(1), None);
    }

    #[test]
    fn intersect_partial_overlap() {
        let a = AlignmentBounds::new(Alignment(0), Alignment(100));
        let b = AlignmentBounds::new(Alignment(50), Alignment(150));
        let i = a.intersect(b).unwrap();
        assert_eq!(i.lower(), Alignment(50));
        assert_eq!(i.upper(), Alignment(100));
        assert_eq!(i.span(), 50);
        assert!(a.overlaps(b) && b.overlaps(a));
    }

    #[test]
    fn intersect_containment() {
        let outer = AlignmentBounds::new(Alignment(0), Alignment(200));
        let inner = AlignmentBounds::new(Alignment(50), Alignment(100));
        assert_eq!(outer.intersect(inner), Some(inner));
        assert_eq!(inner.intersect(outer), Some(inner));
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let a = AlignmentBounds::new(Alignment(0), Alignment(100));
        let b = AlignmentBounds::new(Alignment(100), Alignment(150));
        assert!(!a.overlaps(b), "touching is not overlapping");
        assert_eq!(a.intersect(b), None);
    }

    #[test]
    fn zero_span_intersects_nothing() {
        let empty = AlignmentBounds::new(Alignment(50), Alignment(50));
        let full = AlignmentBounds::new(Alignment(0), Alignment(100));
        assert!(empty.is_empty());
        assert_eq!(empty.intersect(full), None);
        assert_eq!(full.intersect(empty), None);
        assert!(!full.contains(Alignment(100)), "upper bound is exclusive");
    }

    #[test]
    #[should_panic(expected = "must not be inverted")]
    fn inverted_bounds_panic() {
        let _ = AlignmentBounds::new(Alignment(10), Alignment(5));
    }
}
