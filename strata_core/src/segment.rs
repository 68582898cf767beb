// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segments: immutable retrieved chunks of one axis.
//!
//! A [`Segment`] is one contiguous chunk of samples tagged with the
//! half-open alignment interval it covers and its *alignment multiple* — the
//! number of alignment units one stored sample represents. A multiple of 1
//! means fully-dense storage; a multiple of N > 1 means the chunk was
//! decimated and consecutive stored samples sit N alignment units apart.
//!
//! [`SegmentSeq`] is the per-axis ordered sequence the retrieval layer hands
//! to the reconciler: sorted by lower bound, pairwise non-overlapping.
//! Ordering is the retrieval layer's contract and is only re-checked by
//! debug assertions, never in release builds.

use alloc::vec::Vec;

use crate::alignment::{Alignment, AlignmentBounds};
use crate::sample::SampleBuf;
use crate::time::TimeRange;

/// One contiguous, immutable chunk of samples on one axis.
#[derive(Clone, Debug)]
pub struct Segment {
    bounds: AlignmentBounds,
    multiple: u64,
    time_range: TimeRange,
    buf: SampleBuf,
}

impl Segment {
    /// Creates a segment.
    ///
    /// # Panics
    ///
    /// Panics if `multiple` is zero or `bounds` is zero-span; zero-span
    /// segments must never be emitted by the retrieval layer. Debug builds
    /// additionally check that the buffer holds at least
    /// [`stored_len`](Self::stored_len) elements.
    #[must_use]
    pub fn new(
        bounds: AlignmentBounds,
        multiple: u64,
        time_range: TimeRange,
        buf: SampleBuf,
    ) -> Self {
        assert!(multiple >= 1, "alignment multiple must be positive");
        assert!(!bounds.is_empty(), "segment must cover at least one unit");
        debug_assert!(
            buf.len() as u64 >= bounds.span().div_ceil(multiple),
            "buffer shorter than the alignment interval implies"
        );
        Self {
            bounds,
            multiple,
            time_range,
            buf,
        }
    }

    /// Returns the alignment interval this segment covers.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> AlignmentBounds {
        self.bounds
    }

    /// Returns the alignment multiple (stride) of the stored samples.
    #[inline]
    #[must_use]
    pub const fn multiple(&self) -> u64 {
        self.multiple
    }

    /// Returns the wall-clock window this segment was retrieved for.
    #[inline]
    #[must_use]
    pub const fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Returns the sample storage.
    #[inline]
    #[must_use]
    pub const fn buf(&self) -> &SampleBuf {
        &self.buf
    }

    /// Returns the number of stored elements the alignment interval implies:
    /// `ceil(span / multiple)`.
    #[inline]
    #[must_use]
    pub const fn stored_len(&self) -> u64 {
        self.bounds.span().div_ceil(self.multiple)
    }

    /// Returns `true` if the two segments share alignment positions.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.bounds.overlaps(other.bounds)
    }

    /// Returns the shared alignment sub-interval, if any.
    #[inline]
    #[must_use]
    pub const fn intersect(&self, other: &Self) -> Option<AlignmentBounds> {
        self.bounds.intersect(other.bounds)
    }

    /// Converts an alignment position inside this segment to the element
    /// index of the stored sample covering it: `(pos - lower) / multiple`,
    /// rounding down.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is below the segment's lower bound. Querying a
    /// position outside `[lower, upper)` is a bug in the caller (the
    /// reconciler), not bad input, so this fails fast rather than returning
    /// a recoverable error.
    #[inline]
    #[must_use]
    pub fn to_local_index(&self, pos: Alignment) -> u64 {
        assert!(
            pos >= self.bounds.lower(),
            "alignment position below segment lower bound"
        );
        debug_assert!(self.bounds.contains(pos), "position past segment upper bound");
        (pos - self.bounds.lower()) / self.multiple
    }
}

/// An ordered, pairwise non-overlapping sequence of segments for one axis.
///
/// The retrieval layer merges and sorts chunks before constructing one of
/// these; [`is_well_formed`](Self::is_well_formed) exists for tests and
/// debug assertions, not per-call validation.
#[derive(Clone, Debug, Default)]
pub struct SegmentSeq {
    segments: Vec<Segment>,
}

impl SegmentSeq {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates an empty sequence with room for `cap` segments.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            segments: Vec::with_capacity(cap),
        }
    }

    /// Wraps an already-sorted, non-overlapping vector of segments.
    ///
    /// Debug builds assert the ordering invariant; release builds trust the
    /// caller.
    #[must_use]
    pub fn from_vec(segments: Vec<Segment>) -> Self {
        let seq = Self { segments };
        debug_assert!(seq.is_well_formed(), "segments unsorted or overlapping");
        seq
    }

    /// Appends a segment that must start at or after the previous segment's
    /// upper bound (debug-asserted).
    pub fn push(&mut self, segment: Segment) {
        debug_assert!(
            self.segments
                .last()
                .is_none_or(|prev| prev.bounds().upper() <= segment.bounds().lower()),
            "segment overlaps or precedes its predecessor"
        );
        self.segments.push(segment);
    }

    /// Returns the number of segments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the sequence holds no segments.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segment at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Returns the segments as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the segments in alignment order.
    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the overall alignment envelope, or `None` if empty.
    ///
    /// The envelope may contain gaps; it is the hull, not the coverage.
    #[must_use]
    pub fn bounds(&self) -> Option<AlignmentBounds> {
        let first = self.segments.first()?;
        let last = self.segments.last()?;
        Some(AlignmentBounds::new(
            first.bounds().lower(),
            last.bounds().upper(),
        ))
    }

    /// Returns `true` if segments are sorted by lower bound and pairwise
    /// non-overlapping.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.segments
            .windows(2)
            .all(|w| w[0].bounds().upper() <= w[1].bounds().lower())
    }
}

impl<'a> IntoIterator for &'a SegmentSeq {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromIterator<Segment> for SegmentSeq {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::time::TimeStamp;

    fn seg(lower: u64, upper: u64, multiple: u64) -> Segment {
        let bounds = AlignmentBounds::new(Alignment(lower), Alignment(upper));
        // `multiple` may be deliberately invalid; size the buffer as if it
        // were 1 so `Segment::new` is what panics.
        #[expect(clippy::cast_possible_truncation, reason = "test spans are tiny")]
        let stored = bounds.span().div_ceil(multiple.max(1)) as usize;
        Segment::new(
            bounds,
            multiple,
            TimeRange::new(TimeStamp::EPOCH, TimeStamp(1)),
            SampleBuf::from(vec![0.0f32; stored]),
        )
    }

    #[test]
    fn local_index_dense() {
        let s = seg(50, 100, 1);
        assert_eq!(s.to_local_index(Alignment(50)), 0);
        assert_eq!(s.to_local_index(Alignment(99)), 49);
        assert_eq!(s.stored_len(), 50);
    }

    #[test]
    fn local_index_decimated_floors() {
        // Multiple 4: positions 20..24 all map to element 0, 33 maps to 3.
        let s = seg(20, 80, 4);
        assert_eq!(s.to_local_index(Alignment(20)), 0);
        assert_eq!(s.to_local_index(Alignment(23)), 0);
        assert_eq!(s.to_local_index(Alignment(24)), 1);
        assert_eq!(s.to_local_index(Alignment(33)), 3);
        assert_eq!(s.stored_len(), 15);
    }

    #[test]
    fn stored_len_rounds_up_ragged_tail() {
        // 10 units at multiple 4: three stored samples cover it.
        let s = seg(0, 10, 4);
        assert_eq!(s.stored_len(), 3);
    }

    #[test]
    #[should_panic(expected = "below segment lower bound")]
    fn local_index_before_lower_panics() {
        let _ = seg(50, 100, 1).to_local_index(Alignment(49));
    }

    #[test]
    #[should_panic(expected = "multiple must be positive")]
    fn zero_multiple_panics() {
        let _ = seg(0, 10, 0);
    }

    #[test]
    #[should_panic(expected = "at least one unit")]
    fn zero_span_segment_panics() {
        let _ = seg(10, 10, 1);
    }

    #[test]
    fn seq_envelope_spans_gaps() {
        let seq = SegmentSeq::from_vec(vec![seg(0, 100, 1), seg(300, 400, 1)]);
        let bounds = seq.bounds().unwrap();
        assert_eq!(bounds.lower(), Alignment(0));
        assert_eq!(bounds.upper(), Alignment(400));
        assert!(seq.is_well_formed());
        assert_eq!(SegmentSeq::new().bounds(), None);
    }

    #[test]
    fn touching_segments_are_well_formed() {
        let mut seq = SegmentSeq::new();
        seq.push(seg(0, 100, 1));
        seq.push(seg(100, 200, 1));
        assert!(seq.is_well_formed());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overlaps or precedes")]
    fn out_of_order_push_panics_in_debug() {
        let mut seq = SegmentSeq::new();
        seq.push(seg(100, 200, 1));
        seq.push(seg(50, 150, 1));
    }
}
