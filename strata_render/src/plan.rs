// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw plan: an ordered sequence of draw operations for one update cycle.

use alloc::vec::Vec;

use strata_core::segment::Segment;

/// A single draw instruction pairing one X segment slice with one Y segment
/// slice.
///
/// Segment references are indices into the [`SegmentSeq`]s the operation was
/// compiled from; the renderer resolves them against the same sequences it
/// passed to [`reconcile`](crate::reconcile::reconcile).
///
/// `count` is the **alignment-unit span** of the overlap, not a stored
/// element count. Offsets are element indices, already divided by each
/// segment's multiple. A consumer reading a decimated buffer strides by the
/// segment's multiple; [`x_elements`](Self::x_elements) and
/// [`y_elements`](Self::y_elements) compute how many stored elements that
/// touches.
///
/// [`SegmentSeq`]: strata_core::segment::SegmentSeq
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawOperation {
    /// Index of the X segment in the X-axis sequence.
    pub x_segment: usize,
    /// Index of the Y segment in the Y-axis sequence.
    pub y_segment: usize,
    /// Element index into the X segment's buffer at which reading begins.
    pub x_offset: u64,
    /// Element index into the Y segment's buffer at which reading begins.
    pub y_offset: u64,
    /// Alignment-unit span of the overlap. Always positive.
    pub count: u64,
}

impl DrawOperation {
    /// Returns the number of stored X elements this operation reads:
    /// `ceil(count / x.multiple())`.
    ///
    /// `x` must be the segment `x_segment` refers to.
    #[inline]
    #[must_use]
    pub const fn x_elements(&self, x: &Segment) -> u64 {
        self.count.div_ceil(x.multiple())
    }

    /// Returns the number of stored Y elements this operation reads:
    /// `ceil(count / y.multiple())`.
    ///
    /// `y` must be the segment `y_segment` refers to.
    #[inline]
    #[must_use]
    pub const fn y_elements(&self, y: &Segment) -> u64 {
        self.count.div_ceil(y.multiple())
    }
}

/// An ordered list of draw operations for one update cycle.
///
/// Operations are produced in ascending alignment order, matching the
/// left-to-right order the GPU backend draws in. Draw lists are ephemeral:
/// recomputed on every data or viewport change and consumed by the renderer
/// for a single cycle. [`clear`](Self::clear) supports reuse across cycles
/// without reallocating.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    /// Draw operations in ascending alignment order.
    pub ops: Vec<DrawOperation>,
}

impl DrawList {
    /// Creates an empty draw list.
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Creates an empty draw list with room for `cap` operations.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            ops: Vec::with_capacity(cap),
        }
    }

    /// Clears the list for reuse, keeping its allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Returns the number of operations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if no operations were produced.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterates over the operations in emission order.
    pub fn iter(&self) -> core::slice::Iter<'_, DrawOperation> {
        self.ops.iter()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawOperation;
    type IntoIter = core::slice::Iter<'a, DrawOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use strata_core::alignment::{Alignment, AlignmentBounds};
    use strata_core::sample::SampleBuf;
    use strata_core::time::{TimeRange, TimeStamp};

    use super::*;

    fn seg(lower: u64, upper: u64, multiple: u64) -> Segment {
        let bounds = AlignmentBounds::new(Alignment(lower), Alignment(upper));
        #[expect(clippy::cast_possible_truncation, reason = "test spans are tiny")]
        let stored = bounds.span().div_ceil(multiple) as usize;
        Segment::new(
            bounds,
            multiple,
            TimeRange::new(TimeStamp::EPOCH, TimeStamp(1)),
            SampleBuf::from(vec![0.0f32; stored]),
        )
    }

    #[test]
    fn element_counts_stride_by_multiple() {
        let op = DrawOperation {
            x_segment: 0,
            y_segment: 0,
            x_offset: 0,
            y_offset: 5,
            count: 60,
        };
        // Dense X: one element per alignment unit.
        assert_eq!(op.x_elements(&seg(20, 80, 1)), 60);
        // Decimated Y at multiple 4: 60 units touch 15 stored elements.
        assert_eq!(op.y_elements(&seg(0, 80, 4)), 15);
        // Ragged tail rounds up.
        assert_eq!(op.x_elements(&seg(20, 80, 7)), 9);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut list = DrawList::with_capacity(8);
        list.ops.push(DrawOperation {
            x_segment: 0,
            y_segment: 0,
            x_offset: 0,
            y_offset: 0,
            count: 1,
        });
        let cap = list.ops.capacity();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.ops.capacity(), cap);
    }
}
