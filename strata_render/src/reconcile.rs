// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The alignment reconciler.
//!
//! Given one ordered segment sequence per axis, [`reconcile`] walks both in
//! lock-step and emits one [`DrawOperation`] per maximal overlapping
//! (X, Y) segment pair, in ascending alignment order. Segments with no
//! counterpart on the other axis contribute nothing — expected when axes are
//! retrieved or live-streamed independently and momentarily out of sync.
//!
//! The walk is a two-pointer interval merge: at each step the pair under the
//! cursors is intersected, an operation is emitted if the intersection is
//! non-empty, and the cursor whose interval ends first advances. Each step
//! retires one segment, so a pass costs `O(|X| + |Y|)` and produces at most
//! `|X| + |Y| - 1` operations.

use strata_core::segment::SegmentSeq;
#[cfg(feature = "trace-rich")]
use strata_core::trace::DrawOpEvent;
use strata_core::trace::{ReconcileBeginEvent, ReconcileEndEvent, Tracer};

use crate::plan::{DrawList, DrawOperation};

/// Compiles the draw list for one update cycle.
///
/// Both sequences must satisfy the [`SegmentSeq`] ordering invariant; this
/// is debug-asserted, not re-validated per call. The output list is
/// pre-sized to `|X| + |Y|`, one more than the worst case.
#[must_use]
pub fn reconcile(x: &SegmentSeq, y: &SegmentSeq) -> DrawList {
    let mut out = DrawList::with_capacity(x.len() + y.len());
    reconcile_into(x, y, &mut out, &mut Tracer::none());
    out
}

/// Like [`reconcile`], but reuses an existing [`DrawList`] allocation and
/// reports progress to `tracer`.
///
/// `out` is cleared first; on return it holds the complete plan for this
/// pair of sequences.
pub fn reconcile_into(
    x: &SegmentSeq,
    y: &SegmentSeq,
    out: &mut DrawList,
    tracer: &mut Tracer<'_>,
) {
    debug_assert!(x.is_well_formed(), "X segments unsorted or overlapping");
    debug_assert!(y.is_well_formed(), "Y segments unsorted or overlapping");

    out.clear();
    tracer.reconcile_begin(&ReconcileBeginEvent {
        x_segments: x.len(),
        y_segments: y.len(),
    });

    let xs = x.as_slice();
    let ys = y.as_slice();
    let (mut i, mut j) = (0, 0);
    while i < xs.len() && j < ys.len() {
        let (xi, yj) = (&xs[i], &ys[j]);
        if let Some(overlap) = xi.intersect(yj) {
            let op = DrawOperation {
                x_segment: i,
                y_segment: j,
                x_offset: xi.to_local_index(overlap.lower()),
                y_offset: yj.to_local_index(overlap.lower()),
                count: overlap.span(),
            };
            #[cfg(feature = "trace-rich")]
            tracer.draw_op(&DrawOpEvent {
                index: out.ops.len(),
                x_segment: i,
                y_segment: j,
                lower: overlap.lower(),
                count: op.count,
            });
            out.ops.push(op);
        }
        // Advance the axis whose interval ends first. On a tie either choice
        // is safe: the next segment on the advanced axis starts at or after
        // the other axis's current upper bound.
        if xi.bounds().upper() <= yj.bounds().upper() {
            i += 1;
        } else {
            j += 1;
        }
    }

    tracer.reconcile_end(&ReconcileEndEvent { ops: out.len() });
}
