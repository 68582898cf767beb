// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-operation compilation for alignment-indexed telemetry curves.
//!
//! `strata_render` turns two per-axis segment sequences into the minimal
//! ordered list of GPU draw instructions that renders every point with both
//! an X and a Y value:
//!
//! ```text
//!   SegmentSeq (X) ──┐
//!                    ├──► reconcile() ──► DrawList ──► GPU backend
//!   SegmentSeq (Y) ──┘
//! ```
//!
//! **[`plan`]** — [`DrawOperation`](plan::DrawOperation) (one segment pair,
//! buffer offsets, overlap span) and the ordered
//! [`DrawList`](plan::DrawList).
//!
//! **[`reconcile`]** — the two-pointer alignment merge that emits one
//! operation per maximal overlapping segment pair, in ascending alignment
//! order.
//!
//! The compiler is pure and synchronous: no I/O, no allocation beyond the
//! output list, `O(|X| + |Y|)` per pass. Callers re-run it on every data or
//! viewport change and discard stale results; there is nothing to cancel.
//!
//! # Crate features
//!
//! - `trace`, `trace-rich`: forwarded to `strata_core`.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod plan;
pub mod reconcile;

pub use plan::{DrawList, DrawOperation};
pub use reconcile::{reconcile, reconcile_into};
