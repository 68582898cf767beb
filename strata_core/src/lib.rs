// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core telemetry types for alignment-indexed curve rendering.
//!
//! `strata_core` provides the foundational data structures for correlating
//! independently-retrieved, independently-decimated chunks of time-series
//! data. It is `no_std` compatible (with `alloc`) and keeps all position
//! arithmetic in 64-bit integers, never floats.
//!
//! # Architecture
//!
//! The crate is organized around a render loop that turns retrieved telemetry
//! chunks into GPU draw instructions:
//!
//! ```text
//!   Retrieval / cache layer (per axis)
//!       │
//!       ▼
//!   SegmentSeq (X) ──┐
//!                    ├──► strata_render::reconcile() ──► DrawList
//!   SegmentSeq (Y) ──┘                                      │
//!                                                           ▼
//!                                       GPU backend (buffer sub-ranges,
//!                                       draw calls — external)
//! ```
//!
//! **[`alignment`]** — The shared monotonic alignment index space:
//! [`Alignment`](alignment::Alignment) positions and half-open
//! [`AlignmentBounds`](alignment::AlignmentBounds) intervals.
//!
//! **[`segment`]** — One immutable retrieved chunk per axis:
//! [`Segment`](segment::Segment) (interval + stride + sample buffer) and the
//! ordered, non-overlapping [`SegmentSeq`](segment::SegmentSeq).
//!
//! **[`sample`]** — Tagged, cheaply-cloneable sample storage
//! ([`SampleBuf`](sample::SampleBuf)) over the supported scalar element
//! types. Reconciliation never reads sample values; buffers exist so draw
//! operations can hand the renderer something to upload.
//!
//! **[`time`]** — Wall-clock bookkeeping types
//! ([`TimeRange`](time::TimeRange)) carried by segments for the retrieval
//! layer. The core never interprets them.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! reconciliation instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): enables `Tracer` method bodies (one
//!   branch per call site).
//! - `trace-rich` (disabled by default, implies `trace`): gates per-operation
//!   events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod alignment;
pub mod sample;
pub mod segment;
pub mod time;
pub mod trace;
