// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for reconciliation passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! reconciler calls as it runs. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — gates the per-operation
//!   [`DrawOpEvent`] and the corresponding `TraceSink` method.

#[cfg(feature = "trace-rich")]
use crate::alignment::Alignment;

/// Emitted when a reconciliation pass starts.
#[derive(Clone, Copy, Debug)]
pub struct ReconcileBeginEvent {
    /// Number of X-axis segments in the pass.
    pub x_segments: usize,
    /// Number of Y-axis segments in the pass.
    pub y_segments: usize,
}

/// Emitted when a reconciliation pass completes.
#[derive(Clone, Copy, Debug)]
pub struct ReconcileEndEvent {
    /// Number of draw operations produced.
    pub ops: usize,
}

/// Emitted for each draw operation (requires the `trace-rich` feature).
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct DrawOpEvent {
    /// Position of this operation in the draw list.
    pub index: usize,
    /// Index of the X segment being paired.
    pub x_segment: usize,
    /// Index of the Y segment being paired.
    pub y_segment: usize,
    /// Lower bound of the overlap.
    pub lower: Alignment,
    /// Alignment-unit span of the overlap.
    pub count: u64,
}

/// Receives trace events from the reconciler.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a reconciliation pass starts.
    fn on_reconcile_begin(&mut self, e: &ReconcileBeginEvent) {
        _ = e;
    }

    /// Called when a reconciliation pass completes.
    fn on_reconcile_end(&mut self, e: &ReconcileEndEvent) {
        _ = e;
    }

    /// Called for each emitted draw operation (requires `trace-rich`).
    #[cfg(feature = "trace-rich")]
    fn on_draw_op(&mut self, e: &DrawOpEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ReconcileBeginEvent`].
    #[inline]
    pub fn reconcile_begin(&mut self, e: &ReconcileBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reconcile_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ReconcileEndEvent`].
    #[inline]
    pub fn reconcile_end(&mut self, e: &ReconcileEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reconcile_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DrawOpEvent`] (requires the `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn draw_op(&mut self, e: &DrawOpEvent) {
        if let Some(s) = &mut self.sink {
            s.on_draw_op(e);
        }
    }
}
