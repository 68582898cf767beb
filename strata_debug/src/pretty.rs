// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use strata_core::trace::{DrawOpEvent, ReconcileBeginEvent, ReconcileEndEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_reconcile_begin(&mut self, e: &ReconcileBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[reconcile:begin] x={} y={}",
            e.x_segments, e.y_segments,
        );
    }

    fn on_reconcile_end(&mut self, e: &ReconcileEndEvent) {
        let _ = writeln!(self.writer, "[reconcile:end] ops={}", e.ops);
    }

    fn on_draw_op(&mut self, e: &DrawOpEvent) {
        let _ = writeln!(
            self.writer,
            "[op] #{} pair=({}, {}) lower={:?} count={}",
            e.index, e.x_segment, e.y_segment, e.lower, e.count,
        );
    }
}

#[cfg(test)]
mod tests {
    use strata_core::alignment::Alignment;

    use super::*;

    #[test]
    fn pretty_print_pass() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_reconcile_begin(&ReconcileBeginEvent {
            x_segments: 2,
            y_segments: 3,
        });
        sink.on_draw_op(&DrawOpEvent {
            index: 0,
            x_segment: 0,
            y_segment: 1,
            lower: Alignment::new(0, 50),
            count: 50,
        });
        sink.on_reconcile_end(&ReconcileEndEvent { ops: 1 });

        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[reconcile:begin] x=2 y=3"), "got: {output}");
        assert!(output.contains("pair=(0, 1)"), "got: {output}");
        assert!(output.contains("[reconcile:end] ops=1"), "got: {output}");
    }
}
