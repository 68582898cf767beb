// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON export for strata diagnostics.
//!
//! This crate provides development-time views of reconciliation:
//!
//! - [`pretty::PrettyPrintSink`] — a
//!   [`TraceSink`](strata_core::trace::TraceSink) writing one human-readable
//!   line per event.
//! - [`export`] — JSON serialization of compiled
//!   [`DrawList`](strata_render::DrawList)s for golden-file inspection.

pub mod export;
pub mod pretty;
