// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of compiled draw lists.
//!
//! Useful for golden-file tests and for diffing the plans two revisions of
//! the reconciler compile from the same inputs.

use std::io::Write;

use serde_json::{Value, json};
use strata_render::DrawList;

/// Converts a draw list to a JSON array, one object per operation.
#[must_use]
pub fn draw_list_json(list: &DrawList) -> Value {
    Value::Array(
        list.iter()
            .map(|op| {
                json!({
                    "x_segment": op.x_segment,
                    "y_segment": op.y_segment,
                    "x_offset": op.x_offset,
                    "y_offset": op.y_offset,
                    "count": op.count,
                })
            })
            .collect(),
    )
}

/// Writes a draw list as pretty-printed JSON.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_draw_list<W: Write>(writer: W, list: &DrawList) -> std::io::Result<()> {
    serde_json::to_writer_pretty(writer, &draw_list_json(list)).map_err(std::io::Error::from)
}

#[cfg(test)]
mod tests {
    use strata_render::DrawOperation;

    use super::*;

    fn sample_list() -> DrawList {
        let mut list = DrawList::new();
        list.ops.push(DrawOperation {
            x_segment: 0,
            y_segment: 1,
            x_offset: 50,
            y_offset: 0,
            count: 50,
        });
        list
    }

    #[test]
    fn json_shape_is_stable() {
        let value = draw_list_json(&sample_list());
        assert_eq!(
            value,
            json!([{
                "x_segment": 0,
                "y_segment": 1,
                "x_offset": 50,
                "y_offset": 0,
                "count": 50,
            }])
        );
    }

    #[test]
    fn writer_round_trip() {
        let mut buf = Vec::new();
        write_draw_list(&mut buf, &sample_list()).unwrap();
        let parsed: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, draw_list_json(&sample_list()));
    }
}
