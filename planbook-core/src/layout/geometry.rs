//! Time-to-pixel and lane-to-percent mapping.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::layout::columns::ColumnAssignment;

/// Final position, size and stacking metadata for one rendered segment.
///
/// `top` and `height` are pixels on the day grid; `left_pct` and
/// `width_pct` are percentages of the day column width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub top: f32,
    pub height: f32,
    pub left_pct: f32,
    pub width_pct: f32,
    pub column: usize,
    pub total_columns: usize,
    /// Later lanes paint above earlier ones.
    pub z_index: i32,
}

/// Horizontal placement for a lane: `(left_pct, width_pct)`.
///
/// A single lane gets the full column minus margins. Two lanes split at the
/// 50% mark. Wider grids (only reachable with a raised lane cap) space the
/// lanes evenly with one margin between each; at two lanes the general
/// formula and the split-at-50 table agree.
pub fn horizontal_metrics(
    column: usize,
    total_columns: usize,
    config: &LayoutConfig,
) -> (f32, f32) {
    let margin = config.margin_pct;
    match total_columns {
        0 | 1 => (margin / 2.0, 100.0 - margin),
        2 => {
            let width = (100.0 - 3.0 * margin) / 2.0;
            let left = if column == 0 { margin } else { 50.0 + margin / 2.0 };
            (left, width)
        }
        lanes => {
            let width = (100.0 - (lanes as f32 + 1.0) * margin) / lanes as f32;
            let left = margin + column as f32 * (width + margin);
            (left, width)
        }
    }
}

fn minute_of_day(t: NaiveDateTime) -> f32 {
    t.time().num_seconds_from_midnight() as f32 / 60.0
}

/// Map a segment's time window and lane placement to a layout box.
///
/// Without an assignment (an item rendered outside any group, e.g. in a
/// plain list) the box spans the whole column in lane 0.
pub fn layout_box(
    start: NaiveDateTime,
    end: NaiveDateTime,
    assignment: Option<&ColumnAssignment>,
    config: &LayoutConfig,
) -> LayoutBox {
    let pixels_per_minute = config.pixels_per_minute();
    let day_start_minute = (config.day_start_hour * 60) as f32;

    let top = (minute_of_day(start) - day_start_minute) * pixels_per_minute;
    let height =
        ((minute_of_day(end) - minute_of_day(start)) * pixels_per_minute).max(config.min_height_px);

    let (column, total_columns, left_pct, width_pct) = match assignment {
        Some(a) => (a.column, a.total_columns, a.left_pct, a.width_pct),
        None => {
            let (left, width) = horizontal_metrics(0, 1, config);
            (0, 1, left, width)
        }
    };

    LayoutBox {
        top,
        height,
        left_pct,
        width_pct,
        column,
        total_columns,
        z_index: column as i32 + 1,
    }
}
