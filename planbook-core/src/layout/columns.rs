//! Greedy lane assignment within an overlap group.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::item::TimeSpan;
use crate::layout::geometry::horizontal_metrics;
use crate::layout::group::OverlapGroup;
use crate::layout::segment::DaySegment;
use crate::layout::sort::sort_segments;

/// Lane placement for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    /// 0-based lane index.
    pub column: usize,
    /// Lanes spanned by this segment's own time window, not the group's
    /// maximum, so a segment that is momentarily alone reclaims width.
    pub total_columns: usize,
    pub width_pct: f32,
    pub left_pct: f32,
}

/// An overlap group with lanes assigned.
///
/// A new value: the input `OverlapGroup` is never written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedGroup {
    pub segments: Vec<(DaySegment, ColumnAssignment)>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Lanes actually used by this group, capped at the configured maximum.
    pub max_columns: usize,
}

/// Assign each segment of a group to a lane.
///
/// Segments are taken in chronological order. Lanes are scanned low-to-high
/// and the first free one (previous occupant ended at or before this start)
/// wins; when every lane is busy the segment is forced into the last lane.
/// The cap is hard, and excess collisions stack there instead of widening
/// the grid.
pub fn assign_columns(group: &OverlapGroup, config: &LayoutConfig) -> PackedGroup {
    let max_columns = config.max_columns.max(1);

    let mut sorted = group.segments.to_vec();
    sort_segments(&mut sorted);
    let spans: Vec<TimeSpan> = sorted.iter().map(|s| s.span()).collect();

    // column_end[lane] = end of the latest segment placed in that lane
    let mut column_end: Vec<Option<NaiveDateTime>> = vec![None; max_columns];
    let mut lanes: Vec<usize> = Vec::with_capacity(sorted.len());

    for span in &spans {
        let free = (0..max_columns)
            .find(|&lane| column_end[lane].map_or(true, |end| end <= span.start));
        let lane = free.unwrap_or(max_columns - 1);
        // A forced lane's envelope only ever extends
        let end = column_end[lane].map_or(span.end, |end| end.max(span.end));
        column_end[lane] = Some(end);
        lanes.push(lane);
    }

    let highest_lane = lanes.iter().copied().max().unwrap_or(0);

    let assignments: Vec<ColumnAssignment> = spans
        .iter()
        .enumerate()
        .map(|(index, span)| {
            let widest_lane = spans
                .iter()
                .zip(&lanes)
                .filter(|(other, _)| other.overlaps(span))
                .map(|(_, &lane)| lane)
                .max()
                .unwrap_or(0)
                .max(lanes[index]);
            let total_columns = (widest_lane + 1).min(max_columns);
            let (left_pct, width_pct) = horizontal_metrics(lanes[index], total_columns, config);
            ColumnAssignment { column: lanes[index], total_columns, width_pct, left_pct }
        })
        .collect();

    PackedGroup {
        segments: sorted.into_iter().zip(assignments).collect(),
        start: group.start,
        end: group.end,
        max_columns: (highest_lane + 1).min(max_columns),
    }
}
