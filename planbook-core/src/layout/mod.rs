//! The layout pipeline.
//!
//! raw items → week-boundary segmenter → per-day segment lists → overlap
//! grouper → column assigner → geometry mapper → responsive reflow.
//!
//! The whole pipeline is a pure, synchronous function of its inputs:
//! identical inputs always yield identical output, and nothing survives
//! between invocations. Derived values are returned as new objects rather
//! than written back onto caller-owned data. Callers that want to skip
//! recomputation memoize over a `Viewport` plus the item list.

pub mod columns;
pub mod geometry;
pub mod group;
pub mod reflow;
pub mod segment;
pub mod sort;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::item::ScheduledItem;
use columns::assign_columns;
use geometry::{layout_box, LayoutBox};
use group::group_overlapping;
use reflow::reflow_box;
use segment::{is_weekend, segment_items, DaySegment};

/// The view state a layout is computed for, and the natural memoization
/// key for callers that cache layouts across re-renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Calendar days currently on screen.
    pub dates: Vec<NaiveDate>,
    pub show_weekends: bool,
    /// Actual rendering container width in pixels; `None` skips reflow.
    pub container_width: Option<f32>,
    /// Reference instant for items with a missing start. Threaded in
    /// explicitly so a fixed viewport always produces the same layout.
    pub now: NaiveDateTime,
}

/// One segment with its final geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub segment: DaySegment,
    pub rect: LayoutBox,
}

/// Computed layout for one visible day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub items: Vec<PlacedItem>,
}

/// Lay out items for every visible day.
///
/// Hidden weekend dates yield no layout at all. Output order is
/// deterministic: groups in order of their earliest segment, segments
/// chronological within each group.
pub fn layout_days(
    items: &[ScheduledItem],
    viewport: &Viewport,
    config: &LayoutConfig,
) -> Vec<DayLayout> {
    let segments = segment_items(items, viewport.show_weekends, viewport.now);

    viewport
        .dates
        .iter()
        .filter(|&&date| viewport.show_weekends || !is_weekend(date))
        .map(|&date| {
            let day_segments: Vec<DaySegment> =
                segments.iter().filter(|s| s.date == date).cloned().collect();
            lay_out_one_day(date, &day_segments, viewport.container_width, config)
        })
        .collect()
}

/// Lay out items for a single day.
pub fn layout_day(
    items: &[ScheduledItem],
    date: NaiveDate,
    show_weekends: bool,
    container_width: Option<f32>,
    config: &LayoutConfig,
    now: NaiveDateTime,
) -> DayLayout {
    let viewport = Viewport { dates: vec![date], show_weekends, container_width, now };
    layout_days(items, &viewport, config)
        .into_iter()
        .next()
        .unwrap_or(DayLayout { date, items: Vec::new() })
}

fn lay_out_one_day(
    date: NaiveDate,
    segments: &[DaySegment],
    container_width: Option<f32>,
    config: &LayoutConfig,
) -> DayLayout {
    let mut items = Vec::new();

    for group in group_overlapping(segments) {
        let packed = assign_columns(&group, config);
        for (segment, assignment) in packed.segments {
            let mut rect = layout_box(segment.start, segment.end, Some(&assignment), config);
            if let Some(width) = container_width {
                rect = reflow_box(&rect, width, config);
            }
            items.push(PlacedItem { segment, rect });
        }
    }

    DayLayout { date, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::segment::SegmentKind;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        date(day).and_hms_opt(hour, min, 0).unwrap()
    }

    fn item(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> ScheduledItem {
        ScheduledItem::new(id, id, Some(start), Some(end))
    }

    fn viewport(days: &[u32]) -> Viewport {
        Viewport {
            dates: days.iter().map(|&d| date(d)).collect(),
            show_weekends: true,
            container_width: None,
            now: at(20, 12, 0),
        }
    }

    fn find<'a>(layout: &'a DayLayout, id: &str) -> &'a PlacedItem {
        layout.items.iter().find(|p| p.segment.item.id == id).expect("item placed")
    }

    #[test]
    fn overlapping_pair_shares_the_day_half_and_half() {
        let items = vec![
            item("x", at(20, 9, 0), at(20, 10, 0)),
            item("y", at(20, 9, 30), at(20, 10, 30)),
        ];
        let layout = layout_day(&items, date(20), true, None, &LayoutConfig::default(), at(20, 0, 0));

        assert_eq!(layout.items.len(), 2);
        let x = find(&layout, "x");
        let y = find(&layout, "y");
        assert_eq!(x.rect.column, 0);
        assert_eq!(y.rect.column, 1);
        assert_eq!(x.rect.width_pct, 42.5);
        assert_eq!(y.rect.width_pct, 42.5);
        assert_eq!(x.rect.left_pct, 5.0);
        assert_eq!(y.rect.left_pct, 52.5);
        assert!(y.rect.z_index > x.rect.z_index);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let items = vec![
            item("a", at(20, 9, 0), at(20, 10, 0)),
            item("b", at(20, 9, 30), at(20, 10, 30)),
            item("c", at(20, 14, 0), at(20, 15, 0)),
            ScheduledItem::new("loose", "Loose", None, None),
        ];
        let view = viewport(&[20]);
        let config = LayoutConfig::default();

        let first = layout_days(&items, &view, &config);
        let second = layout_days(&items, &view, &config);
        assert_eq!(first, second, "same inputs must give bit-identical layouts");
    }

    #[test]
    fn absent_start_still_produces_a_box() {
        let items = vec![ScheduledItem::new("loose", "Loose", None, None)];
        let layout =
            layout_day(&items, date(20), true, None, &LayoutConfig::default(), at(20, 14, 0));

        assert_eq!(layout.items.len(), 1);
        let placed = &layout.items[0];
        assert_eq!(placed.segment.start, at(20, 14, 0));
        assert_eq!(placed.rect.height, 60.0, "default duration is one hour");
        assert_eq!(placed.rect.top, 840.0);
    }

    #[test]
    fn multi_day_item_appears_on_each_visible_day() {
        let items = vec![item("trip", at(19, 18, 0), at(21, 9, 0))];
        let layouts = layout_days(&items, &viewport(&[19, 20, 21]), &LayoutConfig::default());

        assert_eq!(layouts.len(), 3);
        assert_eq!(find(&layouts[0], "trip").segment.kind, SegmentKind::Start);
        assert_eq!(find(&layouts[1], "trip").segment.kind, SegmentKind::Middle);
        assert_eq!(find(&layouts[2], "trip").segment.kind, SegmentKind::End);
    }

    #[test]
    fn hidden_weekend_dates_are_skipped_entirely() {
        let items = vec![item("sat", at(22, 9, 0), at(22, 10, 0))];
        let mut view = viewport(&[21, 22, 23, 24]);
        view.show_weekends = false;

        let layouts = layout_days(&items, &view, &LayoutConfig::default());
        let dates: Vec<NaiveDate> = layouts.iter().map(|l| l.date).collect();
        assert_eq!(dates, vec![date(21), date(24)], "2025-03-22/23 are a weekend");
    }

    #[test]
    fn every_box_stays_inside_its_column() {
        let items = vec![
            item("a", at(20, 9, 0), at(20, 10, 30)),
            item("b", at(20, 9, 15), at(20, 9, 45)),
            item("c", at(20, 9, 30), at(20, 11, 0)),
            item("d", at(20, 10, 45), at(20, 12, 0)),
            item("e", at(20, 13, 0), at(20, 13, 30)),
        ];
        let layout = layout_day(&items, date(20), true, None, &LayoutConfig::default(), at(20, 0, 0));

        for placed in &layout.items {
            let rect = &placed.rect;
            assert!(
                rect.left_pct + rect.width_pct <= 100.0 + f32::EPSILON,
                "{} overflows: left {} width {}",
                placed.segment.id,
                rect.left_pct,
                rect.width_pct
            );
            assert!(rect.total_columns >= 1);
            assert!(rect.total_columns <= LayoutConfig::default().max_columns);
        }
    }

    #[test]
    fn container_width_triggers_reflow() {
        let config = LayoutConfig { max_columns: 4, ..Default::default() };
        let items: Vec<ScheduledItem> = (0..4)
            .map(|i| item(&format!("s{}", i), at(20, 9, 0), at(20, 10, 0)))
            .collect();

        let wide = layout_day(&items, date(20), true, Some(1200.0), &config, at(20, 0, 0));
        let narrow = layout_day(&items, date(20), true, Some(320.0), &config, at(20, 0, 0));

        assert!(wide.items.iter().any(|p| p.rect.total_columns == 4));
        assert!(narrow.items.iter().all(|p| p.rect.total_columns <= 2));
    }

    #[test]
    fn layout_day_on_a_hidden_weekend_is_empty() {
        let items = vec![item("sat", at(22, 9, 0), at(22, 10, 0))];
        let layout =
            layout_day(&items, date(22), false, None, &LayoutConfig::default(), at(20, 0, 0));
        assert!(layout.items.is_empty());
        assert_eq!(layout.date, date(22));
    }
}
