//! Week-boundary segmentation of multi-day items.
//!
//! The day grid renders one column per calendar day, so an item spanning
//! several days is split into one segment per day before overlap grouping.
//! Hidden weekend days emit no segment at all: they are dropped, not
//! merged into a neighbor.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::item::{ScheduledItem, TimeSpan};

/// Where a segment sits within its item's full span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// The item fits within a single calendar day.
    Full,
    /// First day of a multi-day item.
    Start,
    /// Interior day of a multi-day item.
    Middle,
    /// Last day of a multi-day item.
    End,
}

/// The portion of an item confined to one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySegment {
    /// Stable id for render diffing: the item's own id for single-day
    /// items, `{item_id}-segment-{date}` for multi-day splits.
    pub id: String,
    pub item: ScheduledItem,
    pub date: NaiveDate,
    /// Clipped to this calendar day.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: SegmentKind,
    /// True when this segment covers only part of the item's span.
    pub is_partial: bool,
    /// Duration of the full (unclipped) span, in minutes.
    pub original_minutes: i64,
}

impl DaySegment {
    pub fn span(&self) -> TimeSpan {
        TimeSpan { start: self.start, end: self.end }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn day_close(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap())
}

/// Split one item into per-day segments.
///
/// Single-day items bypass segmentation: one `Full` segment carrying the
/// item's own id. Multi-day items get one segment per emitted day: the
/// real start on the item's first calendar day, the real end on its last,
/// and full `[00:00, 23:59:59]` windows in between. Kinds follow the
/// calendar day, so hiding the start day never relabels an interior one.
/// With `show_weekends == false`, Saturday and Sunday emit nothing.
pub fn segment_item(
    item: &ScheduledItem,
    show_weekends: bool,
    now: NaiveDateTime,
) -> Vec<DaySegment> {
    let span = item.resolve_span(now);
    let first_day = span.start.date();
    let last_day = span.end.date();
    let original_minutes = span.duration_minutes();

    if first_day == last_day {
        return vec![DaySegment {
            id: item.id.clone(),
            item: item.clone(),
            date: first_day,
            start: span.start,
            end: span.end,
            kind: SegmentKind::Full,
            is_partial: false,
            original_minutes,
        }];
    }

    let mut segments = Vec::new();
    let mut date = first_day;
    while date <= last_day {
        if !show_weekends && is_weekend(date) {
            date = date + Duration::days(1);
            continue;
        }

        let (kind, start, end) = if date == first_day {
            (SegmentKind::Start, span.start, day_close(date))
        } else if date == last_day {
            (SegmentKind::End, date.and_time(NaiveTime::MIN), span.end)
        } else {
            (SegmentKind::Middle, date.and_time(NaiveTime::MIN), day_close(date))
        };

        segments.push(DaySegment {
            id: format!("{}-segment-{}", item.id, date.format("%Y-%m-%d")),
            item: item.clone(),
            date,
            start,
            end,
            kind,
            is_partial: true,
            original_minutes,
        });

        date += Duration::days(1);
    }

    segments
}

/// Segment every item in a slice.
pub fn segment_items(
    items: &[ScheduledItem],
    show_weekends: bool,
    now: NaiveDateTime,
) -> Vec<DaySegment> {
    items
        .iter()
        .flat_map(|item| segment_item(item, show_weekends, now))
        .collect()
}
