//! Scheduled item types.
//!
//! A `ScheduledItem` is a calendar entry exactly as the data layer hands it
//! over: times may be missing or inverted, because plans are routinely saved
//! half-filled. `TimeSpan` is the sanitized concrete interval the layout
//! engine computes with.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_DURATION_MINUTES;

/// What kind of entry an item is. Affects color and priority in
/// presentation only; the layout engine treats both identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Something the user intends to do.
    Plan,
    /// Something the user logged as actually done.
    Record,
}

/// A scheduled calendar item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledItem {
    pub id: String,
    pub title: String,
    /// Wall-clock start in the display timezone. Absent for
    /// partially-specified plans.
    pub start: Option<NaiveDateTime>,
    /// Wall-clock end. Absent for partially-specified plans.
    pub end: Option<NaiveDateTime>,
    pub kind: ItemKind,
    /// Drafts are in-progress entries (e.g. mid-drag); rendered dimmed.
    pub is_draft: bool,
}

impl ScheduledItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Self {
        ScheduledItem {
            id: id.into(),
            title: title.into(),
            start,
            end,
            kind: ItemKind::Plan,
            is_draft: false,
        }
    }

    /// Create a draft item with a generated id.
    pub fn draft(
        title: impl Into<String>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Self {
        ScheduledItem {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            start,
            end,
            kind: ItemKind::Plan,
            is_draft: true,
        }
    }

    /// Resolve the item's possibly-missing times into a concrete interval:
    /// - an absent start becomes `now`
    /// - an absent end becomes start + 1 hour
    /// - an end before its start also becomes start + 1 hour
    pub fn resolve_span(&self, now: NaiveDateTime) -> TimeSpan {
        let start = self.start.unwrap_or(now);
        let end = match self.end {
            Some(end) if end >= start => end,
            _ => start + Duration::minutes(DEFAULT_DURATION_MINUTES),
        };
        TimeSpan { start, end }
    }
}

/// A concrete half-open `[start, end)` interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSpan {
    /// Half-open interval overlap. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
