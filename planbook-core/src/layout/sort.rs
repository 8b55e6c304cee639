//! Stable chronological ordering.

use crate::item::ScheduledItem;
use crate::layout::segment::DaySegment;

/// Sort items ascending by start time, in place.
///
/// Items without a start sort first (`None < Some`); that is the one
/// policy for absent starts, everywhere. Ties keep their original order;
/// there is no secondary key.
pub fn sort_items(items: &mut [ScheduledItem]) {
    items.sort_by_key(|item| item.start);
}

/// Sort day segments ascending by their (clipped) start, in place.
pub fn sort_segments(segments: &mut [DaySegment]) {
    segments.sort_by_key(|segment| segment.start);
}
