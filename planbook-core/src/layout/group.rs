//! Interval overlap clustering.
//!
//! Partitions one day's segments into transitively-connected overlap
//! clusters. Each cluster is laid out independently of the others.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::item::TimeSpan;
use crate::layout::segment::DaySegment;
use crate::layout::sort::sort_segments;

/// A transitively time-overlapping cluster of segments on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapGroup {
    pub segments: Vec<DaySegment>,
    /// Earliest start over members.
    pub start: NaiveDateTime,
    /// Latest end over members.
    pub end: NaiveDateTime,
}

impl OverlapGroup {
    fn singleton(segment: DaySegment) -> Self {
        OverlapGroup {
            start: segment.start,
            end: segment.end,
            segments: vec![segment],
        }
    }

    fn envelope(&self) -> TimeSpan {
        TimeSpan { start: self.start, end: self.end }
    }

    fn push(&mut self, segment: DaySegment) {
        self.start = self.start.min(segment.start);
        self.end = self.end.max(segment.end);
        self.segments.push(segment);
    }

    fn absorb(&mut self, other: OverlapGroup) {
        self.start = self.start.min(other.start);
        self.end = self.end.max(other.end);
        self.segments.extend(other.segments);
    }
}

/// Partition segments into overlap-connected groups.
///
/// Segments are sorted chronologically first, so for a fixed input the
/// partition and its ordering are always identical; nothing depends on
/// incidental iteration order.
pub fn group_overlapping(segments: &[DaySegment]) -> Vec<OverlapGroup> {
    let mut sorted = segments.to_vec();
    sort_segments(&mut sorted);
    cluster(sorted)
}

/// Core clustering loop. Each segment joins the first open cluster whose
/// envelope it overlaps; that cluster then absorbs every other cluster the
/// segment also overlaps. Non-overlapping segments open new clusters.
/// Correct for any input order, sorted or not.
fn cluster(segments: Vec<DaySegment>) -> Vec<OverlapGroup> {
    let mut groups: Vec<OverlapGroup> = Vec::new();

    for segment in segments {
        let span = segment.span();
        let matching: Vec<usize> = groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.envelope().overlaps(&span))
            .map(|(index, _)| index)
            .collect();

        match matching.split_first() {
            None => groups.push(OverlapGroup::singleton(segment)),
            Some((&first, rest)) => {
                // Remove back-to-front so the earlier indices stay valid
                for &index in rest.iter().rev() {
                    let absorbed = groups.remove(index);
                    groups[first].absorb(absorbed);
                }
                groups[first].push(segment);
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ScheduledItem;
    use crate::layout::segment::segment_item;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn seg(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> DaySegment {
        let item = ScheduledItem::new(id, id, Some(start), Some(end));
        segment_item(&item, true, start).remove(0)
    }

    fn ids(group: &OverlapGroup) -> Vec<&str> {
        group.segments.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn disjoint_segments_get_separate_groups() {
        let segments = vec![
            seg("a", at(9, 0), at(10, 0)),
            seg("b", at(11, 0), at(12, 0)),
        ];
        let groups = group_overlapping(&segments);
        assert_eq!(groups.len(), 2);
        assert_eq!(ids(&groups[0]), vec!["a"]);
        assert_eq!(ids(&groups[1]), vec!["b"]);
    }

    #[test]
    fn overlapping_pair_forms_one_group() {
        let segments = vec![
            seg("x", at(9, 0), at(10, 0)),
            seg("y", at(9, 30), at(10, 30)),
        ];
        let groups = group_overlapping(&segments);
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec!["x", "y"]);
        assert_eq!(groups[0].start, at(9, 0));
        assert_eq!(groups[0].end, at(10, 30));
    }

    #[test]
    fn transitive_chain_is_a_single_group() {
        // a-b overlap and b-c overlap, but a-c do not: still one cluster
        let segments = vec![
            seg("a", at(9, 0), at(10, 0)),
            seg("c", at(10, 30), at(11, 30)),
            seg("b", at(9, 45), at(10, 45)),
        ];
        let groups = group_overlapping(&segments);
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn touching_endpoints_do_not_group() {
        let segments = vec![
            seg("a", at(9, 0), at(10, 0)),
            seg("b", at(10, 0), at(11, 0)),
        ];
        assert_eq!(group_overlapping(&segments).len(), 2);
    }

    #[test]
    fn partition_is_deterministic() {
        let segments = vec![
            seg("d", at(13, 0), at(14, 0)),
            seg("a", at(9, 0), at(10, 30)),
            seg("c", at(10, 0), at(11, 0)),
            seg("b", at(9, 15), at(9, 45)),
        ];
        let first = group_overlapping(&segments);
        let second = group_overlapping(&segments);
        assert_eq!(first, second, "same input must always give the same partition");
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn bridging_segment_merges_existing_clusters() {
        // Unsorted input straight into the clustering loop: the bridge
        // arrives last and must fuse the two open clusters into one.
        let segments = vec![
            seg("early", at(9, 0), at(9, 30)),
            seg("late", at(10, 0), at(11, 0)),
            seg("bridge", at(9, 15), at(10, 15)),
        ];
        let groups = cluster(segments);
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec!["early", "late", "bridge"]);
        assert_eq!(groups[0].start, at(9, 0));
        assert_eq!(groups[0].end, at(11, 0));
    }
}
