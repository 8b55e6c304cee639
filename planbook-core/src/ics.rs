//! ICS import using the icalendar crate's parser.
//!
//! Maps a VEVENT onto a `ScheduledItem`. Only the fields the layout engine
//! cares about are read; timestamps are converted to local wall-clock time
//! because layout is a wall-clock computation.

use chrono::{Local, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use icalendar::{
    parser::{read_calendar, unfold},
    CalendarDateTime, DatePerhapsTime,
};

use crate::item::{ItemKind, ScheduledItem};

/// Parse ICS content into a `ScheduledItem`.
///
/// UID is required. DTSTART/DTEND are optional, since the layout engine
/// substitutes defaults for missing times, so a half-filled event still
/// imports. `STATUS:TENTATIVE` marks a draft; `X-PLANBOOK-KIND:RECORD`
/// selects the record kind.
pub fn parse_item(content: &str) -> Option<ScheduledItem> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).ok()?;
    let vevent = calendar.components.iter().find(|c| c.name == "VEVENT")?;

    let id = vevent.find_prop("UID")?.val.to_string();
    let title = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_else(|| "(no title)".to_string());

    let start = vevent
        .find_prop("DTSTART")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(to_local_naive);
    let end = vevent
        .find_prop("DTEND")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(to_local_naive);

    let is_draft = vevent
        .find_prop("STATUS")
        .map(|p| p.val.as_ref() == "TENTATIVE")
        .unwrap_or(false);

    let kind = vevent
        .find_prop("X-PLANBOOK-KIND")
        .map(|p| {
            if p.val.as_ref() == "RECORD" {
                ItemKind::Record
            } else {
                ItemKind::Plan
            }
        })
        .unwrap_or(ItemKind::Plan);

    Some(ScheduledItem { id, title, start, end, kind, is_draft })
}

/// Convert an ICS timestamp to local wall-clock time.
///
/// All-day dates map to midnight (DTEND of an all-day event is already
/// exclusive, so a midnight end spans the right days); floating times pass
/// through unchanged; UTC and zoned times go through the local timezone.
fn to_local_naive(dpt: DatePerhapsTime) -> NaiveDateTime {
    match dpt {
        DatePerhapsTime::Date(date) => date.and_hms_opt(0, 0, 0).unwrap(),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => dt.with_timezone(&Local).naive_local(),
            CalendarDateTime::Floating(naive) => naive,
            CalendarDateTime::WithTimezone { date_time, tzid } => match tzid.parse::<Tz>() {
                Ok(tz) => match tz.from_local_datetime(&date_time).earliest() {
                    Some(dt) => dt.with_timezone(&Local).naive_local(),
                    None => date_time,
                },
                // Unknown TZID: treat the stamp as floating
                Err(_) => date_time,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn wrap_vevent(body: &str) -> String {
        format!(
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\n{}\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
            body
        )
    }

    #[test]
    fn parses_a_floating_event() {
        let ics = wrap_vevent(
            "UID:plan-1@planbook\r\nSUMMARY:Dentist\r\nDTSTART:20250320T150000\r\nDTEND:20250320T160000",
        );
        let item = parse_item(&ics).expect("should parse");

        assert_eq!(item.id, "plan-1@planbook");
        assert_eq!(item.title, "Dentist");
        assert_eq!(
            item.start,
            Some(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap().and_hms_opt(15, 0, 0).unwrap())
        );
        assert_eq!(
            item.end,
            Some(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap().and_hms_opt(16, 0, 0).unwrap())
        );
        assert_eq!(item.kind, ItemKind::Plan);
        assert!(!item.is_draft);
    }

    #[test]
    fn all_day_dates_map_to_midnight() {
        let ics = wrap_vevent(
            "UID:allday@planbook\r\nSUMMARY:Offsite\r\nDTSTART;VALUE=DATE:20250320\r\nDTEND;VALUE=DATE:20250322",
        );
        let item = parse_item(&ics).expect("should parse");

        assert_eq!(
            item.start,
            Some(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap().and_hms_opt(0, 0, 0).unwrap())
        );
        assert_eq!(
            item.end,
            Some(NaiveDate::from_ymd_opt(2025, 3, 22).unwrap().and_hms_opt(0, 0, 0).unwrap())
        );
    }

    #[test]
    fn missing_times_stay_absent() {
        let ics = wrap_vevent("UID:loose@planbook\r\nSUMMARY:Sometime");
        let item = parse_item(&ics).expect("should parse");
        assert!(item.start.is_none());
        assert!(item.end.is_none());
    }

    #[test]
    fn missing_uid_is_rejected() {
        let ics = wrap_vevent("SUMMARY:No id\r\nDTSTART:20250320T150000");
        assert!(parse_item(&ics).is_none());
    }

    #[test]
    fn missing_summary_gets_a_placeholder() {
        let ics = wrap_vevent("UID:untitled@planbook\r\nDTSTART:20250320T150000");
        let item = parse_item(&ics).expect("should parse");
        assert_eq!(item.title, "(no title)");
    }

    #[test]
    fn tentative_status_marks_a_draft() {
        let ics = wrap_vevent("UID:maybe@planbook\r\nSUMMARY:Maybe\r\nSTATUS:TENTATIVE");
        assert!(parse_item(&ics).unwrap().is_draft);

        let ics = wrap_vevent("UID:sure@planbook\r\nSUMMARY:Sure\r\nSTATUS:CONFIRMED");
        assert!(!parse_item(&ics).unwrap().is_draft);
    }

    #[test]
    fn record_kind_comes_from_the_x_property() {
        let ics = wrap_vevent("UID:done@planbook\r\nSUMMARY:Run\r\nX-PLANBOOK-KIND:RECORD");
        assert_eq!(parse_item(&ics).unwrap().kind, ItemKind::Record);
    }
}
