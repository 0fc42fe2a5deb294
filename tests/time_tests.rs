//! Unit tests for time parsing and period overlap detection.

use ga_timetable::error::ScheduleError;
use ga_timetable::problem::Period;
use ga_timetable::time::{format_minutes, parse_time_to_minutes, periods_overlap, DayOfWeek};

#[test]
fn test_parse_valid_times() {
    assert_eq!(parse_time_to_minutes("00:00").unwrap(), 0);
    assert_eq!(parse_time_to_minutes("07:15").unwrap(), 435);
    assert_eq!(parse_time_to_minutes("12:00").unwrap(), 720);
    assert_eq!(parse_time_to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn test_parse_ignores_seconds() {
    assert_eq!(parse_time_to_minutes("07:15:30").unwrap(), 435);
    assert_eq!(parse_time_to_minutes("08:45:00").unwrap(), 525);
}

#[test]
fn test_parse_rejects_malformed_input() {
    for text in ["", "7", "0715", "aa:bb", "12:", ":30", "1:2:3:4", "12h30"] {
        match parse_time_to_minutes(text) {
            Err(ScheduleError::InvalidTimeFormat(reported)) => assert_eq!(reported, text),
            other => panic!("expected InvalidTimeFormat for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert!(parse_time_to_minutes("24:00").is_err());
    assert!(parse_time_to_minutes("12:60").is_err());
    assert!(parse_time_to_minutes("99:99").is_err());
}

#[test]
fn test_format_minutes_round_trip() {
    for text in ["00:00", "07:15", "12:00", "23:59"] {
        let minutes = parse_time_to_minutes(text).unwrap();
        assert_eq!(format_minutes(minutes), text);
    }
}

#[test]
fn test_overlap_is_symmetric() {
    let cases = [
        (
            Period::from_minutes(DayOfWeek::Monday, 435, 525),
            Period::from_minutes(DayOfWeek::Monday, 500, 630),
        ),
        (
            Period::from_minutes(DayOfWeek::Monday, 435, 525),
            Period::from_minutes(DayOfWeek::Monday, 525, 630),
        ),
        (
            Period::from_minutes(DayOfWeek::Monday, 435, 525),
            Period::from_minutes(DayOfWeek::Tuesday, 435, 525),
        ),
        (
            Period::from_minutes(DayOfWeek::Friday, 400, 1000),
            Period::from_minutes(DayOfWeek::Friday, 500, 600),
        ),
    ];

    for (a, b) in &cases {
        assert_eq!(periods_overlap(a, b), periods_overlap(b, a));
    }
}

#[test]
fn test_touching_boundaries_do_not_overlap() {
    // Half-open intervals: ending at 10:00 and starting at 10:00 is fine.
    let first = Period::from_minutes(DayOfWeek::Monday, 525, 600);
    let second = Period::from_minutes(DayOfWeek::Monday, 600, 690);

    assert!(!periods_overlap(&first, &second));
    assert!(!periods_overlap(&second, &first));
}

#[test]
fn test_overlap_on_same_day() {
    let a = Period::from_minutes(DayOfWeek::Wednesday, 435, 525);
    let b = Period::from_minutes(DayOfWeek::Wednesday, 480, 630);
    assert!(periods_overlap(&a, &b));

    // Containment counts as overlap.
    let outer = Period::from_minutes(DayOfWeek::Wednesday, 400, 700);
    let inner = Period::from_minutes(DayOfWeek::Wednesday, 500, 550);
    assert!(periods_overlap(&outer, &inner));
}

#[test]
fn test_no_overlap_across_days() {
    let monday = Period::from_minutes(DayOfWeek::Monday, 435, 525);
    let tuesday = Period::from_minutes(DayOfWeek::Tuesday, 435, 525);
    assert!(!periods_overlap(&monday, &tuesday));
}

#[test]
fn test_period_new_parses_and_validates() {
    let period = Period::new(DayOfWeek::Monday, "07:15", "08:45").unwrap();
    assert_eq!(period.start, 435);
    assert_eq!(period.end, 525);
    assert_eq!(period.duration_minutes(), 90);

    // Start must precede end.
    assert!(Period::new(DayOfWeek::Monday, "09:00", "08:00").is_err());
    assert!(Period::new(DayOfWeek::Monday, "09:00", "09:00").is_err());
}
