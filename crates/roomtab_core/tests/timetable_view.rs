use roomtab_core::db::open_db_in_memory;
use roomtab_core::{
    RequestContext, ScheduleBatch, ScheduleDraft, ScheduleService, ScheduleServiceError,
    SqliteScheduleRepository,
};
use rusqlite::Connection;

fn entry(day: &str, start: &str, subject: &str) -> ScheduleDraft {
    ScheduleDraft {
        day: day.to_string(),
        start: start.to_string(),
        end: "later".to_string(),
        subject: subject.to_string(),
        section: "1-A".to_string(),
        teacher: "Reyes".to_string(),
    }
}

fn seed(conn: &Connection, room_tag: &str, entries: Vec<ScheduleDraft>) {
    let service = ScheduleService::new(SqliteScheduleRepository::try_new(conn).unwrap());
    service
        .bulk_create(
            &RequestContext::anonymous(),
            &[ScheduleBatch {
                room_tag: room_tag.to_string(),
                entries,
            }],
        )
        .unwrap();
}

fn subjects(service: &ScheduleService<SqliteScheduleRepository<'_>>, tag: &str) -> Vec<String> {
    service
        .room_timetable(&RequestContext::anonymous(), tag)
        .unwrap()
        .into_iter()
        .map(|schedule| schedule.subject)
        .collect()
}

#[test]
fn timetable_orders_mixed_format_entries_monday_morning_first() {
    let conn = open_db_in_memory().unwrap();
    seed(
        &conn,
        "CR-101",
        vec![
            entry("Fri", "1:00 PM", "History"),
            entry("mon", "09:00", "Math"),
            entry("Monday", "8:30 AM", "Homeroom"),
        ],
    );

    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());
    assert_eq!(subjects(&service, "CR-101"), vec!["Homeroom", "Math", "History"]);
}

#[test]
fn unknown_day_entries_sort_after_every_recognized_day() {
    let conn = open_db_in_memory().unwrap();
    seed(
        &conn,
        "CR-101",
        vec![
            entry("xyz", "6:00 AM", "Mystery"),
            entry("Sunday", "11:30 PM", "Late"),
            entry("tue", "7:00 AM", "Early"),
        ],
    );

    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());
    assert_eq!(subjects(&service, "CR-101"), vec!["Early", "Late", "Mystery"]);
}

#[test]
fn malformed_time_degrades_locally_without_failing_the_listing() {
    let conn = open_db_in_memory().unwrap();
    seed(
        &conn,
        "CR-101",
        vec![
            entry("wed", "not-a-time", "Broken"),
            entry("wed", "11:45 PM", "LastReal"),
            entry("thu", "6:00 AM", "NextDay"),
        ],
    );

    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());
    assert_eq!(
        subjects(&service, "CR-101"),
        vec!["LastReal", "Broken", "NextDay"]
    );
}

#[test]
fn timetable_for_unmatched_tag_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, "CR-101", vec![entry("mon", "8:00 AM", "Math")]);

    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());
    let err = service
        .room_timetable(&RequestContext::anonymous(), "LAB-1")
        .unwrap_err();
    match err {
        ScheduleServiceError::TimetableNotFound(tag) => assert_eq!(tag, "LAB-1"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn tag_matching_is_exact_string_with_no_normalization() {
    let conn = open_db_in_memory().unwrap();
    seed(&conn, "CR-101", vec![entry("mon", "8:00 AM", "Math")]);

    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());
    let err = service
        .room_timetable(&RequestContext::anonymous(), "cr-101")
        .unwrap_err();
    assert!(matches!(err, ScheduleServiceError::TimetableNotFound(_)));
}

#[test]
fn timetable_serves_dangling_room_tags() {
    let conn = open_db_in_memory().unwrap();
    // No room row exists for this tag anywhere in the test.
    seed(&conn, "GHOST-9", vec![entry("sat", "10:00", "Orphan")]);

    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());
    assert_eq!(subjects(&service, "GHOST-9"), vec!["Orphan"]);
}

#[test]
fn repeated_reads_return_identical_orderings() {
    let conn = open_db_in_memory().unwrap();
    seed(
        &conn,
        "CR-101",
        vec![
            entry("sat", "10:00", "A"),
            entry("tue", "", "B"),
            entry("tue", "7:15 AM", "C"),
            entry("TUESDAY", "7:15AM", "D"),
        ],
    );

    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());
    let first = subjects(&service, "CR-101");
    let second = subjects(&service, "CR-101");
    assert_eq!(first, second);
    // C and D share one key; insertion order breaks the tie.
    assert_eq!(first, vec!["C", "D", "B", "A"]);
}
