use roomtab_core::db::open_db_in_memory;
use roomtab_core::{
    RepoError, RequestContext, ScheduleBatch, ScheduleDraft, ScheduleRepository, ScheduleService,
    ScheduleServiceError, SqliteScheduleRepository,
};

fn draft(day: &str, start: &str, subject: &str) -> ScheduleDraft {
    ScheduleDraft {
        day: day.to_string(),
        start: start.to_string(),
        end: "10:00 AM".to_string(),
        subject: subject.to_string(),
        section: "1-A".to_string(),
        teacher: "Reyes".to_string(),
    }
}

fn batch(room_tag: &str, entries: Vec<ScheduleDraft>) -> ScheduleBatch {
    ScheduleBatch {
        room_tag: room_tag.to_string(),
        entries,
    }
}

#[test]
fn bulk_create_tags_every_entry_with_its_batch_key_in_input_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScheduleRepository::try_new(&conn).unwrap();

    let created = repo
        .insert_schedules(&[
            batch(
                "CR-101",
                vec![draft("mon", "8:00 AM", "Math"), draft("tue", "9:00 AM", "Physics")],
            ),
            batch("LAB-1", vec![draft("wed", "10:00 AM", "Chemistry")]),
        ])
        .unwrap();

    assert_eq!(created.len(), 3);
    assert_eq!(created[0].subject, "Math");
    assert_eq!(created[0].room_tag, "CR-101");
    assert_eq!(created[1].subject, "Physics");
    assert_eq!(created[1].room_tag, "CR-101");
    assert_eq!(created[2].subject, "Chemistry");
    assert_eq!(created[2].room_tag, "LAB-1");
    assert!(created[0].id < created[1].id && created[1].id < created[2].id);
}

#[test]
fn bulk_create_with_blank_entry_writes_no_rows_at_all() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScheduleRepository::try_new(&conn).unwrap();

    let mut bad = draft("tue", "9:00 AM", "Physics");
    bad.teacher = "  ".to_string();

    let err = repo
        .insert_schedules(&[
            batch("CR-101", vec![draft("mon", "8:00 AM", "Math")]),
            batch("LAB-1", vec![bad]),
        ])
        .unwrap_err();
    match err {
        RepoError::Validation(blank) => assert_eq!(blank.field, "teacher"),
        other => panic!("unexpected error: {other}"),
    }

    assert!(repo.list_schedules().unwrap().is_empty());
}

#[test]
fn bulk_create_accepts_room_tags_with_no_matching_room() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScheduleRepository::try_new(&conn).unwrap();

    let created = repo
        .insert_schedules(&[batch("GHOST-9", vec![draft("fri", "1:00 PM", "History")])])
        .unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].room_tag, "GHOST-9");
}

#[test]
fn replace_overwrites_all_six_fields_and_keeps_room_tag() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScheduleRepository::try_new(&conn).unwrap();

    let created = repo
        .insert_schedules(&[batch("CR-101", vec![draft("mon", "8:00 AM", "Math")])])
        .unwrap();
    let id = created[0].id;

    let replacement = ScheduleDraft {
        day: "Friday".to_string(),
        start: "14:30".to_string(),
        end: "16:00".to_string(),
        subject: "Statistics".to_string(),
        section: "2-B".to_string(),
        teacher: "Santos".to_string(),
    };
    let updated = repo.replace_schedule(id, &replacement).unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.day, "Friday");
    assert_eq!(updated.start, "14:30");
    assert_eq!(updated.end, "16:00");
    assert_eq!(updated.subject, "Statistics");
    assert_eq!(updated.section, "2-B");
    assert_eq!(updated.teacher, "Santos");
    assert_eq!(updated.room_tag, "CR-101");
}

#[test]
fn replace_with_blank_field_leaves_row_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScheduleRepository::try_new(&conn).unwrap();

    let created = repo
        .insert_schedules(&[batch("CR-101", vec![draft("mon", "8:00 AM", "Math")])])
        .unwrap();
    let id = created[0].id;

    let mut invalid = draft("fri", "1:00 PM", "History");
    invalid.day = String::new();

    let err = repo.replace_schedule(id, &invalid).unwrap_err();
    match err {
        RepoError::Validation(blank) => assert_eq!(blank.field, "day"),
        other => panic!("unexpected error: {other}"),
    }

    let unchanged = repo.get_schedule(id).unwrap().unwrap();
    assert_eq!(unchanged, created[0]);
}

#[test]
fn replace_unknown_schedule_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScheduleRepository::try_new(&conn).unwrap();

    let err = repo
        .replace_schedule(321, &draft("mon", "8:00 AM", "Math"))
        .unwrap_err();
    assert!(matches!(err, RepoError::ScheduleNotFound(321)));
}

#[test]
fn delete_removes_row_and_unknown_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteScheduleRepository::try_new(&conn).unwrap();

    let created = repo
        .insert_schedules(&[batch("CR-101", vec![draft("mon", "8:00 AM", "Math")])])
        .unwrap();
    let id = created[0].id;

    repo.delete_schedule(id).unwrap();
    assert!(repo.get_schedule(id).unwrap().is_none());

    let err = repo.delete_schedule(id).unwrap_err();
    assert!(matches!(err, RepoError::ScheduleNotFound(missing) if missing == id));
}

#[test]
fn service_bulk_create_returns_created_rows() {
    let conn = open_db_in_memory().unwrap();
    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());
    let ctx = RequestContext::authenticated("admin");

    let created = service
        .bulk_create(
            &ctx,
            &[batch(
                "CR-101",
                vec![draft("mon", "8:00 AM", "Math"), draft("thu", "7:30AM", "English")],
            )],
        )
        .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(service.list_schedules(&ctx).unwrap().len(), 2);
}

#[test]
fn service_surfaces_blank_field_on_replace() {
    let conn = open_db_in_memory().unwrap();
    let service = ScheduleService::new(SqliteScheduleRepository::try_new(&conn).unwrap());
    let ctx = RequestContext::anonymous();

    let created = service
        .bulk_create(&ctx, &[batch("CR-101", vec![draft("mon", "8:00 AM", "Math")])])
        .unwrap();

    let mut invalid = draft("fri", "1:00 PM", "History");
    invalid.subject = " ".to_string();

    let err = service
        .replace_schedule(&ctx, created[0].id, &invalid)
        .unwrap_err();
    match err {
        ScheduleServiceError::Validation(blank) => assert_eq!(blank.field, "subject"),
        other => panic!("unexpected error: {other}"),
    }
}
