use gymkeeper::core::attendance::{AttendanceLogic, CheckOut};
use gymkeeper::core::registry::RegistryLogic;
use gymkeeper::db::pool::DbPool;
use gymkeeper::errors::{AppError, ErrorKind};
use gymkeeper::models::member::NewMember;
use gymkeeper::utils::formatting::duration_cell;

mod common;
use common::{count, d, dt, open_test_pool};

fn add_member(pool: &mut DbPool, id: &str, joined: &str) {
    let member = NewMember {
        id: id.into(),
        name: format!("Name {id}"),
        phone: String::new(),
        age: 40,
        join_date: d(joined),
    };
    RegistryLogic::add_member(pool, member, d(joined), 31).expect("add member");
}

#[test]
fn test_check_in_out_and_duration() {
    let mut pool = open_test_pool();
    add_member(&mut pool, "M1", "2025-03-01");

    let id = AttendanceLogic::check_in(&mut pool, "M1", dt("2025-03-10 09:00"), 31)
        .expect("check in");

    assert_eq!(AttendanceLogic::duration(&pool.conn, id).expect("open row"), None);

    let present = AttendanceLogic::present(&pool.conn).expect("present");
    assert_eq!(present.len(), 1);
    assert_eq!(present[0].member_id, "M1");

    let out = AttendanceLogic::check_out(&mut pool, "M1", dt("2025-03-10 10:30"))
        .expect("check out");
    assert_eq!(
        out,
        CheckOut::Closed {
            attendance_id: id,
            minutes: Some(90)
        }
    );

    assert_eq!(
        AttendanceLogic::duration(&pool.conn, id).expect("closed row"),
        Some(90)
    );
    assert_eq!(duration_cell(Some(90)), "90 min (01h 30m)");
    assert_eq!(duration_cell(None), "N/A");
    assert!(AttendanceLogic::present(&pool.conn).expect("present").is_empty());
}

#[test]
fn test_second_check_in_is_refused() {
    let mut pool = open_test_pool();
    add_member(&mut pool, "M1", "2025-03-01");

    AttendanceLogic::check_in(&mut pool, "M1", dt("2025-03-10 09:00"), 31).expect("first");
    let err = AttendanceLogic::check_in(&mut pool, "M1", dt("2025-03-10 09:05"), 31)
        .expect_err("second check-in");

    assert!(matches!(err, AppError::AlreadyCheckedIn(_)));
    assert_eq!(count(&pool, "attendance"), 1);
}

#[test]
fn test_expired_member_is_refused() {
    let mut pool = open_test_pool();
    add_member(&mut pool, "M2", "2025-01-01");

    let err = AttendanceLogic::check_in(&mut pool, "M2", dt("2025-03-10 09:00"), 31)
        .expect_err("expired");

    assert_eq!(err.kind(), ErrorKind::DomainRuleViolation);
    assert!(err.to_string().contains("membership is expired"));
    assert_eq!(count(&pool, "attendance"), 0);
}

fn attendance_rows(pool: &DbPool) -> Vec<(i64, String, Option<String>)> {
    let mut stmt = pool
        .conn
        .prepare("SELECT attendance_id, member_id, check_out FROM attendance ORDER BY attendance_id")
        .expect("prepare");
    stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows")
}

#[test]
fn test_check_out_without_open_row() {
    let mut pool = open_test_pool();
    add_member(&mut pool, "M1", "2025-03-01");
    add_member(&mut pool, "M2", "2025-03-01");

    // M2 has an already-closed visit that must stay as it is
    AttendanceLogic::check_in(&mut pool, "M2", dt("2025-03-09 18:00"), 31).expect("check in");
    AttendanceLogic::check_out(&mut pool, "M2", dt("2025-03-09 19:15")).expect("check out");

    let before = attendance_rows(&pool);

    for member in ["M1", "M2", "M1", "M2"] {
        let out = AttendanceLogic::check_out(&mut pool, member, dt("2025-03-10 10:00"))
            .expect("no-op check out");
        assert_eq!(out, CheckOut::NotCheckedIn, "member {member}");
    }

    assert_eq!(attendance_rows(&pool), before);
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].2.as_deref(), Some("2025-03-09 19:15:00"));

    let err = AttendanceLogic::check_out(&mut pool, "NOBODY", dt("2025-03-10 10:00"))
        .expect_err("unknown member");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_check_out_never_precedes_check_in() {
    let mut pool = open_test_pool();
    add_member(&mut pool, "M1", "2025-03-01");

    let id = AttendanceLogic::check_in(&mut pool, "M1", dt("2025-03-10 09:00"), 31)
        .expect("check in");
    AttendanceLogic::check_out(&mut pool, "M1", dt("2025-03-10 08:00")).expect("check out");

    assert_eq!(AttendanceLogic::duration(&pool.conn, id).expect("row"), Some(0));
}

#[test]
fn test_duration_of_unknown_row() {
    let pool = open_test_pool();

    let err = AttendanceLogic::duration(&pool.conn, 42).expect_err("missing row");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
