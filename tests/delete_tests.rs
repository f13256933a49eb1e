use gymkeeper::core::attendance::AttendanceLogic;
use gymkeeper::core::del::DeleteLogic;
use gymkeeper::core::payment::PaymentLogic;
use gymkeeper::core::plan::PlanLogic;
use gymkeeper::core::registry::RegistryLogic;
use gymkeeper::db::pool::DbPool;
use gymkeeper::errors::ErrorKind;
use gymkeeper::models::member::NewMember;
use gymkeeper::models::status::PaymentStatus;
use rust_decimal::Decimal;

mod common;
use common::{count, d, dt, open_test_pool};

/// Two members with payments, attendance and a plan each, both with trainer "Kim"
fn seed(pool: &mut DbPool) {
    let today = d("2025-04-10");
    RegistryLogic::add_trainer(pool, "Kim", Decimal::new(1000, 0), d("2024-01-01"))
        .expect("trainer");
    RegistryLogic::add_exercise(pool, "Row").expect("exercise");

    for id in ["M1", "M2"] {
        let member = NewMember {
            id: id.into(),
            name: format!("Name {id}"),
            phone: String::new(),
            age: 33,
            join_date: d("2025-04-01"),
        };
        RegistryLogic::add_member(pool, member, today, 31).expect("member");
        PaymentLogic::record(pool, id, Decimal::new(500, 0), today, PaymentStatus::Paid, today, 31)
            .expect("payment");
        AttendanceLogic::check_in(pool, id, dt("2025-04-10 07:00"), 31).expect("check in");
        let plan = PlanLogic::create(pool, id, "Kim", today, None).expect("plan");
        PlanLogic::add_exercise(pool, plan, "Row", "4x10").expect("plan exercise");
    }
}

fn rows_for(pool: &DbPool, table: &str, member: &str) -> i64 {
    pool.conn
        .query_row(
            &format!("SELECT COUNT(*) FROM {table} WHERE member_id = ?1"),
            [member],
            |row| row.get(0),
        )
        .expect("count")
}

#[test]
fn test_delete_member_removes_dependents() {
    let mut pool = open_test_pool();
    seed(&mut pool);

    let report = DeleteLogic::member(&mut pool, "M1").expect("delete M1");
    assert_eq!(report.member.id, "M1");
    assert_eq!((report.payments, report.attendance, report.plans), (1, 1, 1));

    for table in ["payment", "attendance", "workout_plan"] {
        assert_eq!(rows_for(&pool, table, "M1"), 0, "{table}");
        assert_eq!(rows_for(&pool, table, "M2"), 1, "{table}");
    }
    assert_eq!(count(&pool, "plan_exercise"), 1);
    assert_eq!(count(&pool, "member"), 1);

    let err = DeleteLogic::member(&mut pool, "M1").expect_err("already deleted");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_delete_trainer_removes_plans() {
    let mut pool = open_test_pool();
    seed(&mut pool);

    let report = DeleteLogic::trainer(&mut pool, "Kim").expect("delete trainer");
    assert_eq!(report.plans, 2);

    assert_eq!(count(&pool, "trainer"), 0);
    assert_eq!(count(&pool, "workout_plan"), 0);
    assert_eq!(count(&pool, "plan_exercise"), 0);
    // Members and their history are untouched
    assert_eq!(count(&pool, "member"), 2);
    assert_eq!(count(&pool, "payment"), 2);
}

#[test]
fn test_delete_exercise_drops_it_from_plans() {
    let mut pool = open_test_pool();
    seed(&mut pool);

    let (exercise, usages) = DeleteLogic::exercise(&mut pool, "row").expect("delete exercise");
    assert_eq!(exercise.name, "Row");
    assert_eq!(usages, 2);
    assert_eq!(count(&pool, "plan_exercise"), 0);
    assert_eq!(count(&pool, "workout_plan"), 2);
}
