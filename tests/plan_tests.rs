use gymkeeper::core::plan::PlanLogic;
use gymkeeper::core::registry::RegistryLogic;
use gymkeeper::db::pool::DbPool;
use gymkeeper::errors::ErrorKind;
use gymkeeper::models::member::NewMember;
use rust_decimal::Decimal;

mod common;
use common::{count, d, open_test_pool};

/// One member, one trainer ("Kim", id 1), exercises "Squat" (1) and "Plank" (2)
fn seed(pool: &mut DbPool) {
    let member = NewMember {
        id: "M1".into(),
        name: "Asha".into(),
        phone: String::new(),
        age: 25,
        join_date: d("2025-01-01"),
    };
    RegistryLogic::add_member(pool, member, d("2025-01-01"), 31).expect("member");
    RegistryLogic::add_trainer(pool, "Kim", Decimal::new(3000000, 2), d("2024-01-01"))
        .expect("trainer");
    RegistryLogic::add_exercise(pool, "Squat").expect("squat");
    RegistryLogic::add_exercise(pool, "Plank").expect("plank");
}

#[test]
fn test_create_and_show_plan() {
    let mut pool = open_test_pool();
    seed(&mut pool);

    let plan = PlanLogic::create(&mut pool, "M1", "kim", d("2025-01-05"), None).expect("plan");
    PlanLogic::add_exercise(&mut pool, plan, "Squat", "3x12").expect("squat");
    PlanLogic::add_exercise(&mut pool, plan, "2", " 3x60s ").expect("plank by id");

    let (stored, exercises) = PlanLogic::show(&pool.conn, plan).expect("show");
    assert_eq!(stored.member_id, "M1");
    assert_eq!(stored.end_date, None);
    assert_eq!(exercises.len(), 2);
    assert!(exercises.iter().any(|e| e.exercise_name == "Plank" && e.reps_sets_info == "3x60s"));

    let overview = PlanLogic::list(&pool.conn).expect("list");
    assert_eq!(overview.len(), 1);
    assert_eq!(overview[0].trainer_name, "Kim");
}

#[test]
fn test_duplicate_exercise_keeps_one_row() {
    let mut pool = open_test_pool();
    seed(&mut pool);

    let plan = PlanLogic::create(&mut pool, "M1", "1", d("2025-01-05"), None).expect("plan");
    PlanLogic::add_exercise(&mut pool, plan, "Squat", "3x12").expect("first");

    let err = PlanLogic::add_exercise(&mut pool, plan, "squat", "5x5").expect_err("duplicate");
    assert_eq!(err.kind(), ErrorKind::DuplicateEntry);
    assert!(err.to_string().contains("already in plan"));
    assert_eq!(count(&pool, "plan_exercise"), 1);
}

#[test]
fn test_plan_validation() {
    let mut pool = open_test_pool();
    seed(&mut pool);

    let err = PlanLogic::create(&mut pool, "M1", "Kim", d("2025-02-01"), Some(d("2025-01-01")))
        .expect_err("end before start");
    assert_eq!(err.kind(), ErrorKind::ValidationFailure);

    let err = PlanLogic::create(&mut pool, "M1", "Nobody", d("2025-02-01"), None)
        .expect_err("unknown trainer");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = PlanLogic::create(&mut pool, "M9", "Kim", d("2025-02-01"), None)
        .expect_err("unknown member");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let plan = PlanLogic::create(&mut pool, "M1", "Kim", d("2025-02-01"), Some(d("2025-02-01")))
        .expect("single-day plan");
    let err = PlanLogic::add_exercise(&mut pool, plan, "Squat", "  ").expect_err("empty reps");
    assert_eq!(err.kind(), ErrorKind::ValidationFailure);

    assert_eq!(count(&pool, "workout_plan"), 1);
}

#[test]
fn test_remove_exercise_and_delete_plan() {
    let mut pool = open_test_pool();
    seed(&mut pool);

    let plan = PlanLogic::create(&mut pool, "M1", "Kim", d("2025-01-05"), None).expect("plan");
    PlanLogic::add_exercise(&mut pool, plan, "Squat", "3x12").expect("squat");
    PlanLogic::add_exercise(&mut pool, plan, "Plank", "3x60s").expect("plank");

    assert!(PlanLogic::remove_exercise(&mut pool, plan, "Squat").expect("remove"));
    assert!(!PlanLogic::remove_exercise(&mut pool, plan, "Squat").expect("already gone"));

    assert_eq!(PlanLogic::delete(&mut pool, plan).expect("delete"), 1);
    assert_eq!(count(&pool, "workout_plan"), 0);
    assert_eq!(count(&pool, "plan_exercise"), 0);
    // Exercises themselves survive
    assert_eq!(count(&pool, "exercise"), 2);

    let err = PlanLogic::show(&pool.conn, plan).expect_err("deleted plan");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
