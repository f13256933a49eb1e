use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gk, init_db_cli, setup_test_db};

fn add_member(db_path: &str, id: &str, name: &str, joined: Option<&str>) {
    let mut args = vec![
        "--db", db_path, "member", "add", id, "--name", name, "--age", "30", "--phone", "555-0101",
    ];
    if let Some(j) = joined {
        args.push("--joined");
        args.push(j);
    }
    gk().args(&args).assert().success();
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    gk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    gk().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("No pending migrations"));
}

#[test]
fn test_missing_database_is_a_connection_error() {
    let db_path = setup_test_db("cli_missing_db");

    gk().args(["--db", &db_path, "member", "list"])
        .assert()
        .failure()
        .stderr(contains("Database connection error"));
}

#[test]
fn test_check_in_and_out_new_member() {
    let db_path = setup_test_db("cli_checkin_out");
    init_db_cli(&db_path);
    add_member(&db_path, "M1", "Asha", None);

    gk().args(["--db", &db_path, "checkin", "M1"])
        .assert()
        .success()
        .stdout(contains("Member M1 checked in successfully"));

    gk().args(["--db", &db_path, "present"])
        .assert()
        .success()
        .stdout(contains("M1").and(contains("Asha")));

    gk().args(["--db", &db_path, "checkin", "M1"])
        .assert()
        .failure()
        .stderr(contains("already checked in"));

    gk().args(["--db", &db_path, "checkout", "M1"])
        .assert()
        .success()
        .stdout(contains("Member M1 checked out successfully"));

    gk().args(["--db", &db_path, "present"])
        .assert()
        .success()
        .stdout(contains("Nobody is checked in"));

    gk().args(["--db", &db_path, "checkout", "M1"])
        .assert()
        .success()
        .stdout(contains("No active check-in found for member M1"));

    gk().args(["--db", &db_path, "duration", "1"])
        .assert()
        .success()
        .stdout(contains("Attendance 1:").and(contains("min")));
}

#[test]
fn test_expired_member_cannot_check_in_until_paid() {
    let db_path = setup_test_db("cli_expired");
    init_db_cli(&db_path);
    add_member(&db_path, "M2", "Ravi", Some("2020-01-01"));

    gk().args(["--db", &db_path, "member", "list"])
        .assert()
        .success()
        .stdout(contains("Inactive"));

    gk().args(["--db", &db_path, "checkin", "M2"])
        .assert()
        .failure()
        .stderr(contains("membership is expired"));

    gk().args(["--db", &db_path, "present", "--json"])
        .assert()
        .success()
        .stdout(contains("M2").not());

    // A pending payment does not extend the membership
    gk().args(["--db", &db_path, "pay", "M2", "250", "--pending"])
        .assert()
        .success()
        .stdout(contains("status: Inactive"));

    gk().args(["--db", &db_path, "pay", "M2", "500.00"])
        .assert()
        .success()
        .stdout(contains("is now Active"));

    gk().args(["--db", &db_path, "checkin", "M2"])
        .assert()
        .success();

    gk().args(["--db", &db_path, "payments", "--member", "M2"])
        .assert()
        .success()
        .stdout(contains("750.00"));
}

#[test]
fn test_status_refresh_reports_changes() {
    let db_path = setup_test_db("cli_refresh");
    init_db_cli(&db_path);
    add_member(&db_path, "M3", "Lena", None);

    gk().args(["--db", &db_path, "pay", "M3", "500.00"])
        .assert()
        .success()
        .stdout(contains("500.00"));

    gk().args(["--db", &db_path, "status", "refresh", "--yes"])
        .assert()
        .success()
        .stdout(contains("1 members checked, 0 changed"));

    gk().args(["--db", &db_path, "member", "show", "M3", "--json"])
        .assert()
        .success()
        .stdout(contains("\"status\": \"Active\""));

    gk().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("status_refresh"));
}

#[test]
fn test_plan_rejects_duplicate_exercise() {
    let db_path = setup_test_db("cli_plan_dup");
    init_db_cli(&db_path);
    add_member(&db_path, "M1", "Asha", None);

    gk().args(["--db", &db_path, "trainer", "add", "--name", "Kim", "--salary", "30000"])
        .assert()
        .success()
        .stdout(contains("Trainer Kim added with id 1"));

    gk().args(["--db", &db_path, "exercise", "add", "Squat"])
        .assert()
        .success();

    gk().args([
        "--db", &db_path, "plan", "add", "--member", "M1", "--trainer", "Kim", "--start",
        "2025-01-01",
    ])
    .assert()
    .success()
    .stdout(contains("Workout plan 1 created"));

    gk().args(["--db", &db_path, "plan", "add-exercise", "1", "squat", "--reps", "3x12"])
        .assert()
        .success()
        .stdout(contains("Added 'Squat' (3x12) to plan 1"));

    gk().args(["--db", &db_path, "plan", "add-exercise", "1", "Squat", "--reps", "5x5"])
        .assert()
        .failure()
        .stderr(contains("already in plan 1"));

    gk().args(["--db", &db_path, "plan", "show", "1"])
        .assert()
        .success()
        .stdout(contains("3x12").and(contains("5x5").not()));
}

#[test]
fn test_plan_end_before_start_is_rejected() {
    let db_path = setup_test_db("cli_plan_dates");
    init_db_cli(&db_path);
    add_member(&db_path, "M1", "Asha", None);

    gk().args(["--db", &db_path, "trainer", "add", "--name", "Kim", "--salary", "100"])
        .assert()
        .success();

    gk().args([
        "--db", &db_path, "plan", "add", "--member", "M1", "--trainer", "1", "--start",
        "2025-02-01", "--end", "2025-01-01",
    ])
    .assert()
    .failure()
    .stderr(contains("Input error"));
}

#[test]
fn test_member_delete_cascades() {
    let db_path = setup_test_db("cli_member_del");
    init_db_cli(&db_path);
    add_member(&db_path, "M1", "Asha", None);

    gk().args(["--db", &db_path, "pay", "M1", "100"])
        .assert()
        .success();
    gk().args(["--db", &db_path, "checkin", "M1"])
        .assert()
        .success();

    gk().args(["--db", &db_path, "member", "del", "M1", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted with 1 payments, 1 attendance records and 0 workout plans"));

    gk().args(["--db", &db_path, "payments", "--json"])
        .assert()
        .success()
        .stdout(contains("M1").not());

    gk().args(["--db", &db_path, "member", "show", "M1"])
        .assert()
        .failure()
        .stderr(contains("Member 'M1' not found"));
}

#[test]
fn test_duplicate_member_id() {
    let db_path = setup_test_db("cli_member_dup");
    init_db_cli(&db_path);
    add_member(&db_path, "M1", "Asha", None);

    gk().args(["--db", &db_path, "member", "add", "M1", "--name", "Other", "--age", "40"])
        .assert()
        .failure()
        .stderr(contains("Already exists"));
}

#[test]
fn test_invalid_input_is_rejected_before_writing() {
    let db_path = setup_test_db("cli_invalid_input");
    init_db_cli(&db_path);

    gk().args(["--db", &db_path, "member", "add", "M9", "--name", "Bad", "--age", "abc"])
        .assert()
        .failure()
        .stderr(contains("Input error"));

    gk().args(["--db", &db_path, "member", "list"])
        .assert()
        .success()
        .stdout(contains("No members registered"));

    add_member(&db_path, "M1", "Asha", None);

    gk().args(["--db", &db_path, "pay", "M1", "x"])
        .assert()
        .failure()
        .stderr(contains("Input error"));

    gk().args(["--db", &db_path, "pay", "M1", "10.005"])
        .assert()
        .failure()
        .stderr(contains("two decimal places"));

    gk().args(["--db", &db_path, "pay", "NOPE", "10"])
        .assert()
        .failure()
        .stderr(contains("Member 'NOPE' not found"));
}

#[test]
fn test_relative_db_path_is_shared_by_init_and_commands() {
    let dir = std::env::temp_dir().join("cli_relative_db_gymkeeper");
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).expect("work dir");

    gk().current_dir(&dir)
        .args(["--db", "gym_rel.sqlite", "--test", "init"])
        .assert()
        .success();

    assert!(dir.join("gym_rel.sqlite").exists());

    gk().current_dir(&dir)
        .args(["--db", "gym_rel.sqlite", "member", "list"])
        .assert()
        .success()
        .stdout(contains("No members registered"));
}
