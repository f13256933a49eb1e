use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// A named schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251018_0001_create_registry_tables",
        description: "Created member, trainer and exercise tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS member (
            member_id  TEXT PRIMARY KEY NOT NULL CHECK(length(trim(member_id)) > 0),
            name       TEXT NOT NULL CHECK(length(trim(name)) > 0),
            phone      TEXT NOT NULL DEFAULT '',
            age        INTEGER NOT NULL CHECK(age >= 0),
            join_date  TEXT NOT NULL,
            status     TEXT NOT NULL DEFAULT 'Active' CHECK(status IN ('Active','Inactive'))
        );

        CREATE TABLE IF NOT EXISTS trainer (
            trainer_id  INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL CHECK(length(trim(name)) > 0),
            salary      TEXT NOT NULL DEFAULT '0',
            date_hired  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS exercise (
            exercise_id  INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL UNIQUE COLLATE NOCASE CHECK(length(trim(name)) > 0)
        );
        "#,
    },
    Migration {
        version: "20251018_0002_create_payment_attendance",
        description: "Created payment and attendance tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS payment (
            payment_id    INTEGER PRIMARY KEY AUTOINCREMENT,
            member_id     TEXT NOT NULL REFERENCES member(member_id) ON DELETE CASCADE,
            amount        TEXT NOT NULL,
            payment_date  TEXT NOT NULL,
            status        TEXT NOT NULL DEFAULT 'Paid' CHECK(status IN ('Paid','Pending'))
        );

        CREATE TABLE IF NOT EXISTS attendance (
            attendance_id  INTEGER PRIMARY KEY AUTOINCREMENT,
            member_id      TEXT NOT NULL REFERENCES member(member_id) ON DELETE CASCADE,
            check_in       TEXT NOT NULL,
            check_out      TEXT,
            CHECK(check_out IS NULL OR check_out >= check_in)
        );

        CREATE INDEX IF NOT EXISTS idx_payment_member_date ON payment(member_id, payment_date);
        CREATE INDEX IF NOT EXISTS idx_attendance_member_in ON attendance(member_id, check_in);
        "#,
    },
    Migration {
        version: "20251018_0003_create_workout_plans",
        description: "Created workout_plan and plan_exercise tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS workout_plan (
            plan_id     INTEGER PRIMARY KEY AUTOINCREMENT,
            member_id   TEXT NOT NULL REFERENCES member(member_id) ON DELETE CASCADE,
            trainer_id  INTEGER NOT NULL REFERENCES trainer(trainer_id) ON DELETE CASCADE,
            start_date  TEXT NOT NULL,
            end_date    TEXT,
            CHECK(end_date IS NULL OR end_date >= start_date)
        );

        CREATE TABLE IF NOT EXISTS plan_exercise (
            plan_id         INTEGER NOT NULL REFERENCES workout_plan(plan_id) ON DELETE CASCADE,
            exercise_id     INTEGER NOT NULL REFERENCES exercise(exercise_id) ON DELETE CASCADE,
            reps_sets_info  TEXT NOT NULL DEFAULT '',
            PRIMARY KEY (plan_id, exercise_id)
        );

        CREATE INDEX IF NOT EXISTS idx_plan_member ON workout_plan(member_id);
        CREATE INDEX IF NOT EXISTS idx_plan_trainer ON workout_plan(trainer_id);
        "#,
    },
    Migration {
        version: "20251018_0004_single_open_attendance",
        description: "At most one open attendance row per member",
        sql: r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_one_open
            ON attendance(member_id) WHERE check_out IS NULL;
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Names of migrations not yet applied to this database.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        applied += 1;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(applied)
}
