use clap::{Parser, Subcommand};

/// Command-line interface definition for gymkeeper
/// CLI application to run a small gym on SQLite
#[derive(Parser)]
#[command(
    name = "gymkeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage gym members, trainers, payments, attendance and workout plans with SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register, list, inspect or delete members
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Register, list or delete trainers
    Trainer {
        #[command(subcommand)]
        action: TrainerAction,
    },

    /// Register, list or delete exercises
    Exercise {
        #[command(subcommand)]
        action: ExerciseAction,
    },

    /// Record a payment for a member
    Pay {
        /// Member id
        member: String,

        /// Amount, e.g. 500 or 500.00
        amount: String,

        #[arg(long = "date", help = "Payment date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "pending", help = "Record as pending: it does not extend the membership")]
        pending: bool,
    },

    /// List payments
    Payments {
        #[arg(long = "member", help = "Only payments of this member")]
        member: Option<String>,

        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Check a member in
    Checkin {
        /// Member id
        member: String,
    },

    /// Check a member out
    Checkout {
        /// Member id
        member: String,
    },

    /// List members currently checked in
    Present {
        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Workout duration of an attendance record
    Duration {
        /// Attendance record id
        attendance: i64,
    },

    /// Manage workout plans and their exercises
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Membership status maintenance
    Status {
        #[command(subcommand)]
        action: StatusAction,
    },
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// Register a new member
    Add {
        /// Member id, e.g. M1
        id: String,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "phone", default_value = "")]
        phone: String,

        #[arg(long = "age")]
        age: String,

        #[arg(long = "joined", help = "Join date (YYYY-MM-DD, default today)")]
        joined: Option<String>,
    },

    /// List members
    List {
        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Show payments total, attendance history and plans of a member
    Show {
        id: String,

        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Delete a member with all payments, attendance and plans
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TrainerAction {
    /// Register a new trainer
    Add {
        #[arg(long = "name")]
        name: String,

        #[arg(long = "salary")]
        salary: String,

        #[arg(long = "hired", help = "Hire date (YYYY-MM-DD, default today)")]
        hired: Option<String>,
    },

    /// List trainers
    List {
        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Delete a trainer (by id or name) with all of their plans
    Del {
        trainer: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// Register a new exercise
    Add { name: String },

    /// List exercises
    List {
        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Delete an exercise (by id or name), removing it from every plan
    Del {
        exercise: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Create a workout plan
    Add {
        #[arg(long = "member")]
        member: String,

        #[arg(long = "trainer", help = "Trainer id or name")]
        trainer: String,

        #[arg(long = "start", help = "Start date (YYYY-MM-DD)")]
        start: String,

        #[arg(long = "end", help = "End date (YYYY-MM-DD), open-ended if omitted")]
        end: Option<String>,
    },

    /// List workout plans
    List {
        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Show the exercises of a plan
    Show { plan: i64 },

    /// Add an exercise (id or name) to a plan
    AddExercise {
        plan: i64,

        exercise: String,

        #[arg(long = "reps", help = "Reps/sets info, e.g. '3x12'")]
        reps: String,
    },

    /// Remove an exercise (id or name) from a plan
    RemoveExercise {
        plan: i64,

        exercise: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete a plan with its exercises
    Del {
        plan: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum StatusAction {
    /// Recompute every member's status from payment recency
    Refresh {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
