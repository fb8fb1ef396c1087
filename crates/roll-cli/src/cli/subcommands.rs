use clap::Subcommand;

/// Shared CRUD commands for entity screens.
#[derive(Clone, Debug, Subcommand)]
pub enum CrudCommands {
    /// List records.
    List {
        /// Filter text applied to the screen's name column.
        #[arg(long)]
        filter: Option<String>,
        /// Sort by column key.
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending instead of ascending.
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Page number (1-based).
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Hide a column by key (repeatable).
        #[arg(long = "hide", value_name = "KEY")]
        hidden: Vec<String>,
    },
    /// Show one record.
    Show { id: String },
    /// Create a record from `key=value` assignments.
    Add {
        /// Field assignments, `key=value`. Values are parsed per the
        /// column's field type.
        #[arg(required = true, value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
    /// Edit a record by id with `key=value` assignments.
    Edit {
        id: String,
        #[arg(required = true, value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
    /// Delete a record by id.
    Rm {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Attendance-sheet commands. Sheets are keyed by date, not id.
#[derive(Clone, Debug, Subcommand)]
pub enum AttendanceCommands {
    /// Show a day's sheet with per-student checkmarks.
    Show {
        /// Day to show, `YYYY-MM-DD`; defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Mark students and upsert the day's sheet.
    Mark {
        /// Day to mark, `YYYY-MM-DD`; defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// Student ids to mark present (repeatable).
        #[arg(long, value_name = "STUDENT_ID")]
        present: Vec<String>,
        /// Student ids to mark absent (repeatable).
        #[arg(long, value_name = "STUDENT_ID")]
        absent: Vec<String>,
        /// Note attached to the sheet.
        #[arg(long)]
        note: Option<String>,
    },
}
