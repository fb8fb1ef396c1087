use clap::Subcommand;

use super::subcommands::{AttendanceCommands, CrudCommands};

/// Top-level commands of the `roll` binary.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify the configured credentials against the backend.
    Login,
    /// Sign out, dropping the current session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Recent announcements.
    Dashboard,
    /// Student records.
    Students {
        #[command(subcommand)]
        action: CrudCommands,
    },
    /// Staff accounts.
    Teachers {
        #[command(subcommand)]
        action: CrudCommands,
    },
    /// Community member records.
    Members {
        #[command(subcommand)]
        action: CrudCommands,
    },
    /// Student grade records.
    Grades {
        #[command(subcommand)]
        action: CrudCommands,
    },
    /// Announcements.
    Announcements {
        #[command(subcommand)]
        action: CrudCommands,
    },
    /// Daily attendance sheets.
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },
}
