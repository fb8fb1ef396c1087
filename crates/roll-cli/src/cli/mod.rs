use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;
pub use subcommands::{AttendanceCommands, CrudCommands};

/// Top-level CLI parser for the `roll` binary.
#[derive(Debug, Parser)]
#[command(name = "roll", version, about = "Rollcall - after-school program admin console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, json
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{AttendanceCommands, Cli, Commands, CrudCommands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["roll", "--format", "json", "--verbose", "whoami"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Whoami));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["roll", "dashboard", "--format", "json", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["roll", "--format", "xml", "whoami"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn list_flags_parse() {
        let cli = Cli::try_parse_from([
            "roll", "students", "list", "--filter", "王", "--sort", "name", "--desc", "--page",
            "2", "--hide", "comment",
        ])
        .expect("cli should parse");

        let Commands::Students {
            action:
                CrudCommands::List {
                    filter,
                    sort,
                    desc,
                    page,
                    hidden,
                },
        } = cli.command
        else {
            panic!("expected students list");
        };
        assert_eq!(filter.as_deref(), Some("王"));
        assert_eq!(sort.as_deref(), Some("name"));
        assert!(desc);
        assert_eq!(page, 2);
        assert_eq!(hidden, vec!["comment".to_string()]);
    }

    #[test]
    fn attendance_mark_flags_parse() {
        let cli = Cli::try_parse_from([
            "roll",
            "attendance",
            "mark",
            "--date",
            "2026-03-02",
            "--present",
            "s1",
            "--absent",
            "s2",
        ])
        .expect("cli should parse");

        let Commands::Attendance {
            action:
                AttendanceCommands::Mark {
                    date,
                    present,
                    absent,
                    note,
                },
        } = cli.command
        else {
            panic!("expected attendance mark");
        };
        assert_eq!(date.as_deref(), Some("2026-03-02"));
        assert_eq!(present, vec!["s1".to_string()]);
        assert_eq!(absent, vec!["s2".to_string()]);
        assert_eq!(note, None);
    }

    #[test]
    fn desc_requires_sort() {
        let parsed = Cli::try_parse_from(["roll", "students", "list", "--desc"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn add_requires_at_least_one_assignment() {
        let parsed = Cli::try_parse_from(["roll", "members", "add"]);
        assert!(parsed.is_err());
    }
}
