use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for PlanningPro
#[derive(Parser)]
#[command(
    name = "planningpro",
    version = env!("CARGO_PKG_VERSION"),
    about = "Workforce planning console: sign in, clock your day, review time reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is "YYYY-MM-DD HH:MM[:SS]"
    #[arg(global = true, long = "at", hide = true, value_name = "DATETIME")]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(long = "no-seed", help = "Do not create the demo accounts")]
        no_seed: bool,
    },

    /// Sign in and keep the session for the next commands
    Login {
        #[arg(long, short = 'e')]
        email: String,

        #[arg(long, short = 'p', help = "Password (read from stdin when omitted)")]
        password: Option<String>,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Resolve a console path (e.g. /admin/reports) against the current session
    Open { path: String },

    /// Daily time tracking (employee accounts)
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },

    /// Manage accounts (admin accounts)
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Summaries of filed time reports
    Report {
        #[arg(long, value_name = "EMAIL", help = "Only this employee (admin only)")]
        employee: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Export filed time reports
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
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
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockAction {
    /// Start the working day
    Start,
    /// Start a break
    Break,
    /// End the break and resume work
    Resume,
    /// End the working day and file its report
    End,
    /// Show live totals for today
    Status,
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// List accounts
    List {
        #[arg(long, short, help = "Case-insensitive match on names and email")]
        search: Option<String>,
    },

    /// Create an account
    Add {
        #[arg(long)]
        email: String,

        #[arg(long = "given")]
        given_name: String,

        #[arg(long = "family")]
        family_name: String,

        #[arg(long, default_value = "employee", help = "admin | employee")]
        role: String,

        #[arg(long, short = 'p')]
        password: String,

        #[arg(long = "hired", value_name = "YYYY-MM-DD")]
        hired_on: Option<String>,
    },

    /// Activate or deactivate an account
    Status {
        email: String,

        #[arg(help = "active | inactive")]
        status: String,
    },

    /// Remove an account (filed reports are kept)
    Remove { email: String },
}
