use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rLeaveLedger
/// CLI application to track leave balances with SQLite
#[derive(Parser)]
#[command(
    name = "rleaveledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small-team leave accounting CLI: fractional day charges, an append-only ledger, and a monthly accrual job using SQLite",
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

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,
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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage users (create, list, activate/deactivate)
    User {
        #[arg(long = "add", value_name = "USERNAME", help = "Create a new user")]
        add: Option<String>,

        /// Opening balance in days (settled through the ledger)
        #[arg(
            long = "balance",
            requires = "add",
            allow_hyphen_values = true,
            help = "Opening balance in days for the new user"
        )]
        balance: Option<f64>,

        #[arg(long = "list", help = "List all users with balances")]
        list: bool,

        #[arg(
            long = "activate",
            value_name = "USERNAME",
            help = "Include the user in the monthly accrual again"
        )]
        activate: Option<String>,

        #[arg(
            long = "deactivate",
            value_name = "USERNAME",
            help = "Exclude the user from the monthly accrual"
        )]
        deactivate: Option<String>,
    },

    /// Record a leave request for a user
    Add {
        /// User the leave belongs to
        username: String,

        /// Record type: FULL_DAY, HALF_AM, HALF_PM, RANGE, LATE, EARLY
        kind: String,

        /// Start date (YYYY-MM-DD, or RFC 3339 with offset; default: today)
        #[arg(long = "start", help = "Start date (default: today in the org offset)")]
        start: Option<String>,

        /// End date (RANGE only; default: start date)
        #[arg(long = "end", help = "End date for RANGE (default: start date)")]
        end: Option<String>,

        /// First-day half marker for RANGE (AM = full first day, PM = starts mid-day)
        #[arg(long = "start-half", help = "RANGE start half: AM (default) or PM")]
        start_half: Option<String>,

        /// Last-day half marker for RANGE (PM = full last day, AM = ends mid-day)
        #[arg(long = "end-half", help = "RANGE end half: AM or PM (default)")]
        end_half: Option<String>,

        /// Minute count, required for LATE/EARLY
        #[arg(long = "minutes", help = "Minutes late/early (required for LATE/EARLY)")]
        minutes: Option<i32>,

        #[arg(long = "note", help = "Free-text note")]
        note: Option<String>,
    },

    /// Edit an existing leave record (recomputes and settles the charge)
    Edit {
        /// Record id to edit
        record_id: i64,

        #[arg(long = "start", help = "New start date")]
        start: Option<String>,

        #[arg(long = "end", help = "New end date (RANGE only)")]
        end: Option<String>,

        #[arg(long = "start-half", help = "New RANGE start half: AM or PM")]
        start_half: Option<String>,

        #[arg(long = "end-half", help = "New RANGE end half: AM or PM")]
        end_half: Option<String>,

        #[arg(long = "minutes", help = "New minute count (LATE/EARLY)")]
        minutes: Option<i32>,

        #[arg(long = "note", help = "Replace the note")]
        note: Option<String>,
    },

    /// Delete a leave record (refunds its charge, keeps a tombstone)
    Del {
        /// Record id to delete
        record_id: i64,
    },

    /// List a user's leave records
    List {
        /// User whose records to list
        username: String,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or YYYY-MM:YYYY-MM)"
        )]
        period: Option<String>,

        #[arg(long = "page", default_value = "1", help = "Page number (1-based)")]
        page: usize,

        #[arg(long = "page-size", help = "Records per page (default from config)")]
        page_size: Option<usize>,
    },

    /// Show a user's current leave balance
    Balance {
        username: String,
    },

    /// Apply a signed manual balance adjustment
    Adjust {
        username: String,

        /// Signed amount in days (e.g. 2, -0.5)
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Run the monthly accrual job (safe to call on any cadence)
    Accrue {
        #[arg(
            long = "as-of",
            value_name = "DATE",
            help = "Run as of this date (YYYY-MM-DD; default: today in the org offset)"
        )]
        as_of: Option<String>,
    },

    /// Print a user's balance ledger
    Ledger {
        username: String,

        #[arg(long = "verify", help = "Replay the ledger and verify the balance")]
        verify: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export leave record data
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
}
