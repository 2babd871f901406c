use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::types::{Pagination, SortDirection, Sorting, DEFAULT_PAGE_SIZE};

/// Load bank statements and report balances or failed and pending lines
#[derive(Parser, Debug)]
#[command(name = "statement-ledger")]
#[command(about = "Load bank statements and report balances or failed and pending lines", long_about = None)]
pub struct CliArgs {
    /// Log verbosity written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        value_enum,
        default_value_t = LogLevel::Error,
        global = true,
        ignore_case = true
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command
}

/// Verbosity of the stderr log
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Commit statements and print one receipt per file
    Upload(StatementArgs),
    /// Commit statements and print the owner's settled balance
    Balance(StatementArgs),
    /// Commit statements and print one page of the owner's failed and pending lines
    Issues {
        #[command(flatten)]
        statements: StatementArgs,
        #[command(flatten)]
        query: IssueQueryArgs
    }
}

impl Command {
    pub fn statements(&self) -> &StatementArgs {
        match self {
            Command::Upload(statements) | Command::Balance(statements) => statements,
            Command::Issues { statements, .. } => statements
        }
    }
}

#[derive(Args, Debug)]
pub struct StatementArgs {
    /// Principal the statements are uploaded for
    #[arg(long = "owner", value_name = "OWNER", default_value = "default")]
    pub owner: String,

    /// Statement files, each committed as one batch
    #[arg(value_name = "FILE", required = true, help = "Paths to headerless six-column CSV statements")]
    pub files: Vec<PathBuf>
}

#[derive(Args, Debug)]
pub struct IssueQueryArgs {
    #[arg(long = "page", value_name = "PAGE", default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    #[arg(long = "limit", value_name = "SIZE", default_value_t = DEFAULT_PAGE_SIZE, allow_negative_numbers = true)]
    pub limit: i64,

    #[arg(long = "sort-by", value_name = "FIELD", help = "timestamp, name, amount, type or status (default: timestamp)")]
    pub sort_by: Option<String>,

    #[arg(long = "sort", value_name = "DIRECTION", help = "ASC or DESC (default: ASC)")]
    pub sort: Option<String>
}

impl IssueQueryArgs {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn sorting(&self) -> Sorting {
        Sorting::new(
            self.sort_by.clone().unwrap_or_default(),
            self.sort.as_deref().map(SortDirection::from)
        )
    }
}
