mod args;

use std::path::Path;

use anyhow::{bail, Result};
use clap::Parser;

pub use args::{CliArgs, Command, IssueQueryArgs, LogLevel, StatementArgs};

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Only `.csv` statements are accepted, matching what the upload endpoint allows.
pub fn require_csv_extension(path: &Path) -> Result<()> {
    let is_csv = path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

    if !is_csv {
        bail!("Only CSV files are allowed: {}", path.display());
    }

    Ok(())
}
