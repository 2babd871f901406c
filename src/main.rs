use std::fs::File;
use std::io::{stderr, stdout, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use statement_ledger::cli::{self, Command, LogLevel};
use statement_ledger::{LedgerEngine, TransactionStorage, UploadReceipt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse_args();

    setup_logging(args.log_level);

    let storage = Arc::new(TransactionStorage::new());
    let engine = Arc::new(LedgerEngine::new(storage));

    let statements = args.command.statements();
    let owner = statements.owner.clone();

    let timer = Instant::now();
    let receipts = upload_statements(engine.clone(), &owner, &statements.files).await?;
    let duration = timer.elapsed();

    info!("Committed {} statements for owner [{owner}] in: {duration:?}", receipts.len());

    match &args.command {
        Command::Upload(_) => write_json_lines(&receipts)?,
        Command::Balance(_) => write_json(&engine.calculate_balance(&owner))?,
        Command::Issues { query, .. } => {
            let page = engine.get_issues(&query.pagination(), &query.sorting(), &owner)?;
            write_json(&page)?
        }
    }

    Ok(())
}

fn setup_logging(level: LogLevel) {
    //NOTE: stdout carries the JSON report, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(LevelFilter::from(level));

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// Commits every statement as its own batch on the blocking pool.
///
/// All uploads are attempted; a failed one does not roll back the others, but
/// the command as a whole fails once every upload has finished.
async fn upload_statements(engine: Arc<LedgerEngine>, owner: &str, files: &[PathBuf]) -> Result<Vec<UploadReceipt>> {
    let handles: Vec<(PathBuf, JoinHandle<Result<UploadReceipt>>)> = files
        .iter()
        .map(|path| (path.clone(), spawn_upload(engine.clone(), owner.to_string(), path.clone())))
        .collect();

    let mut receipts = Vec::with_capacity(handles.len());
    let mut failures = 0;

    for (path, handle) in handles {
        match handle.await {
            Ok(Ok(receipt)) => {
                info!("Statement {} committed with {} rows", path.display(), receipt.total_rows);
                receipts.push(receipt);
            }
            Ok(Err(upload_error)) => {
                error!("{upload_error:#}");
                failures += 1;
            }
            Err(join_error) => {
                error!("Upload task for {} did not finish: {join_error}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} statement uploads failed", files.len());
    }

    Ok(receipts)
}

fn spawn_upload(engine: Arc<LedgerEngine>, owner: String, path: PathBuf) -> JoinHandle<Result<UploadReceipt>> {
    spawn_blocking(move || {
        cli::require_csv_extension(&path)?;

        let file = File::open(&path)
            .with_context(|| format!("Error opening statement at path: {}", path.display()))?;

        engine.ingest(BufReader::new(file), &owner)
            .with_context(|| format!("Statement {} was rejected", path.display()))
    })
}

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, value)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

fn write_json_lines<T: Serialize>(values: &[T]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    for value in values {
        serde_json::to_writer(&mut output, value)?;
        writeln!(output)?;
    }

    output.flush()?;

    Ok(())
}
