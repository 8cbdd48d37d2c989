// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use textstat::config::{load_and_validate_config, Config};
use textstat::observability::init_logging;
use textstat::observability::messages::{persistence::ReportStoreFailed, StructuredLog};
use textstat::persistence::SqliteReportSink;
use textstat::resource::DefaultResourceLoader;
use textstat::traits::ReportSink;
use textstat::{AnalysisOutcome, ReportDriver, SentenceModel};

/// Generate descriptive statistics for text files and URLs.
#[derive(Parser, Debug)]
#[command(name = "textstat", version)]
struct Cli {
    /// YAML or TOML configuration file
    #[arg(short, long, env = "TEXTSTAT_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database receiving status lines and reports
    #[arg(long)]
    database: Option<PathBuf>,

    /// Directory holding the sentence model
    #[arg(long, env = "TEXTSTAT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Do not persist results
    #[arg(long)]
    no_store: bool,

    /// Print each report as JSON
    #[arg(long)]
    json: bool,

    /// Local file paths or URLs to analyze
    #[arg(required = true)]
    identifiers: Vec<String>,
}

/// Get the default concurrency level based on system capabilities
///
/// Returns the number of available CPU cores, falling back to 4 if detection fails.
fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_and_validate_config(path)?,
        None => Config::default(),
    };

    if let Some(database) = &cli.database {
        config.database = database.clone();
    }
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    Ok(config)
}

struct Finished {
    index: usize,
    identifier: String,
    outcome: AnalysisOutcome,
    elapsed: Duration,
}

async fn analyze_all(
    driver: ReportDriver,
    identifiers: Vec<String>,
    max_concurrency: usize,
) -> anyhow::Result<Vec<Finished>> {
    let permits = Arc::new(Semaphore::new(max_concurrency));
    let mut tasks = JoinSet::new();

    for (index, identifier) in identifiers.into_iter().enumerate() {
        let driver = driver.clone();
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let started = Instant::now();
            let outcome = driver.analyze(&identifier).await;
            Ok::<_, anyhow::Error>(Finished {
                index,
                identifier,
                outcome,
                elapsed: started.elapsed(),
            })
        });
    }

    let mut finished = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        finished.push(joined.context("analysis task panicked")??);
    }
    finished.sort_by_key(|f| f.index);
    Ok(finished)
}

/// Lines printed for one finished analysis, in output order.
fn progress_lines(identifier: &str, elapsed: Duration, status_line: &str) -> [String; 3] {
    [
        format!("working with file {}", identifier),
        format!(
            "time to generate report for file {}: {} ms",
            identifier,
            elapsed.as_millis()
        ),
        status_line.to_string(),
    ]
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = resolve_config(&cli)?;

    let model = SentenceModel::global(&config.data_dir).context("failed to set up sentence model")?;
    let loader = DefaultResourceLoader::new(&config.fetch).context("failed to build HTTP client")?;
    let driver = ReportDriver::new(Arc::new(loader), model);

    let sink = if cli.no_store {
        None
    } else {
        let sink = SqliteReportSink::open(&config.database)
            .with_context(|| format!("failed to open {}", config.database.display()))?;
        Some(sink)
    };

    let max_concurrency = config.max_concurrency.unwrap_or_else(default_concurrency);
    let finished = analyze_all(driver, cli.identifiers, max_concurrency).await?;

    let mut all_succeeded = true;
    for Finished {
        identifier,
        outcome,
        elapsed,
        ..
    } in finished
    {
        let status_line = outcome.status_line().to_string();
        for line in progress_lines(&identifier, elapsed, &status_line) {
            println!("{}", line);
        }

        if cli.json {
            if let Some(report) = outcome.report() {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
        }

        if let Some(sink) = &sink {
            if let Err(error) = sink.store(&status_line, outcome.report()) {
                ReportStoreFailed {
                    status_line: &status_line,
                    error: &error,
                }
                .log();
                all_succeeded = false;
            }
        }

        all_succeeded &= outcome.is_success();
    }

    Ok(all_succeeded)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging("info");
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_identifiers_and_flags() {
        let cli = Cli::try_parse_from([
            "textstat",
            "--no-store",
            "--json",
            "--database",
            "other.db",
            "notes.txt",
            "https://example.com/a.txt",
        ])
        .unwrap();

        assert!(cli.no_store);
        assert!(cli.json);
        assert_eq!(cli.identifiers, vec!["notes.txt", "https://example.com/a.txt"]);

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.database, PathBuf::from("other.db"));
    }

    #[test]
    fn test_cli_requires_an_identifier() {
        assert!(Cli::try_parse_from(["textstat", "--json"]).is_err());
    }

    #[test]
    fn test_progress_lines_announce_file_then_timing_then_status() {
        let status = "2025-01-01 00:00:00.000000|file|notes.txt|INFO";
        let lines = progress_lines("notes.txt", Duration::from_millis(42), status);

        assert_eq!(
            lines,
            [
                "working with file notes.txt".to_string(),
                "time to generate report for file notes.txt: 42 ms".to_string(),
                status.to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_analyze_all_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, "One sentence here.").unwrap();
        std::fs::write(&second, "").unwrap();

        let loader = DefaultResourceLoader::new(&Default::default()).unwrap();
        let driver = ReportDriver::new(Arc::new(loader), Arc::new(SentenceModel::bundled()));
        let identifiers = vec![
            first.to_str().unwrap().to_string(),
            second.to_str().unwrap().to_string(),
            dir.path().join("missing.txt").to_str().unwrap().to_string(),
        ];

        let finished = analyze_all(driver, identifiers.clone(), 2).await.unwrap();
        let order: Vec<&str> = finished.iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(order, identifiers);
        assert!(finished[0].outcome.is_success());
        assert!(!finished[1].outcome.is_success());
        assert!(!finished[2].outcome.is_success());
    }
}
