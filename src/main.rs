//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_guard` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use futures::stream::FuturesUnordered;
use futures::StreamExt;

use domain_guard::alert::{BroadcastAlertSink, LogAlertSink};
use domain_guard::config::DEFAULT_API_PORT;
use domain_guard::initialization::init_logger_with;
use domain_guard::server::{start_api_server, ApiState};
use domain_guard::{
    Config, DomainChecker, FileThresholdStore, LogFormat, LogLevel, MemoryThresholdStore,
    RdapClient, Status, SystemClock, ThresholdStore,
};

#[derive(Parser)]
#[command(name = "domain_guard", version, about = "Flags freshly registered domains")]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server
    Serve {
        /// Port to bind on (loopback only)
        #[arg(long, default_value_t = DEFAULT_API_PORT)]
        port: u16,

        /// Path of the persisted threshold file
        #[arg(long)]
        threshold_file: Option<PathBuf>,

        /// RDAP service base URL (overrides RDAP_BASE_URL)
        #[arg(long)]
        rdap_url: Option<String>,
    },
    /// Evaluate one or more URLs and print a verdict per line
    Check {
        /// URLs to evaluate
        #[arg(required = true)]
        urls: Vec<String>,

        /// One-off threshold in days instead of the persisted value
        #[arg(long)]
        threshold: Option<i64>,

        /// RDAP service base URL (overrides RDAP_BASE_URL)
        #[arg(long)]
        rdap_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match cli.command {
        Command::Serve {
            port,
            threshold_file,
            rdap_url,
        } => serve(port, threshold_file, rdap_url).await,
        Command::Check {
            urls,
            threshold,
            rdap_url,
        } => check(urls, threshold, rdap_url).await,
    }
}

/// Builds the library config, applying the RDAP override from the CLI or
/// the RDAP_BASE_URL environment variable.
fn base_config(rdap_url: Option<String>) -> Config {
    let mut config = Config::default();
    if let Some(url) = rdap_url.or_else(|| std::env::var("RDAP_BASE_URL").ok()) {
        config.rdap_base_url = url;
    }
    config
}

async fn serve(port: u16, threshold_file: Option<PathBuf>, rdap_url: Option<String>) -> Result<()> {
    let mut config = base_config(rdap_url);
    config.port = port;
    if let Some(path) = threshold_file {
        config.threshold_file = path;
    }

    let alerts = BroadcastAlertSink::new(16);
    let mut alert_rx = alerts.subscribe();
    tokio::spawn(async move {
        while let Ok(alert) = alert_rx.recv().await {
            match alert.age_days {
                Some(age) => log::warn!(
                    "ALERT: {} was registered {} days ago",
                    alert.domain,
                    age
                ),
                None => log::warn!("ALERT: {} flagged as recently registered", alert.domain),
            }
        }
    });

    let checker = DomainChecker::from_config(&config, Arc::new(alerts))
        .context("Failed to initialize domain checker")?;
    let state = ApiState {
        checker: Arc::new(checker),
    };

    start_api_server(config.port, state).await
}

async fn check(urls: Vec<String>, threshold: Option<i64>, rdap_url: Option<String>) -> Result<()> {
    let config = base_config(rdap_url);

    let thresholds: Arc<dyn ThresholdStore> = match threshold {
        Some(days) => Arc::new(MemoryThresholdStore::with_days(days)),
        None => Arc::new(FileThresholdStore::new(config.threshold_file.clone())),
    };
    let lookup = Arc::new(
        RdapClient::from_config(&config).context("Failed to initialize RDAP client")?,
    );
    let checker = Arc::new(DomainChecker::new(
        lookup,
        thresholds,
        Arc::new(LogAlertSink),
        config.cache_ttl,
        Arc::new(SystemClock),
    ));

    let mut tasks = FuturesUnordered::new();
    for url in urls {
        let checker = Arc::clone(&checker);
        tasks.push(tokio::spawn(async move {
            let verdict = checker.check_navigation(&url).await;
            (url, verdict)
        }));
    }

    while let Some(task_result) = tasks.next().await {
        match task_result {
            Ok((url, Some(c))) => {
                let label = match c.status {
                    Status::Danger => "danger ".red().bold(),
                    Status::Safe => "safe   ".green(),
                    Status::Unknown => "unknown".yellow(),
                };
                match c.age_days {
                    Some(age) => {
                        println!("{}  {} ({}, registered {} days ago)", label, url, c.domain, age)
                    }
                    None => println!("{}  {} ({})", label, url, c.domain),
                }
            }
            Ok((url, None)) => {
                println!("{}  {} (not a checkable web URL)", "skipped".dimmed(), url)
            }
            Err(join_error) => log::warn!("Check task panicked: {:?}", join_error),
        }
    }

    Ok(())
}
