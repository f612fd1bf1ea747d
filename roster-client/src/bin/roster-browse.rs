//! Terminal catalog browser.

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use roster_client::{ApiClient, tui};

#[derive(Parser, Debug)]
#[command(name = "roster-browse")]
#[command(about = "Browse the catalog in the terminal")]
struct Cli {
    /// Base URL of the listing service
    #[arg(long, env = "ROSTER_API_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "ROSTER_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_tracing(path)?;
    }

    let client = ApiClient::with_timeout(&cli.base_url, Duration::from_secs(cli.timeout_secs))
        .with_context(|| format!("invalid base URL {}", cli.base_url))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let mut app = tui::BrowseApp::new(client);
    tui::run_tui(&mut app, &runtime).context("terminal UI failed")?;
    Ok(())
}

fn init_file_tracing(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
