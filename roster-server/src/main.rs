//! # Roster Server
//!
//! Serves the catalog table as a single read-only JSON listing.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use roster_server::{
    AppState,
    catalog::PostgresCatalogRepository,
    create_app,
    db,
    infra::config::{Config, ConfigLoader, ConfigLoaderOptions},
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "Read-only catalog listing service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a roster.toml configuration file
    #[arg(long, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply catalog migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();
    let config = load_config(&cli.serve)?;

    match cli.command {
        Some(Command::Db(DbCommand::Migrate)) => {
            let pool = db::connect_lazy(&config.database)?;
            db::run_migrations(&pool).await
        }
        None => run_server(config).await,
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let loader = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: args.config.clone(),
        env_file: args.env_file.clone(),
    });
    let load = loader.load().context("failed to load configuration")?;

    if load.config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = load.config_path() {
        info!(path = %path.display(), "loaded configuration file");
    }
    for warning in load.warnings.iter() {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }

    let mut config = load.config;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    Ok(config)
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let pool = db::connect_lazy(&config.database)?;
    let catalog = Arc::new(PostgresCatalogRepository::new(pool));
    let authority = config.server.authority();
    let state = AppState::new(catalog, Arc::new(config));

    let app = create_app(state);
    let listener = TcpListener::bind(&authority)
        .await
        .with_context(|| format!("failed to bind {authority}"))?;

    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
