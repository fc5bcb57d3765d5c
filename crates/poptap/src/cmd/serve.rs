//! Serve command - run the poptap server

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use poptap_api::{build_router, AppState, CountryPolicy};
use poptap_config::Config;
use poptap_feed::StatsFeed;
use poptap_ledger::Ledger;

/// Serve command arguments
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file (defaults to configs/poptap.toml if not
    /// specified)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        platform = std::env::consts::OS,
        "poptap starting"
    );

    let config = load_config(args.config)?;

    run_server(config).await?;

    info!("poptap shutdown complete");
    Ok(())
}

/// Load configuration: an explicit path must exist, otherwise try the
/// default paths and fall back to defaults
fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            Config::from_file(&path).context("failed to load configuration")
        }
        None => {
            let default_paths = [
                PathBuf::from("configs/poptap.toml"),
                PathBuf::from("poptap.toml"),
            ];

            for path in &default_paths {
                if path.exists() {
                    info!(config = %path.display(), "using config file");
                    return Config::from_file(path).context("failed to load configuration");
                }
            }

            info!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

async fn run_server(config: Config) -> Result<()> {
    // The one shared mutable resource, injected into everything else
    let ledger = Arc::new(Ledger::new());
    let feed = Arc::new(StatsFeed::with_interval(
        Arc::clone(&ledger),
        config.feed.interval(),
    ));
    let policy = CountryPolicy::new(&config.country.header, &config.country.fallback);

    let state = AppState::new(Arc::clone(&ledger), Arc::clone(&feed), policy);
    let mut app = build_router(state).layer(TraceLayer::new_for_http());

    if config.server.cors_enabled {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        addr = %addr,
        feed_interval_ms = config.feed.interval_ms,
        country_header = %config.country.header,
        fallback_country = %config.country.fallback,
        "poptap listening"
    );

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            shutdown.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .context("server error")?;

    Ok(())
}
