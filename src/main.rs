// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use carbonboard::application::dashboard_service::DashboardService;
use carbonboard::application::emissions_source::EmissionsSource;
use carbonboard::infrastructure::api_client::ApiClient;
use carbonboard::infrastructure::api_source::ApiSource;
use carbonboard::infrastructure::config::load_app_config;
use carbonboard::infrastructure::csv_source::CsvSource;
use carbonboard::infrastructure::reference_data;
use carbonboard::presentation::app_state::AppState;
use carbonboard::presentation::handlers::{
    dashboard_script, experiment_dashboard, global_comparison, health_check, index,
    list_experiments,
};

/// Dashboard for the carbon emissions of machine-learning experiments
#[derive(Debug, Parser)]
#[command(name = "carbonboard", version)]
struct Cli {
    /// Emissions CSV export; the remote API is used when omitted
    filepath: Option<PathBuf>,

    /// Port to serve the dashboard on
    #[arg(long, default_value_t = 8050)]
    port: u16,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --debug
    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    let reference = Arc::new(match &config.dashboard.canada_geojson {
        Some(path) => reference_data::with_canada_geojson(path)?,
        None => reference_data::embedded()?,
    });

    // Pick the emissions source (infrastructure layer)
    let source: Arc<dyn EmissionsSource> = match &cli.filepath {
        Some(path) => {
            tracing::info!("Reading emissions from {}", path.display());
            Arc::new(CsvSource::from_path(path)?)
        }
        None => {
            tracing::info!("Reading emissions from {}", config.api.host);
            let client = ApiClient::new(&config.api)?;
            Arc::new(ApiSource::new(client, config.dashboard.project_id.clone()))
        }
    };

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service: DashboardService::new(source, reference.clone()),
        reference,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/assets/dashboard.js", get(dashboard_script))
        .route("/healthz", get(health_check))
        .route("/api/experiments", get(list_experiments))
        .route("/api/experiments/:id/dashboard", get(experiment_dashboard))
        .route("/api/global", get(global_comparison))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, cli.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.server.host, cli.port))?;
    tracing::info!("Starting carbonboard on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
