// Main entry point - Dependency injection and server setup
use std::sync::{Arc, LazyLock};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use vizo_dashboard::application::dashboard_service::DashboardService;
use vizo_dashboard::application::fixture::DASHBOARD_DATA;
use vizo_dashboard::infrastructure::config::load_config;
use vizo_dashboard::infrastructure::fixture_repository::FixtureRepository;
use vizo_dashboard::presentation::app_state::AppState;
use vizo_dashboard::presentation::handlers::{
    get_channel, get_dashboard, get_section, get_validation, health_check,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_config()?;
    let addr = config.server.bind_addr()?;

    // Build the fixture up front and report its data quality
    let data = LazyLock::force(&DASHBOARD_DATA);
    let report = data.validate();
    for error in &report.errors {
        tracing::error!("Dashboard fixture: {}", error);
    }
    for warning in &report.warnings {
        tracing::warn!("Dashboard fixture: {}", warning);
    }

    // Create repository and services
    let repository = Arc::new(FixtureRepository::new());
    let dashboard_service = DashboardService::new(repository);

    let state = Arc::new(AppState {
        dashboard_service,
        compress_responses: config.server.compress_responses,
    });

    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/dashboard/validation", get(get_validation))
        .route("/api/dashboard/social/:channel", get(get_channel))
        .route("/api/dashboard/sections/:section", get(get_section))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Starting vizo-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
