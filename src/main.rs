//! crew-ahp server binary.
//!
//! Loads configuration, optionally evaluates the configured decision model
//! once so its ranking shows up in the logs, then serves the HTTP API.

use std::error::Error;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crew_ahp::adapters::http::{app_router, AhpAppState};
use crew_ahp::adapters::rendering::TracingReportRenderer;
use crew_ahp::config::{AppConfig, ServerConfig};
use crew_ahp::ports::ReportRenderer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    info!(
        environment = ?config.server.environment,
        model = config.ahp.model_path.as_deref().unwrap_or("bundled crew sample"),
        strict_reciprocal = config.ahp.strict_reciprocal,
        "Starting crew-ahp"
    );

    let renderer: Arc<dyn ReportRenderer> = Arc::new(TracingReportRenderer::new());
    let state = AhpAppState::from_config(&config.ahp, Some(renderer));

    if config.ahp.render_on_startup {
        if let Err(err) = state.configured_model_handler.handle().await {
            error!(error = %err, "Configured decision model could not be evaluated");
        }
    }

    let app = app_router(
        state,
        &config.server.cors_origins_list(),
        config.server.request_timeout(),
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured filter; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
