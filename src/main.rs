//! Payroll Engine HTTP server.

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{ConfigLoader, ServerSettings};
use payroll_engine::services::PayrollServices;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = ServerSettings::from_env()?;
    let config = ConfigLoader::load(&settings.config_dir)?.into_config();
    let state = AppState::new(PayrollServices::in_memory(config));

    let listener = tokio::net::TcpListener::bind(settings.host_address).await?;
    info!(address = %settings.host_address, "Payroll engine listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
