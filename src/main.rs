mod api;
mod app;
mod config;
mod domain;
mod error;
mod estimation;
mod logging;
mod middleware;
mod routes;
mod services;

use anyhow::Result;

use services::LeadCaptureClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        strict_validation = settings.strict_validation,
        "Starting renovation estimator"
    );

    let lead_capture = LeadCaptureClient::new(&settings)?;

    let state = app::AppState::new(settings.clone(), lead_capture);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
