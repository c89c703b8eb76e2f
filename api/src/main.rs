use actix_web::{web, HttpServer};
use anyhow::Context;

use sos_api::app::{create_app, AppState};
use sos_api::logging::init_tracing;
use sos_api::middleware::cors::create_cors;
use sos_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        "Starting Kiddoo SOS API Server"
    );

    let state = web::Data::new(AppState::from_config(&config));
    tracing::info!(
        provider = state.dispatch_service.provider_name(),
        live = state.dispatch_service.is_live(),
        "SOS dispatch service ready"
    );

    let bind_address = config.server.bind_address();
    let cors_config = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), create_cors(&cors_config), max_payload_size)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    tracing::info!(address = %bind_address, "Server listening");

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated unexpectedly")
}
