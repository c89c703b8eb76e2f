//! CORS middleware configuration for cross-origin requests.
//!
//! The mobile and web clients call the SOS endpoints directly. The
//! configuration is environment-aware, with different settings for
//! development and production environments.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use sos_shared::CorsConfig;

/// Creates a CORS middleware instance from the loaded configuration.
///
/// In development mode, this allows any origin for easier testing.
/// In production mode, this restricts origins to `ALLOWED_ORIGINS`.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.allow_any_origin {
        create_development_cors(config.max_age)
    } else {
        create_production_cors(config)
    }
}

/// Creates CORS configuration for development environment.
fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(max_age)
}

/// Creates CORS configuration for production environment.
///
/// Only origins listed in the configuration are allowed; with none
/// configured, cross-origin requests are refused.
fn create_production_cors(config: &CorsConfig) -> Cors {
    tracing::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    if config.allowed_origins.is_empty() {
        tracing::warn!("No ALLOWED_ORIGINS configured, cross-origin requests will be rejected");
    }

    cors
}
