//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use sos_core::services::dispatch::{DispatchService, DispatchServiceConfig};
use sos_infra::sms::create_alert_transport;
use sos_shared::{error_codes, AppConfig};

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::routes::{health::health_check, sos::trigger_sos};

/// Application state that holds shared services
pub struct AppState {
    pub dispatch_service: Arc<DispatchService>,
}

impl AppState {
    pub fn new(dispatch_service: Arc<DispatchService>) -> Self {
        Self { dispatch_service }
    }

    /// Build the dispatch service and its transport from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let transport = create_alert_transport(&config.sms);
        let dispatch_config = DispatchServiceConfig::from(&config.dispatch);
        Self::new(Arc::new(DispatchService::new(transport, dispatch_config)))
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    cors: Cors,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(web::PayloadConfig::new(max_payload_size))
        .wrap(cors)
        .wrap(TracingLogger::default())
        .configure(configure_routes)
        .default_service(web::route().to(not_found))
}

/// Register the API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health_check))
            .service(
                web::resource("/sos/trigger")
                    .route(web::post().to(trigger_sos))
                    .default_service(web::route().to(method_not_allowed)),
            ),
    );
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}

async fn method_not_allowed() -> HttpResponse {
    ErrorResponse::new(error_codes::METHOD_NOT_ALLOWED, "Method not allowed")
        .to_response(StatusCode::METHOD_NOT_ALLOWED)
}
