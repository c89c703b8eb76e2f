use actix_web::{web, HttpResponse};

use sos_shared::HealthResponse;

use crate::app::AppState;

/// Handler for GET /api/health
///
/// Reports whether the SOS service is up and whether alerts go to a live
/// SMS provider.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let service = &state.dispatch_service;
    let response = HealthResponse::healthy(service.provider_name(), env!("CARGO_PKG_VERSION"))
        .with_service("sos_service", true)
        .with_service("twilio_configured", service.is_live());

    HttpResponse::Ok().json(response)
}
