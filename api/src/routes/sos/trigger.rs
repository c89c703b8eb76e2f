use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::Value;

use sos_core::services::dispatch::SosTriggerRequest;
use sos_shared::error_codes;

use crate::app::AppState;
use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Handler for POST /api/sos/trigger
///
/// Sends the SOS alert to every emergency contact and returns the dispatch
/// report. An empty body behaves like `{}`.
///
/// # Request Body
///
/// ```json
/// {
///     "emergency_contacts": [{"name": "Mom", "phone": "+15551234567"}],
///     "user_location": {"lat": 40.7128, "lng": -74.0060},
///     "user_info": {"name": "Alex", "uid": "u-123"}
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "sos_triggered": true,
///     "contacts_notified": [
///         {"name": "Mom", "phone": "+15551234567", "status": "sent",
///          "timestamp": "2024-01-01 12:00:00", "sid": "SM..."}
///     ],
///     "message": "Emergency response sequence initiated",
///     "timestamp": "2024-01-01 12:00:00",
///     "user_location": {"lat": 40.7128, "lng": -74.0060},
///     "user_info": {"name": "Alex", "uid": "u-123"}
/// }
/// ```
///
/// ## Errors
/// - 400 `INVALID_JSON` when the body is not valid JSON
/// - 400 `BAD_REQUEST` when the body is JSON but not an object
pub async fn trigger_sos(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let request = match parse_trigger_request(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let report = state.dispatch_service.trigger_sos(request).await;
    HttpResponse::Ok().json(report)
}

fn parse_trigger_request(body: &[u8]) -> Result<SosTriggerRequest, HttpResponse> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SosTriggerRequest::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(
            error = %e,
            event = "sos_invalid_json",
            "Rejected SOS trigger with invalid JSON body"
        );
        ErrorResponse::new(error_codes::INVALID_JSON, "Invalid JSON in request body")
            .to_response(StatusCode::BAD_REQUEST)
    })?;

    match value {
        Value::Null => Ok(SosTriggerRequest::default()),
        Value::Object(_) => serde_json::from_value(value).map_err(|e| {
            tracing::warn!(
                error = %e,
                event = "sos_invalid_body",
                "Rejected SOS trigger with unreadable body"
            );
            ErrorResponse::new(error_codes::BAD_REQUEST, "Request body could not be read")
                .add_detail("reason", e.to_string())
                .to_response(StatusCode::BAD_REQUEST)
        }),
        _ => Err(
            ErrorResponse::new(error_codes::BAD_REQUEST, "Request body must be a JSON object")
                .to_response(StatusCode::BAD_REQUEST),
        ),
    }
}
