use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, header},
    middleware::Next,
};

use crate::templates_structs::ApiErrorResponse;

/// Middleware function for the JSON API: `POST` and `PUT` must declare an
/// `application/json` body. Browsers cannot send that cross-origin without a
/// preflight, so this doubles as the API's CSRF guard.
pub async fn require_json(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let needs_json = matches!(*req.method(), Method::POST | Method::PUT);

    if needs_json && !is_json(&req) {
        log::warn!("Rejected {} {}: not a JSON request", req.method(), req.path());
        let response = HttpResponse::UnsupportedMediaType().json(ApiErrorResponse {
            error: "Content-Type must be application/json".to_string(),
        });
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

fn is_json(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
