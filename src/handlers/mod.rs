pub mod api;
pub mod home;
pub mod middleware;
pub mod pages;

use actix_web::{HttpRequest, HttpResponse, error, web};

use crate::models::meeting::Meeting;
use crate::models::toner::Toner;
use crate::templates_structs::{ApiErrorResponse, HealthResponse};

/// Register every route. The default (404) service is attached by the
/// caller with [`not_found`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/", web::get().to(home::index))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api")
                .wrap(actix_web::middleware::from_fn(middleware::require_json))
                .service(api::resource::<Meeting>("/meetings"))
                .service(api::resource::<Toner>("/toners")),
        )
        .configure(pages::routes::<Meeting>)
        .configure(pages::routes::<Toner>);
}

/// Malformed or mistyped JSON bodies become 400 `{error}`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        log::warn!("Rejected JSON body on {} {}: {}", req.method(), req.path(), err);
        let response = HttpResponse::BadRequest().json(ApiErrorResponse {
            error: format!("Invalid request body: {err}"),
        });
        error::InternalError::from_response(err, response).into()
    })
}

/// Query strings that do not deserialize (e.g. a repeated `id`) become
/// 400 `{error}` as well.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req: &HttpRequest| {
        log::warn!("Rejected query string on {} {}: {}", req.method(), req.path(), err);
        let response = HttpResponse::BadRequest().json(ApiErrorResponse {
            error: format!("Invalid query string: {err}"),
        });
        error::InternalError::from_response(err, response).into()
    })
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiErrorResponse {
        error: "Not found".to_string(),
    })
}
