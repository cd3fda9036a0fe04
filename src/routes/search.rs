use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, HealthResponse, SearchRequest};
use crate::services::SearchService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub search: SearchService,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/search", web::get().to(search))
        .route("/suggestions", web::get().to(suggestions));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.search.source().name().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Search endpoint returning a rendered fragment
///
/// GET /api/v1/search?query={text}&zipcode={key}
///
/// Response body:
/// ```json
/// {
///   "html": "<div ...>...</div>",
///   "meta": { "count": 2, "time_ms": 143, "query": "coffee", "zipcode": "10001", "total": 10 }
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return validation_failed(errors);
    }

    let query = params.into_inner().into_query();
    let response = state.search.handle_search(&query).await;

    HttpResponse::Ok().json(response)
}

/// Suggestions endpoint returning ranked records as JSON
///
/// GET /api/v1/suggestions?query={text}&zipcode={key}
async fn suggestions(
    state: web::Data<AppState>,
    params: web::Query<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        tracing::info!("Validation failed for suggestions request: {:?}", errors);
        return validation_failed(errors);
    }

    let query = params.into_inner().into_query();

    match state.search.suggestions(&query).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            tracing::error!("Failed to fetch suggestions for {:?}: {}", query, e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to fetch suggestions".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}
