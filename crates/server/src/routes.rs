pub mod records;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::records::RecordStore;

/// Shared handler state; the store is injected once at startup.
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(records: Arc<dyn RecordStore>) -> Self {
        Self { records }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Any origin, no credentials, preflight cached for 300s.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers([header::LINK])
        .max_age(Duration::from_secs(300))
}

/// Build the full application router: health plus the record CRUD surface.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let record_routes = Router::new()
        .route("/records", get(records::list_records).post(records::create_record))
        .route(
            "/records/:id",
            get(records::get_record)
                .put(records::update_record)
                .delete(records::delete_record),
        );

    Router::new()
        .route("/health", get(health))
        .merge(record_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
