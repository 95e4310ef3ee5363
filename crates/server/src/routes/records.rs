use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use service::{errors::ServiceError, records::Record};
use tracing::{info, warn};

use crate::errors::JsonApiError;
use crate::routes::AppState;

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, JsonApiError> {
    let body = serde_json::to_vec(value).map_err(|e| ServiceError::Serialization(e.to_string()))?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Accepts `application/json`, with or without parameters such as `charset`.
fn require_json(headers: &HeaderMap) -> Result<(), JsonApiError> {
    let got = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let essence = got.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case("application/json") {
        Ok(())
    } else {
        warn!(content_type = %got, "rejecting non-json create");
        Err(JsonApiError::unsupported_media_type(got))
    }
}

/// GET /records
pub async fn list_records(State(state): State<AppState>) -> Result<Response, JsonApiError> {
    let records = state.records.list().await;
    info!(count = records.len(), "list records");
    json_response(StatusCode::OK, &records)
}

/// POST /records; keyed by the body's own `id`.
pub async fn create_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, JsonApiError> {
    require_json(&headers)?;
    let record = Record::from_json(&body)?;
    let id = record.id.clone();
    state.records.put(&id, record).await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /records/:id
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, JsonApiError> {
    let record = state.records.get(&id).await?;
    json_response(StatusCode::OK, &record)
}

/// PUT /records/:id; full replacement, path id wins over body id.
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, JsonApiError> {
    let record = Record::from_json(&body)?;
    state.records.put(&id, record).await;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /records/:id
pub async fn delete_record(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.records.remove(&id).await;
    StatusCode::NO_CONTENT
}
