//! Generic CRUD handlers, one set shared by every resource.

use super::error::ApiError;
use super::{DeleteStyle, ResourceState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use resource_store::{Payload, RecordId, Resource};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, instrument};

/// Accepts only a well-formed JSON object.
fn object_body(body: Result<Json<Value>, JsonRejection>) -> Result<Payload, ApiError> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) => Err(ApiError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

fn key<T: Resource>(state: &ResourceState<T>, raw: &str) -> RecordId {
    RecordId::parse_key(raw, state.keys)
}

#[instrument(skip_all, fields(resource = T::NAME))]
pub async fn list<T: Resource + Serialize>(
    State(state): State<ResourceState<T>>,
) -> Result<Json<Vec<T>>, ApiError> {
    let items = state.client.list().await?;
    debug!(count = items.len(), "Listed");
    Ok(Json(items))
}

#[instrument(skip_all, fields(resource = T::NAME, id = %raw))]
pub async fn fetch<T: Resource + Serialize>(
    State(state): State<ResourceState<T>>,
    Path(raw): Path<String>,
) -> Result<Json<T>, ApiError> {
    let item = state.client.get(key(&state, &raw)).await?;
    Ok(Json(item))
}

#[instrument(skip_all, fields(resource = T::NAME))]
pub async fn create<T: Resource + Serialize>(
    State(state): State<ResourceState<T>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), ApiError> {
    let payload = object_body(body)?;
    let item = state.client.create(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip_all, fields(resource = T::NAME, id = %raw))]
pub async fn update<T: Resource + Serialize>(
    State(state): State<ResourceState<T>>,
    Path(raw): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<T>, ApiError> {
    let payload = object_body(body)?;
    let item = state.client.update(key(&state, &raw), payload).await?;
    Ok(Json(item))
}

#[instrument(skip_all, fields(resource = T::NAME, id = %raw))]
pub async fn remove<T: Resource + Serialize>(
    State(state): State<ResourceState<T>>,
    Path(raw): Path<String>,
) -> Result<Response, ApiError> {
    state.client.delete(key(&state, &raw)).await?;
    let response = match state.delete_style {
        DeleteStyle::NoContent => StatusCode::NO_CONTENT.into_response(),
        DeleteStyle::Message => {
            Json(json!({ "message": format!("{} deleted", T::NAME) })).into_response()
        }
    };
    Ok(response)
}

pub async fn banner() -> &'static str {
    "Catalog API is running"
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn no_route() -> ApiError {
    ApiError::NoRoute
}
