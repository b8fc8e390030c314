use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, RawQuery, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::{Value, json};

use super::{AppState, URI_PREFIX, query};
use crate::domain::manager::client_not_found;
use crate::prelude::{AppError, ClientRecord};

/// Request bodies are plain JSON; anything unreadable or unparsable is a server-side failure.
fn parse_body(body: Result<Bytes, BytesRejection>) -> Result<Value, AppError> {
    let body = body.map_err(|rejection| AppError::Unexpected(rejection.body_text()))?;
    Ok(serde_json::from_slice(&body)?)
}

/// An id that does not decode cannot name a stored client.
fn client_id(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "undecodable client id");
            Err(client_not_found())
        }
    }
}

pub async fn list_clients(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<ClientRecord>>, AppError> {
    let search = query::search_param(raw_query.as_deref());

    let clients = state
        .with_manager(move |manager| manager.list(search.as_deref()))
        .await?;
    Ok(Json(clients))
}

pub async fn create_client(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let raw = parse_body(body)?;

    let client = state
        .with_manager(move |manager| manager.create(&raw))
        .await?;

    let location = format!("{URI_PREFIX}/{}", client.id);
    Ok((
        StatusCode::CREATED,
        [
            (header::LOCATION, location),
            (header::ACCESS_CONTROL_EXPOSE_HEADERS, "Location".to_string()),
        ],
        Json(client),
    ))
}

pub async fn get_client(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ClientRecord>, AppError> {
    let id = client_id(path)?;
    let client = state.with_manager(move |manager| manager.get(&id)).await?;
    Ok(Json(client))
}

pub async fn update_client(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ClientRecord>, AppError> {
    let id = client_id(path)?;
    let patch = parse_body(body)?;

    let client = state
        .with_manager(move |manager| manager.update(&id, &patch))
        .await?;
    Ok(Json(client))
}

pub async fn delete_client(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = client_id(path)?;
    state
        .with_manager(move |manager| manager.delete(&id))
        .await?;
    Ok(Json(json!({})))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
