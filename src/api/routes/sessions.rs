use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use crate::api::errors::ApiJson;
use crate::api::models::{SelectPayloadRequest, SelectSiteRequest};
use crate::api::AppState;
use crate::dashboard::SessionSnapshot;
use crate::errors::DashboardError;
use crate::models::PayloadRange;

pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), DashboardError> {
    let snapshot = state.sessions.create()?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, DashboardError> {
    state.sessions.get(&id).map(Json)
}

pub async fn select_site(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<SelectSiteRequest>,
) -> Result<Json<SessionSnapshot>, DashboardError> {
    state.sessions.select_site(&id, req.site).map(Json)
}

pub async fn select_payload(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<SelectPayloadRequest>,
) -> Result<Json<SessionSnapshot>, DashboardError> {
    state.sessions.select_payload(&id, PayloadRange::new(req.min, req.max)).map(Json)
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, DashboardError> {
    state.sessions.remove(&id)?;
    Ok(Json(json!({"deleted": true})))
}
