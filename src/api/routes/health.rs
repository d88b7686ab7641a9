use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "launchboard",
        "version": env!("CARGO_PKG_VERSION"),
        "git_hash": option_env!("GIT_HASH"),
        "built_at": option_env!("BUILD_TIMESTAMP"),
        "records": state.store.len(),
        "sites": state.store.distinct_sites().len(),
        "sessions": state.sessions.len(),
        "max_sessions": state.sessions.limits().max_sessions,
    }))
}
