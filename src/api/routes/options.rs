use axum::{extract::State, Json};
use crate::api::AppState;
use crate::dashboard::DashboardOptions;

pub async fn get_options(State(state): State<AppState>) -> Json<DashboardOptions> {
    Json(state.options.as_ref().clone())
}
