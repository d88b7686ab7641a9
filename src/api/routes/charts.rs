use axum::{extract::State, Json};
use crate::api::errors::ApiQuery;
use crate::api::models::SelectionQuery;
use crate::api::AppState;
use crate::dashboard::{render_distribution, render_outcomes, ChartView, Distribution};
use crate::errors::DashboardError;
use crate::models::OutcomeSummary;

pub async fn get_outcomes(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SelectionQuery>,
) -> Result<Json<ChartView<OutcomeSummary>>, DashboardError> {
    let criteria = query.into_criteria(state.store.payload_bounds());
    render_outcomes(&state.store, &criteria).map(Json)
}

pub async fn get_distribution(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SelectionQuery>,
) -> Result<Json<ChartView<Distribution>>, DashboardError> {
    let criteria = query.into_criteria(state.store.payload_bounds());
    render_distribution(&state.store, &criteria).map(Json)
}
