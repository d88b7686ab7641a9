pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::SliderConfig;
use crate::dashboard::{DashboardOptions, SessionLimits, SessionRegistry};
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub sessions: SessionRegistry,
    pub options: Arc<DashboardOptions>,
}

pub fn create_app_state(store: RecordStore, slider: &SliderConfig, limits: SessionLimits) -> AppState {
    let store = Arc::new(store);
    let options = DashboardOptions::build(&store, slider);
    AppState {
        sessions: SessionRegistry::with_limits(store.clone(), limits),
        options: Arc::new(options),
        store,
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/options", axum::routing::get(routes::options::get_options))
        .route("/api/outcomes", axum::routing::get(routes::charts::get_outcomes))
        .route("/api/distribution", axum::routing::get(routes::charts::get_distribution))
        .route("/api/sessions", axum::routing::post(routes::sessions::create_session))
        .route("/api/sessions/{id}", axum::routing::get(routes::sessions::get_session).delete(routes::sessions::delete_session))
        .route("/api/sessions/{id}/site", axum::routing::put(routes::sessions::select_site))
        .route("/api/sessions/{id}/payload", axum::routing::put(routes::sessions::select_payload))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
