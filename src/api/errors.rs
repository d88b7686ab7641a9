use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::DashboardError;

/// `Json` extractor whose rejections use the API's `{"error": ...}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(DashboardError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor whose rejections use the API's `{"error": ...}` body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(DashboardError))]
pub struct ApiQuery<T>(pub T);

impl From<JsonRejection> for DashboardError {
    fn from(rejection: JsonRejection) -> Self {
        DashboardError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for DashboardError {
    fn from(rejection: QueryRejection) -> Self {
        DashboardError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            DashboardError::InvalidRange { .. } => StatusCode::BAD_REQUEST,
            DashboardError::UnknownSite(_) => StatusCode::BAD_REQUEST,
            DashboardError::BadRequest(_) => StatusCode::BAD_REQUEST,
            DashboardError::SessionLimit(_) => StatusCode::TOO_MANY_REQUESTS,
            DashboardError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
