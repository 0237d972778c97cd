// Mapping of use-case errors onto HTTP responses
use crate::application::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            DashboardError::UnknownChannel(_) | DashboardError::UnknownSection(_) => {
                StatusCode::NOT_FOUND
            }
            DashboardError::Repository(e) => {
                tracing::error!("Error fetching dashboard: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
