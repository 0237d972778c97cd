// HTTP request handlers
use crate::application::error::DashboardError;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard payload
pub async fn get_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let data = state.dashboard_service.get_dashboard().await?;
    Ok(respond(&state, &headers, data).await)
}

/// Stats for one social channel (instagram, whatsapp, facebook)
pub async fn get_channel(
    Path(channel): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let stats = state.dashboard_service.get_channel(&channel).await?;
    Ok(respond(&state, &headers, stats).await)
}

/// One top-level section, e.g. `funnel` or `advancedMetrics`
pub async fn get_section(
    Path(section): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let value = state.dashboard_service.get_section(&section).await?;
    Ok(respond(&state, &headers, &value).await)
}

/// Structural validation report for the payload currently served
pub async fn get_validation(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let report = state.dashboard_service.validate().await?;
    Ok(respond(&state, &headers, &report).await)
}

async fn respond<T: Serialize + ?Sized>(state: &AppState, headers: &HeaderMap, data: &T) -> Response {
    let compress = state.compress_responses && accepts_brotli(headers);
    match json_response(data, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
