use crate::server::error::ApiError;
use crate::server::types::{HealthResponse, RiskQuery};
use crate::server::AppState;
use crate::types::report::RiskReport;
use axum::extract::{Query, State};
use axum::Json;

/// `GET /weather-risk`
pub async fn weather_risk(
    State(state): State<AppState>,
    Query(query): Query<RiskQuery>,
) -> Result<Json<RiskReport>, ApiError> {
    let params = query.to_params()?;
    tracing::info!(
        location = %params.location,
        day_of_year = %params.day_of_year,
        "computing risk report"
    );

    let report = state
        .client
        .risk_analysis()
        .location(params.location)
        .day_of_year(params.day_of_year)
        .thresholds(params.thresholds)
        .call()
        .await?;

    Ok(Json(report))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
