use crate::server::error::ApiError;
use crate::types::day_of_year::DayOfYear;
use crate::types::location::LatLon;
use crate::types::thresholds::RiskThresholds;
use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET /weather-risk`.
///
/// Threshold overrides are optional; anything left out keeps its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskQuery {
    pub lat: f64,
    pub lon: f64,
    pub day_of_year: u16,
    pub temp_threshold: Option<f64>,
    pub rain_threshold: Option<f64>,
    pub wind_threshold: Option<f64>,
}

/// A validated request, ready to hand to the client.
#[derive(Debug, Clone, Copy)]
pub struct RiskParams {
    pub location: LatLon,
    pub day_of_year: DayOfYear,
    pub thresholds: RiskThresholds,
}

impl RiskQuery {
    /// Validates ranges and folds threshold overrides into a parameter set.
    pub fn to_params(&self) -> Result<RiskParams, ApiError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(ApiError::BadRequest(format!(
                "Latitude {} is outside the valid range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(ApiError::BadRequest(format!(
                "Longitude {} is outside the valid range [-180, 180]",
                self.lon
            )));
        }
        let day_of_year = DayOfYear::new(self.day_of_year)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let mut thresholds = RiskThresholds::default();
        if let Some(temperature) = self.temp_threshold {
            thresholds.max_temperature_c = temperature;
        }
        if let Some(rain) = self.rain_threshold {
            thresholds.precipitation_mm = rain;
        }
        if let Some(wind) = self.wind_threshold {
            thresholds.wind_speed_kmh = wind;
        }

        Ok(RiskParams {
            location: LatLon(self.lat, self.lon),
            day_of_year,
            thresholds,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
