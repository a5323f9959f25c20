use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level payload returned by the POWER daily point endpoint.
///
/// The response is GeoJSON-shaped; everything this crate needs lives under
/// `properties.parameter`, so the geometry and metadata blocks are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PowerResponse {
    pub properties: PowerProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerProperties {
    pub parameter: DailySeries,
}

/// The three daily parameter series requested from the archive, each keyed by
/// a `YYYYMMDD` date string.
///
/// `BTreeMap` keeps the keys in ascending date order, so anything derived from
/// a series iteration is already chronological. Days the archive could not
/// measure are filled with `-999` rather than omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    /// Daily maximum air temperature at 2 m in °C.
    #[serde(rename = "T2M_MAX")]
    pub max_temperature: BTreeMap<String, f64>,
    /// Bias-corrected daily precipitation total in mm.
    #[serde(rename = "PRECTOTCORR")]
    pub precipitation: BTreeMap<String, f64>,
    /// Daily maximum wind speed at 10 m in m/s.
    #[serde(rename = "WS10M_MAX")]
    pub wind_speed: BTreeMap<String, f64>,
}

impl DailySeries {
    /// Number of dates present in the temperature series, which the archive
    /// keeps aligned with the other two parameters.
    pub fn day_count(&self) -> usize {
        self.max_temperature.len()
    }
}
