/// Per-metric exceedance thresholds used when scoring a day.
///
/// A yearly sample counts towards a metric's exceedance probability when its
/// value is strictly greater than the matching threshold. The defaults describe
/// a day most people would call adverse: a hot day above 35 °C, a wet day with
/// more than 5 mm of rain, or a windy day with gusts above 25 km/h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    /// Daily maximum air temperature threshold in °C.
    pub max_temperature_c: f64,
    /// Daily precipitation total threshold in mm.
    pub precipitation_mm: f64,
    /// Daily maximum wind speed threshold in km/h.
    pub wind_speed_kmh: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            max_temperature_c: 35.0,
            precipitation_mm: 5.0,
            wind_speed_kmh: 25.0,
        }
    }
}
