use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Direction of the fitted linear trend for one metric across the sampled years.
///
/// Slopes within ±0.05 units per year are reported as [`TrendDirection::Stable`]
/// so that fitting noise does not get dressed up as a climate signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl Display for TrendDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendDirection::Increasing => "Increasing",
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::Stable => "Stable",
        };
        write!(f, "{label}")
    }
}

/// The yearly observations backing a metric's analysis, in ascending year order.
///
/// `years` and `values` always have the same length and line up index by index,
/// which keeps the payload cheap to plot client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricHistory {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

/// Analysis of a single metric: how often the threshold was exceeded and where
/// the metric is heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAnalysis {
    /// Share of sampled years whose value exceeded the threshold, in percent.
    pub exceedance_probability_percent: f64,
    pub trend_direction: TrendDirection,
    pub history: MetricHistory,
}

/// The full risk assessment for one location and calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    /// Composite score on a 0 to 10 scale, averaging the three exceedance
    /// probabilities. 0 means no sampled year exceeded any threshold.
    pub overall_risk_score: f64,
    pub temperature: MetricAnalysis,
    pub precipitation: MetricAnalysis,
    pub wind: MetricAnalysis,
    /// The upstream archive request this report was derived from.
    pub source_url: String,
}
