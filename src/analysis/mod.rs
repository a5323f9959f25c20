pub mod error;
pub mod sampling;
pub mod trend;

use crate::types::report::{MetricAnalysis, MetricHistory, RiskReport};
use crate::types::sample::DailySample;
use crate::types::thresholds::RiskThresholds;

/// The three scored metrics, each reading one field of a [`DailySample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    MaxTemperature,
    Precipitation,
    WindSpeed,
}

impl Metric {
    fn value(self, sample: &DailySample) -> f64 {
        match self {
            Metric::MaxTemperature => sample.max_temperature,
            Metric::Precipitation => sample.precipitation,
            Metric::WindSpeed => sample.wind_speed,
        }
    }
}

/// Scores one metric across the sampled years.
///
/// The exceedance probability is the share of samples whose value lies
/// strictly above `threshold`, and the trend is the classified least squares
/// slope of the metric against the sample years. An empty slice scores zero
/// with a stable trend.
pub fn analyze_metric(samples: &[DailySample], metric: Metric, threshold: f64) -> MetricAnalysis {
    let years: Vec<i32> = samples.iter().map(|s| s.year).collect();
    let values: Vec<f64> = samples.iter().map(|s| metric.value(s)).collect();

    let exceedance_probability_percent = if values.is_empty() {
        0.0
    } else {
        let exceeding = values.iter().filter(|&&value| value > threshold).count();
        exceeding as f64 / values.len() as f64 * 100.0
    };

    let slope = trend::linear_slope(&years, &values);

    MetricAnalysis {
        exceedance_probability_percent,
        trend_direction: trend::classify_slope(slope),
        history: MetricHistory { years, values },
    }
}

/// Builds the full report for one set of samples.
///
/// The composite score averages the three exceedance probabilities and
/// rescales the result to 0..=10, so it hits 10 only when every sampled year
/// exceeded every threshold.
pub fn assess(
    samples: &[DailySample],
    thresholds: &RiskThresholds,
    source_url: String,
) -> RiskReport {
    let temperature = analyze_metric(samples, Metric::MaxTemperature, thresholds.max_temperature_c);
    let precipitation = analyze_metric(samples, Metric::Precipitation, thresholds.precipitation_mm);
    let wind = analyze_metric(samples, Metric::WindSpeed, thresholds.wind_speed_kmh);

    let overall_risk_score = (temperature.exceedance_probability_percent
        + precipitation.exceedance_probability_percent
        + wind.exceedance_probability_percent)
        / 300.0
        * 10.0;

    RiskReport {
        overall_risk_score,
        temperature,
        precipitation,
        wind,
        source_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::TrendDirection;

    fn sample(year: i32, max_temperature: f64, precipitation: f64, wind_speed: f64) -> DailySample {
        DailySample {
            year,
            max_temperature,
            precipitation,
            wind_speed,
        }
    }

    fn flat_samples() -> Vec<DailySample> {
        (1990..1998).map(|y| sample(y, 30.0, 2.0, 20.0)).collect()
    }

    #[test]
    fn probability_counts_strict_exceedance() {
        let samples = vec![
            sample(1990, 36.0, 0.0, 0.0),
            sample(1991, 35.0, 0.0, 0.0), // exactly at threshold, not counted
            sample(1992, 34.0, 0.0, 0.0),
            sample(1993, 40.0, 0.0, 0.0),
        ];
        let analysis = analyze_metric(&samples, Metric::MaxTemperature, 35.0);
        assert_eq!(analysis.exceedance_probability_percent, 50.0);
    }

    #[test]
    fn history_preserves_year_order_and_values() {
        let samples = vec![
            sample(1990, 31.0, 0.0, 0.0),
            sample(1991, 32.0, 0.0, 0.0),
            sample(1992, 33.0, 0.0, 0.0),
        ];
        let analysis = analyze_metric(&samples, Metric::MaxTemperature, 35.0);
        assert_eq!(analysis.history.years, [1990, 1991, 1992]);
        assert_eq!(analysis.history.values, [31.0, 32.0, 33.0]);
    }

    #[test]
    fn warming_series_reports_increasing_trend() {
        let samples: Vec<DailySample> = (0..10)
            .map(|i| sample(1990 + i, 30.0 + 0.2 * f64::from(i), 0.0, 0.0))
            .collect();
        let analysis = analyze_metric(&samples, Metric::MaxTemperature, 35.0);
        assert_eq!(analysis.trend_direction, TrendDirection::Increasing);
    }

    #[test]
    fn score_is_zero_when_nothing_exceeds() {
        let report = assess(&flat_samples(), &RiskThresholds::default(), String::new());
        assert_eq!(report.overall_risk_score, 0.0);
    }

    #[test]
    fn score_is_ten_when_everything_exceeds() {
        let samples: Vec<DailySample> =
            (1990..1998).map(|y| sample(y, 40.0, 12.0, 60.0)).collect();
        let report = assess(&samples, &RiskThresholds::default(), String::new());
        assert_eq!(report.overall_risk_score, 10.0);
    }

    #[test]
    fn score_averages_the_three_probabilities() {
        // Temperature exceeds in half the years, the others never do.
        let samples: Vec<DailySample> = (0..8)
            .map(|i| {
                let temp = if i % 2 == 0 { 40.0 } else { 30.0 };
                sample(1990 + i, temp, 0.0, 0.0)
            })
            .collect();
        let report = assess(&samples, &RiskThresholds::default(), String::new());
        // (50 + 0 + 0) / 300 * 10
        assert!((report.overall_risk_score - 50.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn assessment_is_deterministic() {
        let samples = flat_samples();
        let thresholds = RiskThresholds::default();
        let first = assess(&samples, &thresholds, "url".into());
        let second = assess(&samples, &thresholds, "url".into());
        assert_eq!(first, second);
    }

    #[test]
    fn source_url_is_carried_through() {
        let report = assess(
            &flat_samples(),
            &RiskThresholds::default(),
            "https://example.invalid/point?start=1990".into(),
        );
        assert_eq!(report.source_url, "https://example.invalid/point?start=1990");
    }
}
