use crate::analysis::error::AnalysisError;
use crate::power::model::DailySeries;
use crate::types::day_of_year::DayOfYear;
use crate::types::sample::DailySample;
use chrono::{Datelike, NaiveDate};
use log::warn;

/// The archive encodes missing observations as `-999`. Anything at or below
/// this floor is treated as missing and discarded before any statistics run.
pub const SENTINEL_FLOOR: f64 = -99.0;

/// Minimum number of valid yearly samples required before an analysis is
/// considered meaningful.
pub const MIN_SAMPLES: usize = 5;

const MS_TO_KMH: f64 = 3.6;

/// Extracts one [`DailySample`] per year from `series`, keeping only dates
/// whose ordinal within their own year equals `day_of_year`.
///
/// A date only yields a sample when all three parameters are present for it
/// and none of them carries a fill value. Wind speed is converted to km/h
/// here so downstream thresholds compare like with like. The result is in
/// ascending year order.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] when fewer than
/// [`MIN_SAMPLES`] dates survive filtering.
pub fn collect_samples(
    series: &DailySeries,
    day_of_year: DayOfYear,
) -> Result<Vec<DailySample>, AnalysisError> {
    let mut samples = Vec::new();

    for (date_key, &max_temperature) in &series.max_temperature {
        let Ok(date) = NaiveDate::parse_from_str(date_key, "%Y%m%d") else {
            warn!("Skipping unparseable date key {date_key:?} in archive series");
            continue;
        };
        if !day_of_year.matches(date) {
            continue;
        }

        // A year only counts when every parameter reported that date.
        let (Some(&precipitation), Some(&wind_speed_ms)) = (
            series.precipitation.get(date_key),
            series.wind_speed.get(date_key),
        ) else {
            continue;
        };

        if max_temperature <= SENTINEL_FLOOR
            || precipitation <= SENTINEL_FLOOR
            || wind_speed_ms <= SENTINEL_FLOOR
        {
            continue;
        }

        samples.push(DailySample {
            year: date.year(),
            max_temperature,
            precipitation,
            wind_speed: wind_speed_ms * MS_TO_KMH,
        });
    }

    if samples.len() < MIN_SAMPLES {
        return Err(AnalysisError::InsufficientData {
            found: samples.len(),
            required: MIN_SAMPLES,
        });
    }
    Ok(samples)
}
