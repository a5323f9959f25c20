//! Main entry point for computing day-of-year weather risk reports.

use crate::analysis::assess;
use crate::analysis::sampling::collect_samples;
use crate::error::DayScoreError;
use crate::power::client::PowerClient;
use crate::types::day_of_year::DayOfYear;
use crate::types::location::LatLon;
use crate::types::report::RiskReport;
use crate::types::thresholds::RiskThresholds;
use crate::types::window::ClimatologyWindow;
use bon::bon;

/// Client for scoring how risky a calendar day historically is at a location.
///
/// A report is built in one round trip: the client fetches the daily archive
/// series for the location, keeps the requested day-of-year across all years,
/// and scores the surviving samples against the thresholds.
///
/// # Examples
///
/// ```rust,no_run
/// use dayscore::{DayScore, DayScoreError, DayOfYear, LatLon};
///
/// #[tokio::main]
/// async fn main() -> Result<(), DayScoreError> {
///     let client = DayScore::new()?;
///     let report = client
///         .risk_analysis()
///         .location(LatLon(48.8566, 2.3522))
///         .day_of_year(DayOfYear::new(196).unwrap())
///         .call()
///         .await?;
///     println!("risk score: {:.1}/10", report.overall_risk_score);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DayScore {
    power: PowerClient,
}

#[bon]
impl DayScore {
    /// Creates a client backed by the public POWER archive endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, DayScoreError> {
        Ok(Self {
            power: PowerClient::new()?,
        })
    }

    /// Creates a client on top of an existing [`PowerClient`], which is how
    /// tests point the analysis at a different endpoint or timeout.
    pub fn with_power_client(power: PowerClient) -> Self {
        Self { power }
    }

    /// Builds the risk report for one location and calendar day.
    ///
    /// # Arguments (builder methods)
    ///
    /// * `location(LatLon)`: Coordinate to analyze. **Required.**
    /// * `day_of_year(DayOfYear)`: 1-based ordinal of the calendar day.
    ///   **Required.**
    /// * `thresholds(RiskThresholds)`: Optional per-metric exceedance
    ///   thresholds. Defaults to 35 °C, 5 mm and 25 km/h.
    /// * `window(ClimatologyWindow)`: Optional year range to sample.
    ///   Defaults to 1990 through 2023.
    ///
    /// # Errors
    ///
    /// Returns [`DayScoreError::PowerApi`] when the archive request fails and
    /// [`DayScoreError::Analysis`] when fewer than five usable yearly samples
    /// survive filtering.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use dayscore::{DayScore, DayScoreError, DayOfYear, LatLon, RiskThresholds};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), DayScoreError> {
    ///     let client = DayScore::new()?;
    ///     let report = client
    ///         .risk_analysis()
    ///         .location(LatLon(52.52, 13.405))
    ///         .day_of_year(DayOfYear::new(1).unwrap())
    ///         .thresholds(RiskThresholds {
    ///             max_temperature_c: 30.0,
    ///             ..Default::default()
    ///         })
    ///         .call()
    ///         .await?;
    ///     println!("{}", report.temperature.trend_direction);
    ///     Ok(())
    /// }
    /// ```
    #[builder]
    pub async fn risk_analysis(
        &self,
        location: LatLon,
        day_of_year: DayOfYear,
        thresholds: Option<RiskThresholds>,
        window: Option<ClimatologyWindow>,
    ) -> Result<RiskReport, DayScoreError> {
        let thresholds = thresholds.unwrap_or_default();
        let window = window.unwrap_or_default();

        let source_url = self.power.daily_point_url(location, window);
        let series = self.power.daily_series(location, window).await?;
        let samples = collect_samples(&series, day_of_year)?;
        Ok(assess(&samples, &thresholds, source_url))
    }
}
