use dayscore::{ClimatologyWindow, DayOfYear, DayScore, DayScoreError, LatLon, RiskThresholds};

#[tokio::main]
async fn main() -> Result<(), DayScoreError> {
    let client = DayScore::new()?;

    // A cycling event cares about milder heat and lighter wind than the
    // defaults, and only trusts the years from 2000 onwards.
    let thresholds = RiskThresholds {
        max_temperature_c: 28.0,
        precipitation_mm: 2.0,
        wind_speed_kmh: 20.0,
    };
    let window = ClimatologyWindow::new(2000, 2023).unwrap();

    let report = client
        .risk_analysis()
        .location(LatLon(52.52, 13.405))
        .day_of_year(DayOfYear::new(245).unwrap())
        .thresholds(thresholds)
        .window(window)
        .call()
        .await?;

    println!("Risk score for the ride: {:.1}/10", report.overall_risk_score);
    for (label, analysis) in [
        ("heat", &report.temperature),
        ("rain", &report.precipitation),
        ("wind", &report.wind),
    ] {
        println!(
            "  {label}: {:.0}% of sampled years, {} samples, trend {}",
            analysis.exceedance_probability_percent,
            analysis.history.years.len(),
            analysis.trend_direction
        );
    }

    Ok(())
}
