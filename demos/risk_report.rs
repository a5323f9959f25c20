use dayscore::{DayOfYear, DayScore, DayScoreError, LatLon};

#[tokio::main]
async fn main() -> Result<(), DayScoreError> {
    let client = DayScore::new()?;

    // How risky is July 15th in Paris, judged by the last three decades?
    let report = client
        .risk_analysis()
        .location(LatLon(48.8566, 2.3522))
        .day_of_year(DayOfYear::new(196).unwrap())
        .call()
        .await?;

    println!("Overall risk score: {:.1}/10", report.overall_risk_score);
    println!(
        "Hot day (> 35 °C): {:.0}% of years, trend {}",
        report.temperature.exceedance_probability_percent, report.temperature.trend_direction
    );
    println!(
        "Wet day (> 5 mm): {:.0}% of years, trend {}",
        report.precipitation.exceedance_probability_percent, report.precipitation.trend_direction
    );
    println!(
        "Windy day (> 25 km/h): {:.0}% of years, trend {}",
        report.wind.exceedance_probability_percent, report.wind.trend_direction
    );
    println!("Derived from: {}", report.source_url);

    Ok(())
}
