use crate::types::report::TrendDirection;

/// Slopes whose magnitude stays at or below this band count as noise and are
/// reported as [`TrendDirection::Stable`].
pub const TREND_DEADBAND: f64 = 0.05;

/// Ordinary least squares slope of `values` against `years`.
///
/// Both slices must be the same length. Degenerate inputs (fewer than two
/// points, or all points in the same year) have no fittable line and yield a
/// slope of zero.
pub fn linear_slope(years: &[i32], values: &[f64]) -> f64 {
    debug_assert_eq!(years.len(), values.len());
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let x_mean = years.iter().map(|&y| f64::from(y)).sum::<f64>() / n;
    let y_mean = values.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (&year, &value) in years.iter().zip(values) {
        let dx = f64::from(year) - x_mean;
        covariance += dx * (value - y_mean);
        variance += dx * dx;
    }

    if variance == 0.0 {
        0.0
    } else {
        covariance / variance
    }
}

/// Buckets a fitted slope into a reportable direction.
///
/// The comparison is strict on both sides, so a slope of exactly ±0.05 units
/// per year is still [`TrendDirection::Stable`].
pub fn classify_slope(slope: f64) -> TrendDirection {
    if slope > TREND_DEADBAND {
        TrendDirection::Increasing
    } else if slope < -TREND_DEADBAND {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_of_perfect_line_is_exact() {
        // value = 2 * year - 3000
        let years = [1990, 1991, 1992, 1993, 1994];
        let values: Vec<f64> = years.iter().map(|&y| 2.0 * f64::from(y) - 3000.0).collect();
        let slope = linear_slope(&years, &values);
        assert!((slope - 2.0).abs() < 1e-9);
    }

    #[test]
    fn slope_of_constant_series_is_zero() {
        let years = [1990, 1995, 2000, 2005];
        let values = [7.5, 7.5, 7.5, 7.5];
        assert_eq!(linear_slope(&years, &values), 0.0);
    }

    #[test]
    fn slope_is_insensitive_to_year_offsets() {
        let early_years = [1990, 1991, 1992, 1993];
        let late_years = [2020, 2021, 2022, 2023];
        let values = [1.0, 4.0, 2.0, 5.0];
        let early = linear_slope(&early_years, &values);
        let late = linear_slope(&late_years, &values);
        assert!((early - late).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs_fit_no_line() {
        assert_eq!(linear_slope(&[], &[]), 0.0);
        assert_eq!(linear_slope(&[2000], &[3.0]), 0.0);
        assert_eq!(linear_slope(&[2000, 2000], &[1.0, 9.0]), 0.0);
    }

    #[test]
    fn deadband_boundaries_classify_strictly() {
        assert_eq!(classify_slope(0.06), TrendDirection::Increasing);
        assert_eq!(classify_slope(0.05), TrendDirection::Stable);
        assert_eq!(classify_slope(0.0), TrendDirection::Stable);
        assert_eq!(classify_slope(-0.05), TrendDirection::Stable);
        assert_eq!(classify_slope(-0.06), TrendDirection::Decreasing);
    }
}
