/// One validated observation of the requested calendar day in a single year.
///
/// Values are already unit-normalized for scoring: temperatures stay in °C and
/// precipitation in mm as reported upstream, while wind speed is converted from
/// the archive's m/s to km/h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySample {
    /// Calendar year the observation was taken in.
    pub year: i32,
    /// Daily maximum air temperature at 2 m. // T2M_MAX (°C)
    pub max_temperature: f64,
    /// Bias-corrected daily precipitation total. // PRECTOTCORR (mm)
    pub precipitation: f64,
    /// Daily maximum wind speed at 10 m, converted to km/h. // WS10M_MAX
    pub wind_speed: f64,
}
