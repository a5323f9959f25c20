use crate::power::error::PowerApiError;
use crate::power::model::{DailySeries, PowerResponse};
use crate::types::location::LatLon;
use crate::types::window::ClimatologyWindow;
use log::{info, warn};
use std::time::Duration;

/// Endpoint serving daily point data from the NASA POWER archive.
pub const POWER_DAILY_POINT_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";

/// The parameters requested from the archive, in the order they appear in the
/// query string: daily maximum temperature, corrected precipitation, and daily
/// maximum wind speed.
pub const POWER_DAILY_PARAMETERS: &str = "T2M_MAX,PRECTOTCORR,WS10M_MAX";

/// POWER community whose unit conventions the archive applies. `RE` reports
/// temperatures in °C and wind in m/s.
const POWER_COMMUNITY: &str = "RE";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin async client for the POWER daily point endpoint.
///
/// One instance holds a connection pool and can be shared freely; cloning is
/// cheap because the underlying [`reqwest::Client`] is reference counted.
#[derive(Debug, Clone)]
pub struct PowerClient {
    http: reqwest::Client,
    base_url: String,
}

impl PowerClient {
    /// Creates a client against the public POWER endpoint with a 30 second
    /// request timeout.
    pub fn new() -> Result<Self, PowerApiError> {
        Self::with_config(POWER_DAILY_POINT_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit endpoint and timeout. Pointing
    /// `base_url` somewhere else is mainly useful for tests and mirrors.
    pub fn with_config(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PowerApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PowerApiError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// The exact request URL for a location and year window.
    ///
    /// Exposed so reports can cite the archive request they were derived from.
    pub fn daily_point_url(&self, location: LatLon, window: ClimatologyWindow) -> String {
        format!(
            "{}?parameters={}&community={}&longitude={}&latitude={}&start={}&end={}&format=JSON",
            self.base_url,
            POWER_DAILY_PARAMETERS,
            POWER_COMMUNITY,
            location.longitude(),
            location.latitude(),
            window.start_year(),
            window.end_year(),
        )
    }

    /// Fetches the three daily parameter series for `location` across `window`.
    pub async fn daily_series(
        &self,
        location: LatLon,
        window: ClimatologyWindow,
    ) -> Result<DailySeries, PowerApiError> {
        let url = self.daily_point_url(location, window);
        info!("Requesting daily series from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PowerApiError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                warn!("Archive returned an error status for {}: {:?}", url, e);
                return match e.status() {
                    Some(status) => Err(PowerApiError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }),
                    None => Err(PowerApiError::NetworkRequest(url, e)),
                };
            }
        };

        let decoded: PowerResponse = response
            .json()
            .await
            .map_err(|e| PowerApiError::Decode(url, e))?;

        Ok(decoded.properties.parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_matches_archive_query_layout() {
        let client = PowerClient::new().unwrap();
        let url = client.daily_point_url(LatLon(48.8566, 2.3522), ClimatologyWindow::default());
        assert_eq!(
            url,
            "https://power.larc.nasa.gov/api/temporal/daily/point\
             ?parameters=T2M_MAX,PRECTOTCORR,WS10M_MAX&community=RE\
             &longitude=2.3522&latitude=48.8566&start=1990&end=2023&format=JSON"
        );
    }

    #[test]
    fn url_respects_custom_base_and_window() {
        let client =
            PowerClient::with_config("http://localhost:8080/point", Duration::from_secs(5))
                .unwrap();
        let window = ClimatologyWindow::new(2000, 2010).unwrap();
        let url = client.daily_point_url(LatLon(-33.87, 151.21), window);
        assert!(url.starts_with("http://localhost:8080/point?"));
        assert!(url.contains("longitude=151.21&latitude=-33.87"));
        assert!(url.contains("start=2000&end=2010"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_network_error() {
        // Nothing listens on this port, so the connection is refused.
        let client =
            PowerClient::with_config("http://127.0.0.1:9/point", Duration::from_secs(2)).unwrap();
        let result = client
            .daily_series(LatLon(48.8566, 2.3522), ClimatologyWindow::default())
            .await;
        assert!(matches!(result, Err(PowerApiError::NetworkRequest(_, _))));
    }
}
