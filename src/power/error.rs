use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the POWER archive.
#[derive(Debug, Error)]
pub enum PowerApiError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode archive response from {0}")]
    Decode(String, #[source] reqwest::Error),
}
