//! Axum HTTP surface in front of the risk client.

pub mod error;
pub mod handlers;
pub mod types;

use crate::client::DayScore;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Environment variable holding a comma separated list of allowed CORS
/// origins, or `*` for a fully permissive policy.
pub const CORS_ORIGINS_ENV: &str = "DAYSCORE_CORS_ORIGINS";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<DayScore>,
}

impl AppState {
    pub fn new(client: DayScore) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn cors_layer() -> CorsLayer {
    let configured = std::env::var(CORS_ORIGINS_ENV).unwrap_or_default();
    let configured = configured.trim();

    if configured == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = if configured.is_empty() {
        // Default to the usual local frontend dev servers.
        vec![
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ]
    } else {
        configured
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {origin:?}");
                    None
                }
            })
            .collect()
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Builds the application router with CORS and request tracing attached.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/weather-risk", get(handlers::weather_risk))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves the router until the process is stopped.
pub async fn run_server(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, create_router(state)).await
}
