use anyhow::Context;
use clap::Parser;
use dayscore::server::{run_server, AppState};
use dayscore::{DayScore, PowerClient, POWER_DAILY_POINT_URL};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Serves day-of-year weather risk reports over HTTP.
#[derive(Debug, Parser)]
#[command(name = "dayscore-server", version, about)]
struct Cli {
    /// Interface to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3001)]
    port: u16,

    /// Timeout for upstream archive requests, in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dayscore=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let power = PowerClient::with_config(
        POWER_DAILY_POINT_URL,
        Duration::from_secs(cli.timeout_secs),
    )
    .context("Failed to build archive client")?;
    let state = AppState::new(DayScore::with_power_client(power));

    let addr = format!("{}:{}", cli.host, cli.port);
    run_server(&addr, state)
        .await
        .with_context(|| format!("Server failed on {addr}"))?;
    Ok(())
}
