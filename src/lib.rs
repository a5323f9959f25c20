mod analysis;
mod client;
mod error;
mod power;
mod types;

pub mod server;

pub use client::DayScore;
pub use error::DayScoreError;

pub use analysis::sampling::{collect_samples, MIN_SAMPLES, SENTINEL_FLOOR};
pub use analysis::trend::{classify_slope, linear_slope, TREND_DEADBAND};
pub use analysis::{analyze_metric, assess, Metric};

pub use power::client::{PowerClient, POWER_DAILY_PARAMETERS, POWER_DAILY_POINT_URL};
pub use power::model::{DailySeries, PowerProperties, PowerResponse};

pub use types::day_of_year::{DayOfYear, InvalidDayOfYear};
pub use types::location::LatLon;
pub use types::report::{MetricAnalysis, MetricHistory, RiskReport, TrendDirection};
pub use types::sample::DailySample;
pub use types::thresholds::RiskThresholds;
pub use types::window::{ClimatologyWindow, InvalidWindow};

pub use analysis::error::AnalysisError;
pub use power::error::PowerApiError;
