use thiserror::Error;

/// Errors raised while turning an archive series into a risk report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(
        "Not enough historical data for a reliable analysis: found {found} \
         valid yearly samples, need at least {required}"
    )]
    InsufficientData { found: usize, required: usize },
}
