use crate::analysis::error::AnalysisError;
use crate::power::error::PowerApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DayScoreError {
    #[error(transparent)]
    PowerApi(#[from] PowerApiError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
