use std::io;
use thiserror::Error;

/// Errors raised while configuring a benchmark run or writing its report.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize measurement: {0}")]
    Json(#[from] serde_json::Error),
}
