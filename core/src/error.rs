/// Failures of loading the forecast dataset.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed forecast payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected forecast payload: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
