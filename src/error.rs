#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}
