use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Invalid project list: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown data source `{0}` (expected `http` or `mock`)")]
    UnknownDataSource(String),

    #[error("The http data source needs API_BASE_URL")]
    MissingBaseUrl,

    #[error("{key} must be a non-negative integer, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
}
