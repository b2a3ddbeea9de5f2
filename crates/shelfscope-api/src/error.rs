use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, TLS, reset, body read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    /// The body was not the JSON shape we expected.
    #[error("unexpected response shape: {0}")]
    DataShape(String),

    #[error("API key not set: export {0}")]
    MissingApiKey(String),

    #[error("invalid URL {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
