use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Everything a client operation can fail with. Errors are returned, never
/// panicked across the async boundary, and a single failed attempt is
/// terminal: there are no retries.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("networking error: backend responded with HTTP {0}")]
    Networking(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(String),
}
