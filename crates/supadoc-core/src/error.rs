use thiserror::Error;

/// Core error type shared across Supadoc crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(String),
    /// The discovery request answered with a non-success status.
    #[error("discovery failed with status {status}: {body}")]
    Discovery { status: u16, body: String },
    /// A response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
    /// Invalid or missing configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Supadoc crates.
pub type Result<T> = std::result::Result<T, Error>;
