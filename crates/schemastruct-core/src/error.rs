use thiserror::Error;

/// Core error type shared across schemastruct crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Table or column metadata could not be retrieved, including when the
    /// database cannot be reached.
    #[error("metadata unavailable: {0}")]
    MetadataUnavailable(String),
    /// The generation config is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results returned by schemastruct crates.
pub type Result<T> = std::result::Result<T, Error>;
