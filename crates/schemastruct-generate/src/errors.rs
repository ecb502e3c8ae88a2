use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Metadata retrieval or configuration failed upstream.
    #[error(transparent)]
    Core(#[from] schemastruct_core::Error),
}

impl GenerationError {
    pub(crate) fn metadata_unavailable(message: impl Into<String>) -> Self {
        GenerationError::Core(schemastruct_core::Error::MetadataUnavailable(message.into()))
    }
}
