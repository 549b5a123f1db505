/// Convenience result type used across bubblefield.
pub type BubbleResult<T> = Result<T, BubbleError>;

/// Top-level error taxonomy used by engine and conversion APIs.
#[derive(thiserror::Error, Debug)]
pub enum BubbleError {
    /// Invalid user-provided configuration or manifest data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding, encoding or probing media files.
    #[error("media error: {0}")]
    Media(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BubbleError {
    /// Build a [`BubbleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BubbleError::Media`] value.
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Build a [`BubbleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
