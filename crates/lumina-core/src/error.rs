use thiserror::Error;

/// Top-level error type for the Lumina site core.
///
/// The chat crate defines its own `ChatError`; this type covers configuration,
/// catalog lookups and serialization shared by every crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LuminaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unknown project: {0}")]
    UnknownProject(u32),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl From<toml::de::Error> for LuminaError {
    fn from(err: toml::de::Error) -> Self {
        LuminaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LuminaError {
    fn from(err: toml::ser::Error) -> Self {
        LuminaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for LuminaError {
    fn from(err: serde_json::Error) -> Self {
        LuminaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Lumina operations.
pub type Result<T> = std::result::Result<T, LuminaError>;
