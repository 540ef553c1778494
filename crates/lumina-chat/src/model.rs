//! Generative model abstraction.
//!
//! One request in, one block of text out. Implementations make exactly one
//! attempt per call; callers decide what to do on failure.

use async_trait::async_trait;
use thiserror::Error;

/// A single stateless generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    /// Persona rules, target language and grounding context.
    pub system_instruction: String,
    /// The visitor's utterance, verbatim.
    pub prompt: String,
}

/// Common interface for hosted text-generation services.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate a reply. An empty string is a valid (if unhelpful) answer.
    async fn generate(&self, request: &ModelRequest) -> Result<String, ModelError>;

    /// Model identifier, for logging.
    fn model_id(&self) -> &str;
}

/// Model call failure with classification.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ModelError {
    pub kind: ModelErrorKind,
    pub message: String,
}

impl ModelError {
    pub fn new(kind: ModelErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ModelErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ModelErrorKind::Timeout, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ModelErrorKind::Malformed, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ModelErrorKind::Unknown, message)
    }

    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 | 404 => ModelErrorKind::InvalidRequest,
            401 | 403 => ModelErrorKind::Auth,
            408 => ModelErrorKind::Timeout,
            429 => ModelErrorKind::RateLimit,
            500..=599 => ModelErrorKind::ServerError,
            _ => ModelErrorKind::Unknown,
        };
        Self::new(kind, message)
    }
}

/// Error classification, used for logging only; calls are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelErrorKind {
    Network,
    Timeout,
    RateLimit,
    ServerError,
    Auth,
    InvalidRequest,
    /// Response body did not match the expected shape.
    Malformed,
    Unknown,
}

impl std::fmt::Display for ModelErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModelErrorKind::Network => "network",
            ModelErrorKind::Timeout => "timeout",
            ModelErrorKind::RateLimit => "rate limit",
            ModelErrorKind::ServerError => "server error",
            ModelErrorKind::Auth => "authentication",
            ModelErrorKind::InvalidRequest => "invalid request",
            ModelErrorKind::Malformed => "malformed response",
            ModelErrorKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
