//! Error types for the chat responder and shell.

use lumina_core::Language;

use crate::classifier::BucketKind;
use crate::model::ModelError;

/// Errors from the chat engine.
///
/// Only `Responder` implementations produce these; the shell turns any of
/// them into a localized apology in the transcript.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("no candidate replies for bucket '{0}' in language '{1}'")]
    EmptyCandidates(BucketKind, Language),
    #[error("context error: {0}")]
    Context(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Context(err.to_string())
    }
}
