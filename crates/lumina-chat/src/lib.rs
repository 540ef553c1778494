//! Conversational "Virtual Tech Lead" for the portfolio site.
//!
//! Provides the reply strategies (hosted model with a local keyword
//! fallback) and the chat session shell that drives them.

pub mod classifier;
pub mod context;
pub mod error;
pub mod gemini;
pub mod model;
pub mod prompt;
pub mod responder;
pub mod shell;
pub mod transcript;

pub use classifier::{BucketKind, FallbackClassifier, KeywordBucket, ReplySelection};
pub use context::ContextSnapshot;
pub use error::ChatError;
pub use gemini::GeminiClient;
pub use model::{GenerativeModel, ModelError, ModelErrorKind, ModelRequest};
pub use responder::{
    build_responder, build_responder_with, ExternalModelResponder, FallbackResponder,
    LocalFallbackResponder, Responder, ResponderRequest,
};
pub use shell::{ChatShell, PendingExchange, WidgetState};
pub use transcript::{Message, Role, Transcript};
