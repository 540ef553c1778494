//! Reply strategies.
//!
//! A [`Responder`] turns one visitor utterance into one reply. The
//! composition is chosen once at startup by [`build_responder`]; the shell
//! never knows which strategy it is talking to.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use lumina_core::config::ModelConfig;
use lumina_core::{Language, LuminaConfig};

use crate::classifier::{FallbackClassifier, ReplySelection};
use crate::context::ContextSnapshot;
use crate::error::ChatError;
use crate::gemini::GeminiClient;
use crate::model::{GenerativeModel, ModelError, ModelRequest};
use crate::prompt::system_instruction;

/// Everything a responder needs for one reply. No history is carried.
#[derive(Debug, Clone)]
pub struct ResponderRequest {
    pub utterance: String,
    pub language: Language,
    pub context: ContextSnapshot,
}

impl ResponderRequest {
    pub fn new(utterance: impl Into<String>, language: Language, context: ContextSnapshot) -> Self {
        Self {
            utterance: utterance.into(),
            language,
            context,
        }
    }
}

#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, request: &ResponderRequest) -> Result<String, ChatError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

// ============================================================================
// Local fallback
// ============================================================================

/// Keyword classifier reply, after an optional artificial "thinking" delay.
pub struct LocalFallbackResponder {
    classifier: FallbackClassifier,
    delay: Duration,
}

impl LocalFallbackResponder {
    pub fn new(classifier: FallbackClassifier, delay: Duration) -> Self {
        Self { classifier, delay }
    }

    /// Built-in tables, canonical replies, no delay.
    pub fn immediate() -> Self {
        Self::new(FallbackClassifier::default(), Duration::ZERO)
    }

    pub fn classifier(&self) -> &FallbackClassifier {
        &self.classifier
    }
}

#[async_trait]
impl Responder for LocalFallbackResponder {
    async fn respond(&self, request: &ResponderRequest) -> Result<String, ChatError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.classifier.reply(&request.utterance, request.language)
    }

    fn name(&self) -> &str {
        "local"
    }
}

// ============================================================================
// External model
// ============================================================================

/// Reply shown when the model answers with nothing.
pub fn empty_reply_placeholder(language: Language) -> &'static str {
    match language {
        Language::En => "Re-calibrating architectural parameters...",
        Language::Es => "Recalibrando parámetros arquitectónicos...",
    }
}

/// One stateless call to a hosted generative model.
pub struct ExternalModelResponder {
    model: Arc<dyn GenerativeModel>,
}

impl ExternalModelResponder {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Responder for ExternalModelResponder {
    async fn respond(&self, request: &ResponderRequest) -> Result<String, ChatError> {
        let model_request = ModelRequest {
            system_instruction: system_instruction(request.language, &request.context),
            prompt: request.utterance.clone(),
        };

        let text = self.model.generate(&model_request).await?;
        let text = text.trim();
        if text.is_empty() {
            debug!(model = self.model.model_id(), "Model returned empty reply");
            return Ok(empty_reply_placeholder(request.language).to_string());
        }
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        self.model.model_id()
    }
}

// ============================================================================
// Fallback decorator
// ============================================================================

/// Try `primary`; on any failure answer from `fallback` instead.
pub struct FallbackResponder {
    primary: Arc<dyn Responder>,
    fallback: Arc<dyn Responder>,
}

impl FallbackResponder {
    pub fn new(primary: Arc<dyn Responder>, fallback: Arc<dyn Responder>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl Responder for FallbackResponder {
    async fn respond(&self, request: &ResponderRequest) -> Result<String, ChatError> {
        match self.primary.respond(request).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %e,
                    "Primary responder failed, using fallback"
                );
                self.fallback.respond(request).await
            }
        }
    }

    fn name(&self) -> &str {
        "fallback"
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Local responder configured from `[chat]`.
pub fn local_responder(config: &LuminaConfig) -> LocalFallbackResponder {
    let selection = if config.chat.randomize_replies {
        ReplySelection::Random
    } else {
        ReplySelection::Canonical
    };
    LocalFallbackResponder::new(
        FallbackClassifier::new(selection),
        Duration::from_millis(config.chat.fallback_delay_ms),
    )
}

/// Pick the responder composition for this process.
///
/// With a credential: external model first, local classifier on failure.
/// Without one the external service is never contacted.
pub fn build_responder(config: &LuminaConfig) -> Arc<dyn Responder> {
    build_responder_with(config, |model_config| {
        let client = GeminiClient::from_config(model_config)?;
        Ok(Arc::new(client) as Arc<dyn GenerativeModel>)
    })
}

/// [`build_responder`] with a caller-supplied model constructor.
///
/// `make_model` is only invoked when a credential is configured.
pub fn build_responder_with<F>(config: &LuminaConfig, make_model: F) -> Arc<dyn Responder>
where
    F: FnOnce(&ModelConfig) -> Result<Arc<dyn GenerativeModel>, ModelError>,
{
    let local: Arc<dyn Responder> = Arc::new(local_responder(config));

    if !config.has_credential() {
        info!("No API key configured, using local responder only");
        return local;
    }

    match make_model(&config.model) {
        Ok(model) => {
            info!(model = model.model_id(), "Using external model with local fallback");
            let external: Arc<dyn Responder> = Arc::new(ExternalModelResponder::new(model));
            Arc::new(FallbackResponder::new(external, local))
        }
        Err(e) => {
            warn!(error = %e, "Failed to create model client, using local responder only");
            local
        }
    }
}
