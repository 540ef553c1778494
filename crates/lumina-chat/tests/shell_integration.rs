//! Integration tests for the chat session shell.
//!
//! Every test drives a shell through scripted responders; nothing here
//! touches the network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use lumina_chat::{
    BucketKind, ChatError, ChatShell, ExternalModelResponder, FallbackResponder, GenerativeModel,
    LocalFallbackResponder, Message, ModelError, ModelRequest, Responder, ResponderRequest, Role,
    WidgetState,
};
use lumina_core::{Language, Locale, SubmitPolicy};

// =============================================================================
// Helpers
// =============================================================================

/// Replies `"re: {utterance}"` after a per-utterance delay and records the
/// peak number of overlapping calls.
struct DelayedResponder {
    delays: HashMap<String, Duration>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl DelayedResponder {
    fn new(delays: &[(&str, u64)]) -> Self {
        Self {
            delays: delays
                .iter()
                .map(|(u, ms)| (u.to_string(), Duration::from_millis(*ms)))
                .collect(),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Responder for DelayedResponder {
    async fn respond(&self, request: &ResponderRequest) -> Result<String, ChatError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        let delay = self
            .delays
            .get(&request.utterance)
            .copied()
            .unwrap_or_default();
        tokio::time::sleep(delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(format!("re: {}", request.utterance))
    }

    fn name(&self) -> &str {
        "delayed"
    }
}

struct BrokenResponder;

#[async_trait]
impl Responder for BrokenResponder {
    async fn respond(&self, request: &ResponderRequest) -> Result<String, ChatError> {
        Err(ChatError::EmptyCandidates(BucketKind::Default, request.language))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

struct DownModel;

#[async_trait]
impl GenerativeModel for DownModel {
    async fn generate(&self, _request: &ModelRequest) -> Result<String, ModelError> {
        Err(ModelError::network("connection refused"))
    }

    fn model_id(&self) -> &str {
        "down"
    }
}

fn submit_all(shell: &ChatShell, locale: &Locale, inputs: &[&str]) -> Vec<JoinHandle<Message>> {
    inputs
        .iter()
        .map(|text| {
            shell.set_input(*text);
            shell.spawn_submit(locale).unwrap()
        })
        .collect()
}

fn texts(shell: &ChatShell) -> Vec<String> {
    shell
        .transcript()
        .iter()
        .map(|m| m.text().to_string())
        .collect()
}

// =============================================================================
// Ordering
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_serialized_replies_follow_submit_order() {
    let responder = Arc::new(DelayedResponder::new(&[("slow", 500), ("fast", 10)]));
    let shell = ChatShell::new(responder.clone(), SubmitPolicy::Serialized);
    let locale = Locale::of(Language::En);

    for handle in submit_all(&shell, &locale, &["slow", "fast"]) {
        handle.await.unwrap();
    }

    assert_eq!(texts(&shell), vec!["slow", "fast", "re: slow", "re: fast"]);
    assert_eq!(responder.peak.load(Ordering::SeqCst), 1);
    assert!(!shell.is_typing());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_replies_follow_completion_order() {
    let responder = Arc::new(DelayedResponder::new(&[("slow", 500), ("fast", 10)]));
    let shell = ChatShell::new(responder.clone(), SubmitPolicy::Concurrent);
    let locale = Locale::of(Language::En);

    for handle in submit_all(&shell, &locale, &["slow", "fast"]) {
        handle.await.unwrap();
    }

    assert_eq!(texts(&shell), vec!["slow", "fast", "re: fast", "re: slow"]);
    assert_eq!(responder.peak.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_typing_stays_on_until_last_reply() {
    let responder = Arc::new(DelayedResponder::new(&[("one", 100), ("two", 100)]));
    let shell = ChatShell::new(responder, SubmitPolicy::Serialized);
    let locale = Locale::of(Language::En);
    shell.open(&locale);

    assert!(shell.begin_submit(&locale).is_none());

    shell.set_input("one");
    let one = shell.begin_submit(&locale).unwrap();
    shell.set_input("two");
    let two = shell.begin_submit(&locale).unwrap();
    assert_eq!(shell.state(), WidgetState::OpenAwaitingReply);

    one.complete().await;
    assert!(shell.is_typing());
    two.complete().await;
    assert!(!shell.is_typing());
    assert_eq!(shell.state(), WidgetState::OpenIdle);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_exchange_releases_its_turn() {
    let responder = Arc::new(DelayedResponder::new(&[]));
    let shell = ChatShell::new(responder, SubmitPolicy::Serialized);
    let locale = Locale::of(Language::En);

    shell.set_input("abandoned");
    let abandoned = shell.begin_submit(&locale).unwrap();
    shell.set_input("kept");
    let kept = shell.begin_submit(&locale).unwrap();
    drop(abandoned);

    let reply = tokio::time::timeout(Duration::from_secs(5), kept.complete())
        .await
        .expect("queued exchange should not stall");
    assert_eq!(reply.text(), "re: kept");
    assert_eq!(texts(&shell), vec!["abandoned", "kept", "re: kept"]);
}

// =============================================================================
// Error boundary and fallback
// =============================================================================

#[tokio::test]
async fn test_total_failure_appends_localized_apology() {
    let shell = ChatShell::new(Arc::new(BrokenResponder), SubmitPolicy::Serialized);

    for language in Language::all() {
        let locale = Locale::of(language);
        shell.set_input("anything");
        let reply = shell.submit(&locale).await.unwrap();
        assert_eq!(reply.role(), Role::Assistant);
        assert_eq!(reply.text(), locale.content.chat.connection_error);
    }
    assert!(!shell.is_typing());
}

#[tokio::test]
async fn test_model_outage_falls_back_to_local_reply() {
    let responder: Arc<dyn Responder> = Arc::new(FallbackResponder::new(
        Arc::new(ExternalModelResponder::new(Arc::new(DownModel))),
        Arc::new(LocalFallbackResponder::immediate()),
    ));
    let shell = ChatShell::new(responder, SubmitPolicy::Serialized);
    let locale = Locale::of(Language::En);
    shell.open(&locale);

    shell.set_input("Which tech do you use?");
    let reply = shell.submit(&locale).await.unwrap();
    assert!(reply.text().starts_with("For the frontend, I rely on React"));
    assert_ne!(reply.text(), locale.content.chat.connection_error);
}

#[tokio::test]
async fn test_replies_never_empty() {
    let responder: Arc<dyn Responder> = Arc::new(FallbackResponder::new(
        Arc::new(ExternalModelResponder::new(Arc::new(DownModel))),
        Arc::new(LocalFallbackResponder::immediate()),
    ));
    let shell = ChatShell::new(responder, SubmitPolicy::Concurrent);
    let utterances = ["x", "REACT?", "proceso", "email me", "¿hola?", "12345"];

    for language in Language::all() {
        let locale = Locale::of(language);
        for utterance in utterances {
            shell.set_input(utterance);
            let reply = shell.submit(&locale).await.unwrap();
            assert!(!reply.text().trim().is_empty());
        }
    }
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[tokio::test]
async fn test_session_lifecycle() {
    let shell = ChatShell::new(
        Arc::new(LocalFallbackResponder::immediate()),
        SubmitPolicy::Serialized,
    );
    let locale = Locale::of(Language::Es);

    shell.open(&locale);
    shell.set_input("  ");
    assert!(shell.submit(&locale).await.is_none());
    assert_eq!(shell.transcript().len(), 1);

    shell.set_input("contacto");
    shell.submit(&locale).await.unwrap();
    shell.close();
    shell.open(&locale);

    let transcript = shell.transcript();
    let roles: Vec<Role> = transcript.iter().map(|m| m.role()).collect();
    assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    assert_eq!(
        transcript
            .iter()
            .filter(|m| m.text() == locale.content.chat.welcome)
            .count(),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn test_reply_lands_while_closed() {
    let responder = Arc::new(DelayedResponder::new(&[("late", 200)]));
    let shell = ChatShell::new(responder, SubmitPolicy::Serialized);
    let locale = Locale::of(Language::En);
    shell.open(&locale);

    shell.set_input("late");
    let handle = shell.spawn_submit(&locale).unwrap();
    shell.close();
    handle.await.unwrap();

    assert_eq!(shell.state(), WidgetState::Closed);
    assert_eq!(shell.transcript().last().unwrap().text(), "re: late");
}

#[tokio::test]
async fn test_language_switch_applies_to_next_submit() {
    let shell = ChatShell::new(
        Arc::new(LocalFallbackResponder::immediate()),
        SubmitPolicy::Serialized,
    );

    shell.set_input("stack");
    let en = shell.submit(&Locale::of(Language::En)).await.unwrap();
    shell.set_input("stack");
    let es = shell.submit(&Locale::of(Language::Es)).await.unwrap();

    assert!(en.text().starts_with("For the frontend"));
    assert!(es.text().starts_with("Para el frontend"));
}
