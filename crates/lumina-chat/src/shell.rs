//! Chat session shell.
//!
//! Owns the widget state, the transcript and the input line for one visitor
//! session:
//! - Closed -> OpenIdle (open, welcome injected once)
//! - OpenIdle -> OpenAwaitingReply (non-blank submit)
//! - OpenAwaitingReply -> OpenIdle (last outstanding reply appended)
//! - Open* -> Closed (close, everything retained)

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use lumina_core::{Locale, SubmitPolicy};

use crate::context::ContextSnapshot;
use crate::responder::{Responder, ResponderRequest};
use crate::transcript::{Message, Transcript};

/// Visible state of the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetState {
    Closed,
    OpenIdle,
    OpenAwaitingReply,
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetState::Closed => write!(f, "Closed"),
            WidgetState::OpenIdle => write!(f, "OpenIdle"),
            WidgetState::OpenAwaitingReply => write!(f, "OpenAwaitingReply"),
        }
    }
}

#[derive(Debug, Default)]
struct ShellState {
    open: bool,
    welcomed: bool,
    input: String,
    transcript: Transcript,
    pending: usize,
    next_ticket: u64,
    now_serving: u64,
    // Tickets released before their turn came up.
    abandoned: BTreeSet<u64>,
}

impl ShellState {
    /// Move the serving counter past the current ticket and any abandoned
    /// tickets behind it.
    fn advance(&mut self) -> u64 {
        self.now_serving += 1;
        while self.abandoned.remove(&self.now_serving) {
            self.now_serving += 1;
        }
        self.now_serving
    }
}

struct Shared {
    responder: Arc<dyn Responder>,
    policy: SubmitPolicy,
    state: Mutex<ShellState>,
    serving: watch::Sender<u64>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ShellState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One visitor's chat session. Cheap to clone; clones share the session.
#[derive(Clone)]
pub struct ChatShell {
    shared: Arc<Shared>,
}

impl ChatShell {
    pub fn new(responder: Arc<dyn Responder>, policy: SubmitPolicy) -> Self {
        let (serving, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                responder,
                policy,
                state: Mutex::new(ShellState::default()),
                serving,
            }),
        }
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.shared.policy
    }

    pub fn state(&self) -> WidgetState {
        let state = self.shared.lock();
        match (state.open, state.pending > 0) {
            (false, _) => WidgetState::Closed,
            (true, false) => WidgetState::OpenIdle,
            (true, true) => WidgetState::OpenAwaitingReply,
        }
    }

    /// Open the widget. The first open of an empty session appends the
    /// localized welcome message.
    pub fn open(&self, locale: &Locale) {
        let mut state = self.shared.lock();
        state.open = true;
        if !state.welcomed {
            state.welcomed = true;
            if state.transcript.is_empty() {
                state
                    .transcript
                    .push(Message::assistant(locale.content.chat.welcome.clone()));
                debug!(language = %locale.language, "Welcome message appended");
            }
        }
    }

    /// Hide the widget. Transcript, input and outstanding replies are kept.
    pub fn close(&self) {
        self.shared.lock().open = false;
    }

    pub fn is_open(&self) -> bool {
        self.shared.lock().open
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.shared.lock().input = text.into();
    }

    pub fn input(&self) -> String {
        self.shared.lock().input.clone()
    }

    /// Whether any reply is outstanding.
    pub fn is_typing(&self) -> bool {
        self.shared.lock().pending > 0
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Transcript {
        self.shared.lock().transcript.clone()
    }

    /// Start an exchange from the current input.
    ///
    /// Blank input is a no-op and returns `None`. Otherwise the user message
    /// is appended, the input cleared and the typing flag raised before this
    /// returns; the reply is produced by [`PendingExchange::complete`].
    pub fn begin_submit(&self, locale: &Locale) -> Option<PendingExchange> {
        let mut state = self.shared.lock();
        if state.input.trim().is_empty() {
            return None;
        }

        let utterance = std::mem::take(&mut state.input);
        state.transcript.push(Message::user(utterance.clone()));
        state.pending += 1;
        let ticket = state.next_ticket;
        state.next_ticket += 1;
        debug!(ticket, pending = state.pending, "Submit accepted");

        Some(PendingExchange {
            shared: Arc::clone(&self.shared),
            locale: *locale,
            utterance,
            ticket,
            released: false,
        })
    }

    /// Submit the current input and wait for the reply.
    pub async fn submit(&self, locale: &Locale) -> Option<Message> {
        let exchange = self.begin_submit(locale)?;
        Some(exchange.complete().await)
    }

    /// Submit the current input and produce the reply in the background.
    ///
    /// The user message is already in the transcript when this returns.
    pub fn spawn_submit(&self, locale: &Locale) -> Option<JoinHandle<Message>> {
        let exchange = self.begin_submit(locale)?;
        Some(tokio::spawn(exchange.complete()))
    }
}

impl fmt::Debug for ChatShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("ChatShell")
            .field("responder", &self.shared.responder.name())
            .field("policy", &self.shared.policy)
            .field("open", &state.open)
            .field("messages", &state.transcript.len())
            .field("pending", &state.pending)
            .finish()
    }
}

// ============================================================================
// PendingExchange
// ============================================================================

/// A submitted utterance whose reply has not been appended yet.
///
/// Dropping it without completing releases its slot; no reply is appended.
pub struct PendingExchange {
    shared: Arc<Shared>,
    locale: Locale,
    utterance: String,
    ticket: u64,
    released: bool,
}

impl PendingExchange {
    pub fn utterance(&self) -> &str {
        &self.utterance
    }

    /// Produce the reply and append it to the transcript.
    ///
    /// A responder error becomes the localized connection-trouble message;
    /// this never fails.
    pub async fn complete(mut self) -> Message {
        if self.shared.policy == SubmitPolicy::Serialized {
            self.wait_for_turn().await;
        }

        let reply = match self.respond().await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, language = %self.locale.language, "Responder failed");
                self.locale.content.chat.connection_error.clone()
            }
        };

        let message = Message::assistant(reply);
        {
            let mut state = self.shared.lock();
            state.transcript.push(message.clone());
        }
        self.release();
        message
    }

    async fn respond(&self) -> Result<String, crate::error::ChatError> {
        let context = ContextSnapshot::from_content(self.locale.content)?;
        let request = ResponderRequest::new(self.utterance.clone(), self.locale.language, context);
        self.shared.responder.respond(&request).await
    }

    async fn wait_for_turn(&self) {
        let ticket = self.ticket;
        let mut rx = self.shared.serving.subscribe();
        // The sender lives in `shared`, which we hold.
        let _ = rx.wait_for(|serving| *serving >= ticket).await;
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let mut state = self.shared.lock();
        state.pending = state.pending.saturating_sub(1);
        if self.shared.policy == SubmitPolicy::Serialized {
            if state.now_serving == self.ticket {
                let next = state.advance();
                self.shared.serving.send_replace(next);
            } else {
                state.abandoned.insert(self.ticket);
            }
        }
        debug!(ticket = self.ticket, pending = state.pending, "Exchange released");
    }
}

impl Drop for PendingExchange {
    fn drop(&mut self) {
        self.release();
    }
}
