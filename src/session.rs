//! Chat session state and message dispatch.
//!
//! All mutable session state lives in [`ChatSession`]; the transport feeds it
//! [`SocketEvent`]s and the composer goes through [`ChatSession::compose`],
//! so the whole exchange policy is testable without a live connection.

use std::time::Duration;

use uuid::Uuid;

use crate::types::{EntryKind, QuestionFrame, Role, ServerFrame, SourceCitation, TranscriptEntry};

/// Fixed delay between a close event and the single reconnect attempt.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(3);

/// Number of passages the service retrieves per question.
pub const TOP_K: u32 = 5;

/// Opaque token scoping one conversation on the service. Generated once per
/// launch; uniqueness is probabilistic.
pub fn generate_session_id() -> String {
    format!("session-{}", Uuid::new_v4().simple())
}

/// Transport-level events, one dispatch arm each.
#[derive(Clone, Debug)]
pub enum SocketEvent {
    Opened,
    Message(String),
    Closed,
    Error(String),
}

/// What a composed send turned into.
#[derive(Clone, Debug, PartialEq)]
pub enum SendOutcome {
    /// Empty after trimming; silently ignored.
    Ignored,
    /// Not connected; a system entry was appended and the caller should
    /// trigger a reconnect instead of sending.
    Reconnect,
    /// Connected; the user entry was appended optimistically and this frame
    /// should go out on the wire.
    Frame(QuestionFrame),
}

#[derive(Clone, Debug)]
pub struct ChatSession {
    pub session_id: String,
    pub connected: bool,
    pub entries: Vec<TranscriptEntry>,
    pub sources: Vec<SourceCitation>,
    pub sources_visible: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            session_id: generate_session_id(),
            connected: false,
            entries: Vec::new(),
            sources: Vec::new(),
            sources_visible: false,
        }
    }

    pub fn apply(&mut self, event: SocketEvent) {
        match event {
            SocketEvent::Opened => {
                self.connected = true;
                self.entries
                    .push(TranscriptEntry::system("Conectado ao assistente"));
            }
            SocketEvent::Message(raw) => self.dispatch_frame(&raw),
            SocketEvent::Closed => {
                self.connected = false;
                self.entries.push(TranscriptEntry::system(
                    "Desconectado do assistente. Tentando reconectar...",
                ));
            }
            SocketEvent::Error(reason) => {
                // The subsequent close event handles the reconnect.
                tracing::warn!(%reason, "transport error");
                self.entries.push(TranscriptEntry::system("Erro na conexão"));
            }
        }
    }

    fn dispatch_frame(&mut self, raw: &str) {
        let frame: ServerFrame = match serde_json::from_str(raw) {
            Ok(frame) => frame,
            Err(err) => {
                tracing::warn!(%err, "dropping malformed frame");
                return;
            }
        };

        self.entries.retain(|entry| entry.kind != EntryKind::Typing);

        if frame.typing {
            self.entries.push(TranscriptEntry::typing());
        } else if frame.role == Some(Role::Assistant) {
            self.entries
                .push(TranscriptEntry::assistant(frame.content.unwrap_or_default()));
            if frame.sources.is_empty() {
                self.sources_visible = false;
            } else {
                self.sources = frame.sources;
                self.sources_visible = true;
            }
        } else if frame.role == Some(Role::User) {
            // Already rendered optimistically on send.
            tracing::debug!("dropping echoed user turn");
        } else if frame.role == Some(Role::System) || frame.error.is_some() {
            let text = frame.content.or(frame.error).unwrap_or_default();
            self.entries.push(TranscriptEntry::system(text));
        }
    }

    pub fn compose(&mut self, input: &str) -> SendOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        if !self.connected {
            self.entries.push(TranscriptEntry::system(
                "Não foi possível enviar a mensagem. Reconectando...",
            ));
            return SendOutcome::Reconnect;
        }

        self.entries.push(TranscriptEntry::user(text));
        SendOutcome::Frame(QuestionFrame {
            question: text.to_string(),
            top_k: TOP_K,
        })
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
