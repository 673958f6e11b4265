use serde::{Deserialize, Serialize};

/// Conversational roles the service tags inbound frames with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    /// Unrecognized role names; the frame still dispatches so its `error`
    /// field can surface.
    #[serde(other)]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    User,
    Assistant,
    System,
    /// Transient placeholder shown while awaiting the next substantive
    /// message; removed as soon as one arrives.
    Typing,
}

/// One displayed turn in the conversation log. Entries are append-only and
/// ordered by arrival; assistant content is kept as raw markdown and only
/// rendered at display time.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub content: String,
}

impl TranscriptEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::System,
            content: content.into(),
        }
    }

    pub fn typing() -> Self {
        Self {
            kind: EntryKind::Typing,
            content: String::new(),
        }
    }
}

/// Inbound frame, as the service emits it over the realtime connection.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServerFrame {
    #[serde(default)]
    pub typing: bool,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outbound question envelope.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestionFrame {
    pub question: String,
    pub top_k: u32,
}

/// Document excerpt supporting an assistant answer. Display data only;
/// replaced wholesale whenever an assistant message carries citations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SourceCitation {
    #[serde(default)]
    pub metadata: SourceMetadata,
    #[serde(default)]
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SourceMetadata {
    #[serde(default)]
    pub filename: Option<String>,
}

/// Uploaded document record from `GET /documents`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DocumentInfo {
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
    pub upload_time: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}
