//! Shared wire types for the notes service and its clients.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// =====================================================
// Identity
// =====================================================

/// Opaque note identifier assigned by the remote service.
///
/// Services emit either JSON strings or integers; both are accepted and the
/// id is always sent back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawNoteId")]
pub struct NoteId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNoteId {
    Text(String),
    Number(i64),
}

impl From<RawNoteId> for NoteId {
    fn from(raw: RawNoteId) -> Self {
        match raw {
            RawNoteId::Text(s) => NoteId(s),
            RawNoteId::Number(n) => NoteId(n.to_string()),
        }
    }
}

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for NoteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// =====================================================
// Domain Types
// =====================================================

/// A persisted note as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Note {
    pub fn new(id: impl Into<NoteId>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Request body for create and update calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Materialize the draft under a service-assigned id.
    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
        }
    }
}
