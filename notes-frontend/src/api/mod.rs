//! Remote note service client.
//!
//! `NotesApi` is the seam the controller talks to; `HttpNotesApi` is the
//! reqwest-backed implementation of the service's REST contract.

mod error;
mod http;

pub use error::TransportError;
pub use http::{HttpNotesApi, join_url};

use async_trait::async_trait;
use notes_types::{Note, NoteDraft, NoteId};

/// The four operations of the notes service.
///
/// Implementations never retry; the first failure is returned as-is.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// List notes, optionally narrowed server-side by `query` (empty = all)
    async fn list(&self, query: &str) -> Result<Vec<Note>, TransportError>;

    /// Create a note; the service assigns the id
    async fn create(&self, draft: &NoteDraft) -> Result<Note, TransportError>;

    /// Replace a note's fields. The returned note is authoritative.
    async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, TransportError>;

    async fn delete(&self, id: &NoteId) -> Result<(), TransportError>;
}
