//! Notes frontend — client-side state synchronization for a remote notes service.
//!
//! The controller owns the note collection, the editor draft and the status
//! line, and keeps them consistent with the service under asynchronous,
//! possibly failing calls.

pub mod api;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod editor;
pub mod intent;
pub mod status;
pub mod store;
pub mod view;

pub use api::{HttpNotesApi, NotesApi, TransportError};
pub use config::{Config, Timings};
pub use controller::{NotesController, Outcome};
pub use notes_types::{Note, NoteDraft, NoteId};
pub use view::ViewSnapshot;
