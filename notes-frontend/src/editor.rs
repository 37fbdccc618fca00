//! Selection and draft buffer for the note being edited.

use crate::store::NoteStore;
use notes_types::{NoteDraft, NoteId};

/// Which note (if any) the draft belongs to, plus the unsaved field values.
///
/// `selected_id == None` is the "new note" mode. The draft is copied in on
/// selection and only reaches the store through an explicit save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    selected_id: Option<NoteId>,
    title: String,
    content: String,
    /// Bumped whenever the editor switches to a different draft
    generation: u64,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit an existing note. A missing note yields a blank draft.
    pub fn select_existing(&mut self, id: NoteId, store: &NoteStore) {
        match store.get(&id) {
            Some(note) => {
                self.title = note.title.clone();
                self.content = note.content.clone();
            }
            None => {
                log::debug!("[NOTES] Selected note {} not found in store", id);
                self.title.clear();
                self.content.clear();
            }
        }
        self.selected_id = Some(id);
        self.generation += 1;
    }

    /// Switch to new-note mode with a blank draft.
    pub fn start_new(&mut self) {
        self.selected_id = None;
        self.title.clear();
        self.content.clear();
        self.generation += 1;
    }

    /// Identifies the draft currently held; typing into it does not change it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record the id the service assigned to a freshly created note.
    ///
    /// Only valid while the editor still holds the draft that was sent.
    pub fn assign_saved(&mut self, id: NoteId) {
        self.selected_id = Some(id);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Request body for save: title trimmed, content verbatim.
    pub fn current_draft_payload(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
        }
    }

    pub fn selected_id(&self) -> Option<&NoteId> {
        self.selected_id.as_ref()
    }

    pub fn is_editing_existing(&self) -> bool {
        self.selected_id.is_some()
    }

    pub fn delete_enabled(&self) -> bool {
        self.is_editing_existing()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
