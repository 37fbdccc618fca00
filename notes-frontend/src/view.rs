//! What the presentation layer needs to redraw after a state change.

use crate::editor::EditorState;
use crate::status::StatusMessage;
use crate::store::NoteStore;
use notes_types::{Note, NoteId};
use serde::Serialize;

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    /// Notes to list, in display order
    pub notes: Vec<Note>,
    pub selected_id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub delete_enabled: bool,
    pub status: Option<StatusMessage>,
}

impl ViewSnapshot {
    pub fn capture(store: &NoteStore, editor: &EditorState, status: Option<StatusMessage>) -> Self {
        Self {
            notes: store.visible().into_iter().cloned().collect(),
            selected_id: editor.selected_id().cloned(),
            title: editor.title().to_string(),
            content: editor.content().to_string(),
            delete_enabled: editor.delete_enabled(),
            status,
        }
    }

    pub fn is_selected(&self, note: &Note) -> bool {
        self.selected_id.as_ref() == Some(&note.id)
    }

    pub fn rows(&self) -> Vec<ListRow> {
        self.notes
            .iter()
            .map(|n| render_list_row(n, self.is_selected(n)))
            .collect()
    }
}

/// One list row: display title and a single-line content preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: NoteId,
    pub title: String,
    pub preview: String,
    pub selected: bool,
}

pub fn render_list_row(note: &Note, selected: bool) -> ListRow {
    let title = match note.title.trim() {
        "" => "Untitled".to_string(),
        t => t.to_string(),
    };
    let preview = note
        .content
        .replace('\n', " ")
        .chars()
        .take(PREVIEW_CHARS)
        .collect();
    ListRow {
        id: note.id.clone(),
        title,
        preview,
        selected,
    }
}
