//! NoteStore — the client's in-memory note collection
//!
//! Holds the authoritative collection plus the filtered view derived from the
//! active search query. `upsert` and `remove` are the only mutation paths after
//! the initial load, and each one recomputes the view before returning.

use notes_types::{Note, NoteId};

#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    /// Normalized (trimmed, lowercased) query; empty means no filter
    query: String,
    /// Indices into `notes`, ascending
    filtered: Vec<usize>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. Only used by the initial load.
    pub fn replace_all(&mut self, notes: Vec<Note>) {
        let mut seen = std::collections::HashSet::new();
        let before = notes.len();
        self.notes = notes
            .into_iter()
            .filter(|n| seen.insert(n.id.clone()))
            .collect();
        if self.notes.len() != before {
            log::warn!(
                "[NOTES] Dropped {} duplicate note id(s) from listing",
                before - self.notes.len()
            );
        }
        self.recompute();
    }

    /// Insert a note at the front if its id is new, otherwise replace it in place.
    pub fn upsert(&mut self, note: Note) {
        match self.notes.iter().position(|n| n.id == note.id) {
            Some(idx) => self.notes[idx] = note,
            None => self.notes.insert(0, note),
        }
        self.recompute();
    }

    /// Remove a note by id. Absent ids are ignored.
    pub fn remove(&mut self, id: &NoteId) {
        self.notes.retain(|n| &n.id != id);
        self.recompute();
    }

    /// Set the active query and recompute the filtered view.
    pub fn apply_filter(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.recompute();
    }

    fn recompute(&mut self) {
        if self.query.is_empty() {
            self.filtered = (0..self.notes.len()).collect();
            return;
        }
        let q = self.query.as_str();
        self.filtered = self
            .notes
            .iter()
            .enumerate()
            .filter(|(_, n)| matches_query(n, q))
            .map(|(i, _)| i)
            .collect();
    }

    /// Full collection, most recent creations first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The notes to display: the filtered view, or everything when unfiltered.
    pub fn visible(&self) -> Vec<&Note> {
        self.filtered.iter().map(|&i| &self.notes[i]).collect()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn first(&self) -> Option<&Note> {
        self.notes.first()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Case-insensitive substring match over title or content. `query` must already be lowercase.
fn matches_query(note: &Note, query: &str) -> bool {
    note.title.to_lowercase().contains(query) || note.content.to_lowercase().contains(query)
}
