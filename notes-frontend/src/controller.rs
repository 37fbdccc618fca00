//! NotesController — wires user intents to the store, the editor and the service.
//!
//! All mutable session state lives behind one mutex owned by the controller.
//! The lock is never held across a service call: each operation reads what it
//! needs, releases the lock, awaits the service, then re-locks to apply the
//! server's response. Every visible change is published as a `ViewSnapshot`.

use crate::api::NotesApi;
use crate::config::Timings;
use crate::debounce::Debouncer;
use crate::editor::EditorState;
use crate::intent::{KeyChord, UserIntent};
use crate::status::{StatusKind, StatusNotifier};
use crate::store::NoteStore;
use crate::view::ViewSnapshot;
use notes_types::{Note, NoteId};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::sync::watch;

/// Result of a user action, mostly useful to callers that log or test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed,
    /// Dropped by a guard (busy, nothing selected); nothing was sent
    Ignored,
}

#[derive(Debug, Default)]
struct SessionState {
    store: NoteStore,
    editor: EditorState,
    /// Latest search text as typed, applied to the store after the debounce
    search_text: String,
    saving: bool,
    deleting: bool,
}

#[derive(Debug, Clone, Copy)]
enum Busy {
    Saving,
    Deleting,
}

impl Busy {
    fn flag(self, state: &mut SessionState) -> &mut bool {
        match self {
            Busy::Saving => &mut state.saving,
            Busy::Deleting => &mut state.deleting,
        }
    }
}

/// Holds a busy flag for the lifetime of one operation and releases it on every exit path.
struct BusyGuard<'a> {
    inner: &'a Inner,
    kind: Busy,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.inner.state.lock();
        *self.kind.flag(&mut state) = false;
    }
}

struct Inner {
    api: Arc<dyn NotesApi>,
    state: Mutex<SessionState>,
    status: StatusNotifier,
    search: Debouncer,
    view_tx: watch::Sender<ViewSnapshot>,
}

impl Inner {
    fn try_begin(&self, kind: Busy) -> Option<BusyGuard<'_>> {
        let mut state = self.state.lock();
        let flag = kind.flag(&mut state);
        if *flag {
            return None;
        }
        *flag = true;
        Some(BusyGuard { inner: self, kind })
    }

    /// Push the current state to observers. Must not be called with `state` locked.
    fn publish(&self) {
        let snapshot = {
            let state = self.state.lock();
            ViewSnapshot::capture(&state.store, &state.editor, self.status.current())
        };
        self.view_tx.send_replace(snapshot);
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let result = {
            let mut state = self.state.lock();
            f(&mut state)
        };
        self.publish();
        result
    }
}

#[derive(Clone)]
pub struct NotesController {
    inner: Arc<Inner>,
}

impl NotesController {
    pub fn new(api: Arc<dyn NotesApi>, timings: Timings) -> Self {
        let inner = Arc::new_cyclic(|weak: &Weak<Inner>| {
            let hook = weak.clone();
            let (view_tx, _) = watch::channel(ViewSnapshot::default());
            Inner {
                api,
                state: Mutex::new(SessionState::default()),
                status: StatusNotifier::new(timings.status_clear, move || {
                    if let Some(inner) = hook.upgrade() {
                        inner.publish();
                    }
                }),
                search: Debouncer::new(timings.search_debounce),
                view_tx,
            }
        });
        Self { inner }
    }

    /// Receive a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.inner.view_tx.subscribe()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.inner.view_tx.borrow().clone()
    }

    /// Full collection, regardless of the active filter
    pub fn collection(&self) -> Vec<Note> {
        self.inner.state.lock().store.notes().to_vec()
    }

    pub fn editor(&self) -> EditorState {
        self.inner.state.lock().editor.clone()
    }

    pub fn search_text(&self) -> String {
        self.inner.state.lock().search_text.clone()
    }

    pub fn is_saving(&self) -> bool {
        self.inner.state.lock().saving
    }

    pub fn is_deleting(&self) -> bool {
        self.inner.state.lock().deleting
    }

    // ── Intents ─────────────────────────────────────

    /// Initial fetch of the whole collection.
    pub async fn load(&self) -> Outcome {
        let inner = &self.inner;
        inner.status.announce("Loading...", StatusKind::Info);

        match inner.api.list("").await {
            Ok(notes) => {
                log::info!("[NOTES] Loaded {} notes", notes.len());
                {
                    let mut guard = inner.state.lock();
                    let state = &mut *guard;
                    state.store.replace_all(notes);
                    state.store.apply_filter(&state.search_text);
                    match state.store.first().map(|n| n.id.clone()) {
                        Some(id) => state.editor.select_existing(id, &state.store),
                        None => state.editor.start_new(),
                    }
                }
                inner.status.clear();
                Outcome::Completed
            }
            Err(e) => {
                log::error!("[NOTES] Initial load failed: {}", e);
                {
                    let mut state = inner.state.lock();
                    state.store.replace_all(Vec::new());
                    state.editor.start_new();
                }
                inner.status.announce("Failed to load notes", StatusKind::Error);
                Outcome::Failed
            }
        }
    }

    pub fn new_note(&self) {
        self.inner.mutate(|state| state.editor.start_new());
    }

    pub fn select(&self, id: NoteId) {
        self.inner.mutate(|state| state.editor.select_existing(id, &state.store));
    }

    pub fn edit_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.inner.mutate(|state| state.editor.set_title(title));
    }

    pub fn edit_content(&self, content: impl Into<String>) {
        let content = content.into();
        self.inner.mutate(|state| state.editor.set_content(content));
    }

    /// Record the typed query now; filter once typing pauses.
    pub fn search_input(&self, query: impl Into<String>) {
        self.inner.state.lock().search_text = query.into();

        let weak = Arc::downgrade(&self.inner);
        self.inner.search.schedule(move || {
            if let Some(inner) = weak.upgrade() {
                inner.mutate(|state| {
                    let query = state.search_text.clone();
                    log::debug!("[NOTES] Applying search filter {:?}", query);
                    state.store.apply_filter(&query);
                });
            }
        });
    }

    /// Create or update the draft. A save while another is in flight is dropped.
    pub async fn save(&self) -> Outcome {
        let inner = &self.inner;
        let Some(_saving) = inner.try_begin(Busy::Saving) else {
            log::debug!("[NOTES] Save already in progress, ignoring");
            return Outcome::Ignored;
        };

        let (target, payload, generation) = {
            let state = inner.state.lock();
            (
                state.editor.selected_id().cloned(),
                state.editor.current_draft_payload(),
                state.editor.generation(),
            )
        };
        inner.status.announce("Saving...", StatusKind::Info);

        let result = match &target {
            None => inner.api.create(&payload).await,
            Some(id) => inner.api.update(id, &payload).await,
        };

        match result {
            Ok(note) => {
                log::info!("[NOTES] Saved note {}", note.id);
                {
                    let mut guard = inner.state.lock();
                    let state = &mut *guard;
                    let id = note.id.clone();
                    state.store.upsert(note);
                    // The user may have moved to another draft while the create ran
                    if target.is_none() && state.editor.generation() == generation {
                        state.editor.assign_saved(id);
                    }
                    state.store.apply_filter(&state.search_text);
                }
                inner.status.announce("Saved", StatusKind::Success);
                Outcome::Completed
            }
            Err(e) => {
                log::error!("[NOTES] Save failed: {}", e);
                inner.status.announce("Error saving note", StatusKind::Error);
                Outcome::Failed
            }
        }
    }

    /// Delete the selected note. Needs a selection; overlapping deletes are dropped.
    pub async fn delete(&self) -> Outcome {
        let inner = &self.inner;
        let Some(id) = inner.state.lock().editor.selected_id().cloned() else {
            return Outcome::Ignored;
        };
        let Some(_deleting) = inner.try_begin(Busy::Deleting) else {
            log::debug!("[NOTES] Delete already in progress, ignoring");
            return Outcome::Ignored;
        };

        inner.status.announce("Deleting...", StatusKind::Info);

        match inner.api.delete(&id).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                log::info!("[NOTES] Note {} was already deleted on the server", id);
            }
            Err(e) => {
                log::error!("[NOTES] Delete of {} failed: {}", id, e);
                inner.status.announce("Error deleting note", StatusKind::Error);
                return Outcome::Failed;
            }
        }

        {
            let mut state = inner.state.lock();
            state.store.remove(&id);
            if state.editor.selected_id() == Some(&id) {
                state.editor.start_new();
            }
            let query = state.search_text.clone();
            state.store.apply_filter(&query);
        }
        inner.status.announce("Deleted", StatusKind::Success);
        Outcome::Completed
    }

    /// Global shortcut handling. Returns whether the host's default action must be suppressed.
    pub async fn handle_key(&self, chord: KeyChord) -> bool {
        match chord.intent() {
            Some(outcome) => {
                self.dispatch(outcome.intent).await;
                outcome.suppress_default
            }
            None => false,
        }
    }

    /// Route one intent. `Show`, `Help` and `Quit` belong to the host and are ignored here.
    pub async fn dispatch(&self, intent: UserIntent) -> Outcome {
        match intent {
            UserIntent::NewNote => self.new_note(),
            UserIntent::Select(id) => self.select(id),
            UserIntent::EditTitle(title) => self.edit_title(title),
            UserIntent::EditContent(content) => self.edit_content(content),
            UserIntent::Search(query) => self.search_input(query),
            UserIntent::Save => return self.save().await,
            UserIntent::Delete => return self.delete().await,
            UserIntent::Show | UserIntent::Help | UserIntent::Quit => return Outcome::Ignored,
        }
        Outcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;
    use async_trait::async_trait;
    use notes_types::NoteDraft;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    const LATENCY: Duration = Duration::from_millis(10);

    #[derive(Default)]
    struct FakeApi {
        notes: Mutex<Vec<Note>>,
        next_id: AtomicUsize,
        list_calls: AtomicUsize,
        create_calls: AtomicUsize,
        update_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        fail_list: AtomicBool,
        fail_writes: AtomicBool,
    }

    impl FakeApi {
        fn with_notes(notes: Vec<Note>) -> Arc<Self> {
            let api = Self::default();
            *api.notes.lock() = notes;
            Arc::new(api)
        }

        fn write_error(&self) -> Option<TransportError> {
            self.fail_writes
                .load(Ordering::SeqCst)
                .then_some(TransportError::Status {
                    status: 500,
                    context: "write",
                })
        }
    }

    #[async_trait]
    impl NotesApi for FakeApi {
        async fn list(&self, _query: &str) -> Result<Vec<Note>, TransportError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(LATENCY).await;
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(TransportError::Network("connection refused".into()));
            }
            Ok(self.notes.lock().clone())
        }

        async fn create(&self, draft: &NoteDraft) -> Result<Note, TransportError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(LATENCY).await;
            if let Some(e) = self.write_error() {
                return Err(e);
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let note = draft.clone().into_note(NoteId::new(id.to_string()));
            self.notes.lock().insert(0, note.clone());
            Ok(note)
        }

        async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, TransportError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(LATENCY).await;
            if let Some(e) = self.write_error() {
                return Err(e);
            }
            let mut notes = self.notes.lock();
            let note = notes
                .iter_mut()
                .find(|n| &n.id == id)
                .ok_or(TransportError::Status {
                    status: 404,
                    context: "update note",
                })?;
            note.title = draft.title.clone();
            note.content = draft.content.clone();
            Ok(note.clone())
        }

        async fn delete(&self, id: &NoteId) -> Result<(), TransportError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(LATENCY).await;
            if let Some(e) = self.write_error() {
                return Err(e);
            }
            let mut notes = self.notes.lock();
            let before = notes.len();
            notes.retain(|n| &n.id != id);
            if notes.len() == before {
                return Err(TransportError::Status {
                    status: 404,
                    context: "delete note",
                });
            }
            Ok(())
        }
    }

    fn controller(api: &Arc<FakeApi>) -> NotesController {
        NotesController::new(api.clone(), Timings::default())
    }

    fn status_text(c: &NotesController) -> Option<(String, StatusKind)> {
        c.snapshot().status.map(|s| (s.text, s.kind))
    }

    fn ab_notes() -> Vec<Note> {
        vec![Note::new("1", "A", "x"), Note::new("2", "B", "y")]
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_selects_first_note() {
        let api = FakeApi::with_notes(ab_notes());
        let c = controller(&api);

        assert_eq!(c.load().await, Outcome::Completed);
        let snap = c.snapshot();
        assert_eq!(snap.notes.len(), 2);
        assert_eq!(snap.selected_id, Some(NoteId::new("1")));
        assert_eq!(snap.title, "A");
        assert!(snap.delete_enabled);
        assert_eq!(snap.status, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_status_shown_while_list_in_flight() {
        let api = FakeApi::with_notes(ab_notes());
        let c = controller(&api);
        let mut rx = c.subscribe();

        let load = tokio::spawn({
            let c = c.clone();
            async move { c.load().await }
        });
        tokio::time::sleep(Duration::from_millis(1)).await;

        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
        assert!(rx.has_changed().unwrap());
        let status = rx.borrow_and_update().status.clone().map(|s| (s.text, s.kind));
        assert_eq!(status, Some(("Loading...".to_string(), StatusKind::Info)));
        assert!(c.snapshot().notes.is_empty());

        assert_eq!(load.await.unwrap(), Outcome::Completed);
        assert_eq!(c.snapshot().status, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_failure_enters_new_note_mode() {
        let api = FakeApi::with_notes(ab_notes());
        api.fail_list.store(true, Ordering::SeqCst);
        let c = controller(&api);

        assert_eq!(c.load().await, Outcome::Failed);
        let snap = c.snapshot();
        assert!(snap.notes.is_empty());
        assert_eq!(snap.selected_id, None);
        assert!(!snap.delete_enabled);
        assert_eq!(
            status_text(&c),
            Some(("Failed to load notes".to_string(), StatusKind::Error))
        );

        // Still usable afterwards
        c.edit_title("Offline draft");
        assert_eq!(c.snapshot().title, "Offline draft");
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_from_empty_store() {
        let api = FakeApi::with_notes(vec![]);
        let c = controller(&api);
        c.load().await;
        assert!(!c.editor().is_editing_existing());

        c.new_note();
        c.edit_title("Groceries");
        c.edit_content("milk, eggs");
        assert_eq!(c.save().await, Outcome::Completed);

        assert_eq!(
            c.collection(),
            vec![Note::new("1", "Groceries", "milk, eggs")]
        );
        assert_eq!(c.snapshot().selected_id, Some(NoteId::new("1")));
        assert_eq!(
            status_text(&c),
            Some(("Saved".to_string(), StatusKind::Success))
        );
        assert!(!c.is_saving());
    }

    #[tokio::test(start_paused = true)]
    async fn test_created_note_is_prepended_with_trimmed_title() {
        let api = FakeApi::with_notes(ab_notes());
        api.next_id.store(10, Ordering::SeqCst);
        let c = controller(&api);
        c.load().await;

        c.new_note();
        c.edit_title("  Fresh  ");
        c.edit_content(" body ");
        c.save().await;

        let ids: Vec<String> = c.collection().iter().map(|n| n.id.to_string()).collect();
        assert_eq!(ids, vec!["11", "1", "2"]);
        assert_eq!(c.collection()[0].title, "Fresh");
        assert_eq!(c.collection()[0].content, " body ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_replaces_in_place() {
        let api = FakeApi::with_notes(ab_notes());
        let c = controller(&api);
        c.load().await;

        c.select(NoteId::new("2"));
        c.edit_content("changed");
        assert_eq!(c.save().await, Outcome::Completed);

        assert_eq!(api.update_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            c.collection(),
            vec![Note::new("1", "A", "x"), Note::new("2", "B", "changed")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_saves_issue_one_call() {
        let api = FakeApi::with_notes(vec![]);
        let c = controller(&api);
        c.load().await;
        c.edit_title("Once");

        let (first, second) = tokio::join!(c.save(), c.save());
        assert_eq!(first, Outcome::Completed);
        assert_eq!(second, Outcome::Ignored);
        assert_eq!(api.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(c.collection().len(), 1);

        // Flag is released, so a later save goes through as an update
        assert_eq!(c.save().await, Outcome::Completed);
        assert_eq!(api.update_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_draft_during_create_keeps_new_id_off_other_note() {
        let api = FakeApi::with_notes(ab_notes());
        api.next_id.store(10, Ordering::SeqCst);
        let c = controller(&api);
        c.load().await;

        c.new_note();
        c.edit_title("Fresh");
        c.edit_content("new body");
        let (outcome, _) = tokio::join!(c.save(), async {
            tokio::time::sleep(Duration::from_millis(1)).await;
            c.select(NoteId::new("2"));
        });
        assert_eq!(outcome, Outcome::Completed);

        // Editor stays on note 2; the created note is only in the list
        assert_eq!(c.editor().selected_id(), Some(&NoteId::new("2")));
        assert_eq!(c.editor().content(), "y");

        c.save().await;
        assert_eq!(api.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            c.collection(),
            vec![
                Note::new("11", "Fresh", "new body"),
                Note::new("1", "A", "x"),
                Note::new("2", "B", "y"),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_draft_during_create_stays_unsaved() {
        let api = FakeApi::with_notes(vec![]);
        let c = controller(&api);
        c.load().await;
        c.edit_title("First");

        tokio::join!(c.save(), async {
            tokio::time::sleep(Duration::from_millis(1)).await;
            c.new_note();
            c.edit_title("Second");
        });

        assert_eq!(c.editor().selected_id(), None);
        assert_eq!(c.editor().title(), "Second");
        assert_eq!(c.collection(), vec![Note::new("1", "First", "")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_update_leaves_state_untouched() {
        let api = FakeApi::with_notes(ab_notes());
        let c = controller(&api);
        c.load().await;
        c.edit_title("Edited but unsaved");

        let notes_before = c.collection();
        let editor_before = c.editor();

        api.fail_writes.store(true, Ordering::SeqCst);
        assert_eq!(c.save().await, Outcome::Failed);

        assert_eq!(c.collection(), notes_before);
        assert_eq!(c.editor(), editor_before);
        assert_eq!(
            status_text(&c),
            Some(("Error saving note".to_string(), StatusKind::Error))
        );
        assert!(!c.is_saving());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_create_keeps_new_note_mode() {
        let api = FakeApi::with_notes(vec![]);
        api.fail_writes.store(true, Ordering::SeqCst);
        let c = controller(&api);
        c.load().await;
        c.edit_title("Draft");

        assert_eq!(c.save().await, Outcome::Failed);
        assert!(c.collection().is_empty());
        assert_eq!(c.editor().selected_id(), None);
        assert_eq!(c.editor().title(), "Draft");
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_selected_returns_to_new_note_mode() {
        let api = FakeApi::with_notes(ab_notes());
        let c = controller(&api);
        c.load().await;
        assert_eq!(c.editor().selected_id(), Some(&NoteId::new("1")));

        assert_eq!(c.delete().await, Outcome::Completed);
        assert!(c.collection().iter().all(|n| n.id.as_str() != "1"));
        let editor = c.editor();
        assert_eq!(editor.selected_id(), None);
        assert_eq!((editor.title(), editor.content()), ("", ""));
        assert!(!c.snapshot().delete_enabled);
        assert_eq!(
            status_text(&c),
            Some(("Deleted".to_string(), StatusKind::Success))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_without_selection_is_ignored() {
        let api = FakeApi::with_notes(vec![]);
        let c = controller(&api);
        c.load().await;

        assert_eq!(c.delete().await, Outcome::Ignored);
        assert_eq!(api.delete_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_delete_sends_one_request() {
        let api = FakeApi::with_notes(ab_notes());
        let c = controller(&api);
        c.load().await;

        let (first, second) = tokio::join!(c.delete(), c.delete());
        assert_eq!(first, Outcome::Completed);
        assert_eq!(second, Outcome::Ignored);
        assert_eq!(api.delete_calls.load(Ordering::SeqCst), 1);
        assert!(!c.is_deleting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_of_already_removed_note_is_benign() {
        let api = FakeApi::with_notes(ab_notes());
        let c = controller(&api);
        c.load().await;
        // Someone else removed it server-side
        api.notes.lock().retain(|n| n.id.as_str() != "1");

        assert_eq!(c.delete().await, Outcome::Completed);
        assert_eq!(c.collection(), vec![Note::new("2", "B", "y")]);
        assert_eq!(
            status_text(&c),
            Some(("Deleted".to_string(), StatusKind::Success))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_delete_keeps_note_and_selection() {
        let api = FakeApi::with_notes(ab_notes());
        let c = controller(&api);
        c.load().await;
        api.fail_writes.store(true, Ordering::SeqCst);

        assert_eq!(c.delete().await, Outcome::Failed);
        assert_eq!(c.collection(), ab_notes());
        assert_eq!(c.editor().selected_id(), Some(&NoteId::new("1")));
        assert_eq!(
            status_text(&c),
            Some(("Error deleting note".to_string(), StatusKind::Error))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_debounced_to_last_query() {
        let api = FakeApi::with_notes(vec![
            Note::new("1", "a", ""),
            Note::new("2", "ab", ""),
            Note::new("3", "abc", ""),
        ]);
        let c = controller(&api);
        c.load().await;
        let mut rx = c.subscribe();
        rx.borrow_and_update();

        c.search_input("a");
        tokio::time::sleep(Duration::from_millis(20)).await;
        c.search_input("ab");
        tokio::time::sleep(Duration::from_millis(20)).await;
        c.search_input("abc");

        tokio::time::sleep(Duration::from_millis(199)).await;
        assert!(!rx.has_changed().unwrap());
        assert_eq!(c.snapshot().notes.len(), 3);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(rx.has_changed().unwrap());
        let ids: Vec<String> = rx
            .borrow_and_update()
            .notes
            .iter()
            .map(|n| n.id.to_string())
            .collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_reapplies_latest_typed_query() {
        let api = FakeApi::with_notes(ab_notes());
        api.next_id.store(10, Ordering::SeqCst);
        let c = controller(&api);
        c.load().await;

        // Typed, but the debounce has not fired yet
        c.search_input("x");
        c.new_note();
        c.edit_content("also x");
        c.save().await;

        let ids: Vec<String> = c.snapshot().notes.iter().map(|n| n.id.to_string()).collect();
        assert_eq!(ids, vec!["11", "1"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_clears_after_delay() {
        let api = FakeApi::with_notes(vec![]);
        let c = controller(&api);
        c.load().await;
        c.edit_title("t");
        c.save().await;
        assert!(c.snapshot().status.is_some());

        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert_eq!(c.snapshot().status, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ctrl_s_saves_and_suppresses_default() {
        let api = FakeApi::with_notes(vec![]);
        let c = controller(&api);
        c.load().await;
        c.edit_title("From shortcut");

        assert!(c.handle_key(KeyChord::meta('s')).await);
        assert_eq!(api.create_calls.load(Ordering::SeqCst), 1);
        assert!(!c.handle_key(KeyChord::ctrl('q')).await);
    }
}
