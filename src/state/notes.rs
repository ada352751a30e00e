use crate::api::ApiResult;
use crate::models::{Note, NoteAdded};
use crate::state::ack::Ack;

pub(crate) const LOAD_ERROR_MESSAGE: &str = "Failed to fetch notes. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListPhase {
    Loading,
    Loaded,
    /// Terminal: only a page reload leaves this state.
    Error(String),
}

/// In-memory mirror of the notes collection behind the list view.
///
/// No DOM in here: the component performs the requests and feeds the results
/// in, then re-renders whenever `revision` moves.
#[derive(Clone, Debug)]
pub(crate) struct NotesState {
    phase: ListPhase,
    notes: Vec<Note>,
    revision: u64,
}

impl NotesState {
    pub fn new() -> Self {
        Self {
            phase: ListPhase::Loading,
            notes: vec![],
            revision: 0,
        }
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == ListPhase::Loaded
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Runs `op` and reports whether it moved `revision`, in the shape
    /// `RwSignal::try_maybe_update` expects. Subscribers are only notified
    /// when the collection actually changed.
    pub fn tracked<U>(&mut self, op: impl FnOnce(&mut Self) -> U) -> (bool, U) {
        let before = self.revision;
        let out = op(self);
        (self.revision != before, out)
    }

    /// Result of the one delayed GET issued after attach.
    ///
    /// Returns false (and changes nothing) once the list has left `Loading`.
    pub fn apply_initial_load(&mut self, result: ApiResult<Vec<Note>>) -> bool {
        if self.phase != ListPhase::Loading {
            return false;
        }

        match result {
            Ok(notes) => {
                self.notes = notes;
                self.phase = ListPhase::Loaded;
            }
            Err(_) => {
                self.notes.clear();
                self.phase = ListPhase::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.touch();
        true
    }

    /// Appends a locally created note. The server id is unknown here, so the
    /// caller supplies a provisional one.
    ///
    /// Ignored in `Error`. While still `Loading` the note is kept, but the
    /// initial load result replaces the whole collection.
    pub fn append(&mut self, added: NoteAdded, created_at: String, provisional_id: String) -> bool {
        if matches!(self.phase, ListPhase::Error(_)) {
            return false;
        }

        self.notes.push(Note {
            id: provisional_id,
            title: added.title,
            body: added.body,
            created_at,
            archived: false,
        });
        self.touch();
        true
    }

    /// Applies a finished DELETE. Local state only changes after the server
    /// confirmed the removal.
    pub fn apply_delete(&mut self, note_id: &str, result: ApiResult<()>) -> Ack {
        match result {
            Ok(()) => {
                self.notes.retain(|n| n.id != note_id);
                self.touch();
                Ack::success("Success", "Note deleted successfully")
            }
            Err(_) => Ack::failure("Failed to delete note"),
        }
    }

    /// Manual refetch from `Loaded`: the server copy replaces everything,
    /// which also drops provisional notes.
    pub fn apply_refresh(&mut self, result: ApiResult<Vec<Note>>) -> Option<Ack> {
        if !self.is_loaded() {
            return None;
        }

        match result {
            Ok(notes) => {
                self.notes = notes;
                self.touch();
                None
            }
            Err(_) => Some(Ack::failure("Failed to fetch notes")),
        }
    }
}

impl Default for NotesState {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn detail_ack(result: ApiResult<Note>) -> Ack {
    match result {
        Ok(note) => Ack::note_detail(note),
        Err(_) => Ack::failure("Failed to fetch note detail"),
    }
}

pub(crate) fn unsynced_ack() -> Ack {
    Ack::info(
        "Note not synced yet",
        "This note was added locally. Refresh the list to manage it.",
    )
}
