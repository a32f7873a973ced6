//! Session controller composing the note collection, draft editor,
//! dictation state and notification slot.
//!
//! # Responsibility
//! - Own all mutable state for one note-taking session.
//! - Map operation outcomes to user-visible notifications.
//!
//! # Invariants
//! - At most one draft is open at a time; saving or discarding it leaves
//!   edit mode.
//! - A rejected save keeps the draft and edit mode untouched.
//! - Dictation runs only while a draft is open; every terminal dictation
//!   outcome returns the recording flag to idle.

use crate::dictation::{DictationEngine, DictationError, Transcription, TranscriptionStatus};
use crate::model::draft::{Draft, FormatToken, Formatting};
use crate::model::note::{Note, NoteId};
use crate::notify::{Notification, Notifier};
use crate::repo::note_repo::{MemoryNoteRepository, NoteRepository};
use crate::service::note_service::{NoteService, NoteServiceError};
use chrono::Utc;
use log::{debug, warn};

const MSG_NOTE_ADDED: &str = "Note added successfully";
const MSG_NOTE_UPDATED: &str = "Note updated successfully";
const MSG_NOTE_DELETED: &str = "Note deleted successfully";
const MSG_ALL_DELETED: &str = "All notes deleted successfully";
const MSG_EMPTY_FIELDS: &str = "Note title and content cannot be empty";
const MSG_DICTATION_FAILED: &str = "Failed to record audio";
const MSG_DICTATION_UNSUPPORTED: &str = "Speech recognition is not supported on this device";

const STARTER_NOTE_TITLE: &str = "Note Title";
const STARTER_NOTE_CONTENT: &str =
    "This is a preview of the note content. It will show the first few lines of the note...";

/// One user's note-taking session.
///
/// All mutations are synchronous; the only asynchronous completion is the
/// dictation one-shot, which callers observe via [`NoteSession::poll_dictation`].
pub struct NoteSession<R: NoteRepository = MemoryNoteRepository> {
    notes: NoteService<R>,
    draft: Option<Draft>,
    transcription: Option<Transcription>,
    recording: bool,
    notifier: Notifier,
}

impl NoteSession<MemoryNoteRepository> {
    /// Empty session.
    pub fn new() -> Self {
        Self::with_repository(MemoryNoteRepository::new())
    }

    /// Session pre-populated with the starter note shown on first launch.
    pub fn seeded() -> Self {
        let starter = Note {
            id: 1,
            title: STARTER_NOTE_TITLE.to_string(),
            content: STARTER_NOTE_CONTENT.to_string(),
            created_at: Utc::now(),
        };
        Self::with_repository(MemoryNoteRepository::with_notes(vec![starter]))
    }
}

impl Default for NoteSession<MemoryNoteRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: NoteRepository> NoteSession<R> {
    /// Session over a caller-provided collection backend.
    pub fn with_repository(repo: R) -> Self {
        Self {
            notes: NoteService::new(repo),
            draft: None,
            transcription: None,
            recording: false,
            notifier: Notifier::new(),
        }
    }

    /// Committed notes in display order.
    pub fn notes(&self) -> &[Note] {
        self.notes.notes()
    }

    /// Looks up one committed note.
    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.get_note(id)
    }

    /// Deletes one note. An absent id still reports success.
    pub fn delete_note(&mut self, id: NoteId) {
        self.notes.delete_note(id);
        self.notifier.success(MSG_NOTE_DELETED);
    }

    /// Deletes every note.
    pub fn delete_all(&mut self) {
        self.notes.delete_all();
        self.notifier.success(MSG_ALL_DELETED);
    }

    /// Whether a draft is currently open.
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The open draft, if any.
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Opens a blank draft for a new note, dropping any previous draft and
    /// in-flight dictation.
    pub fn begin_create(&mut self) {
        self.end_dictation();
        self.draft = Some(Draft::new());
    }

    /// Opens a draft seeded from an existing note. Formatting starts from
    /// the unstyled defaults.
    ///
    /// Returns `false` and changes nothing when the id is unknown.
    pub fn begin_edit(&mut self, id: NoteId) -> bool {
        let Some(note) = self.notes.get_note(id) else {
            return false;
        };
        let draft = Draft::for_note(note);
        self.end_dictation();
        self.draft = Some(draft);
        true
    }

    /// Replaces the draft title. Ignored when no draft is open.
    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.title = title.into();
        }
    }

    /// Replaces the draft content. Ignored when no draft is open.
    pub fn set_content(&mut self, content: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.content = content.into();
        }
    }

    /// Applies the toolbar's toggled token set to the draft formatting.
    pub fn set_formatting(&mut self, tokens: &[FormatToken]) {
        if let Some(draft) = self.draft.as_mut() {
            draft.formatting = Formatting::from_tokens(tokens);
        }
    }

    /// Commits the open draft into the collection.
    ///
    /// On success the draft is consumed, edit mode ends and a success
    /// notification is shown. A validation failure keeps the draft so the
    /// user can correct it. A stale update target is a silent no-op that
    /// also keeps the draft.
    pub fn save_draft(&mut self) -> bool {
        let Some(draft) = self.draft.as_ref() else {
            return false;
        };
        let result = match draft.id {
            None => self
                .notes
                .create_note(&draft.title, &draft.content)
                .map(|_| MSG_NOTE_ADDED),
            Some(id) => self
                .notes
                .update_note(id, &draft.title, &draft.content)
                .map(|_| MSG_NOTE_UPDATED),
        };

        match result {
            Ok(message) => {
                self.draft = None;
                self.end_dictation();
                self.notifier.success(message);
                true
            }
            Err(NoteServiceError::EmptyField(_)) => {
                self.notifier.error(MSG_EMPTY_FIELDS);
                false
            }
            Err(NoteServiceError::NoteNotFound(id)) => {
                // Stale target: nothing to update and nothing to tell the
                // user. The draft stays open.
                warn!("event=draft_save_skipped reason=stale_target id={id}");
                false
            }
        }
    }

    /// Leaves edit mode without touching the collection.
    pub fn discard_draft(&mut self) {
        self.draft = None;
        self.end_dictation();
    }

    /// Whether a dictation session is in flight.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Starts a single-utterance dictation session for the open draft.
    ///
    /// Returns `false` when no draft is open, a session is already
    /// running, or the engine rejects the start; an engine rejection also
    /// shows an error notification.
    pub fn start_dictation(&mut self, engine: &mut dyn DictationEngine) -> bool {
        if self.draft.is_none() || self.recording {
            return false;
        }
        match engine.start() {
            Ok(transcription) => {
                self.transcription = Some(transcription);
                self.recording = true;
                debug!("event=dictation_started");
                true
            }
            Err(error) => {
                warn!("event=dictation_rejected reason={error}");
                let message = match error {
                    DictationError::Unavailable => MSG_DICTATION_UNSUPPORTED,
                    DictationError::Failed(_) => MSG_DICTATION_FAILED,
                };
                self.notifier.error(message);
                false
            }
        }
    }

    /// Polls the in-flight dictation session, if any.
    ///
    /// A final transcript is appended to the draft content, space-separated
    /// from existing text. A failure surfaces as an error notification and
    /// leaves the draft unchanged. Every terminal outcome returns the
    /// recording flag to idle.
    pub fn poll_dictation(&mut self) {
        let Some(transcription) = self.transcription.as_ref() else {
            return;
        };
        match transcription.poll() {
            TranscriptionStatus::Pending => {}
            TranscriptionStatus::Done(transcript) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.append_transcript(&transcript);
                }
                debug!(
                    "event=dictation_finished chars={}",
                    transcript.chars().count()
                );
                self.end_dictation();
            }
            TranscriptionStatus::Failed(error) => {
                warn!("event=dictation_failed reason={error}");
                self.notifier.error(MSG_DICTATION_FAILED);
                self.end_dictation();
            }
            TranscriptionStatus::Closed => {
                debug!("event=dictation_closed");
                self.end_dictation();
            }
        }
    }

    fn end_dictation(&mut self) {
        self.transcription = None;
        self.recording = false;
    }

    /// Currently visible notification, if it has not expired.
    pub fn notification(&mut self) -> Option<&Notification> {
        self.notifier.current()
    }
}
