//! Note collection contract and the in-memory implementation.
//!
//! # Responsibility
//! - Own the authoritative note list and id assignment.
//! - Keep collection storage details behind a use-case oriented trait.
//!
//! # Invariants
//! - Every stored note has a unique id.
//! - Ids are assigned as `max(existing) + 1`, or `1` for an empty
//!   collection. Safe only because there is exactly one writer.
//! - Insertion order is preserved for display stability.

use crate::model::note::{Note, NoteId};
use chrono::{DateTime, Utc};

/// Storage interface for the note collection.
///
/// Callers hand in already-validated, trimmed fields; repositories never
/// re-validate.
pub trait NoteRepository {
    /// Appends a new note, assigning the next id.
    fn insert(&mut self, title: String, content: String, created_at: DateTime<Utc>) -> Note;
    /// Replaces title/content of the note with `id` in place, preserving
    /// `created_at` and list position. Returns `None` when absent.
    fn replace(&mut self, id: NoteId, title: String, content: String) -> Option<Note>;
    /// Removes the note with `id`. Returns whether a note was removed.
    fn remove(&mut self, id: NoteId) -> bool;
    /// Removes every note, returning how many were dropped.
    fn clear(&mut self) -> usize;
    /// Looks up one note by id.
    fn get(&self, id: NoteId) -> Option<&Note>;
    /// All notes in insertion order.
    fn list(&self) -> &[Note];
}

/// Vec-backed single-writer note collection.
#[derive(Debug, Default)]
pub struct MemoryNoteRepository {
    notes: Vec<Note>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection pre-populated with already-committed notes.
    ///
    /// Id assignment derives from the maximum id present, so seeded ids
    /// are never handed out again. Callers keep seeded ids unique.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    fn next_id(&self) -> NoteId {
        self.notes
            .iter()
            .map(|note| note.id)
            .max()
            .map_or(1, |id| id + 1)
    }
}

impl NoteRepository for MemoryNoteRepository {
    fn insert(&mut self, title: String, content: String, created_at: DateTime<Utc>) -> Note {
        let note = Note {
            id: self.next_id(),
            title,
            content,
            created_at,
        };
        self.notes.push(note.clone());
        note
    }

    fn replace(&mut self, id: NoteId, title: String, content: String) -> Option<Note> {
        let note = self.notes.iter_mut().find(|note| note.id == id)?;
        note.title = title;
        note.content = content;
        Some(note.clone())
    }

    fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    fn clear(&mut self) -> usize {
        let dropped = self.notes.len();
        self.notes.clear();
        dropped
    }

    fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn list(&self) -> &[Note] {
        &self.notes
    }
}
