//! Note collection use-case service.
//!
//! # Responsibility
//! - Provide validate-then-commit create/update/delete/list entry points.
//! - Derive the content preview projection for note cards.
//!
//! # Invariants
//! - No mutation touches the collection after a validation failure.
//! - `update_note` preserves the target note's `created_at`.
//! - Deleting an absent id is a no-op, not an error.

use crate::model::note::{validate_fields, Note, NoteField, NoteId, NoteValidationError};
use crate::repo::note_repo::NoteRepository;
use chrono::Utc;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Longest content, in characters, still rendered on a note card.
const PREVIEW_MAX_CHARS: usize = 150;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Service error for note collection use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Title or content blank after trimming; nothing was committed.
    EmptyField(NoteField),
    /// Update target does not exist (stale id).
    NoteNotFound(NoteId),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "note {field} cannot be empty"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for NoteServiceError {}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        match value {
            NoteValidationError::EmptyField(field) => Self::EmptyField(field),
        }
    }
}

/// Content preview shown on a note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotePreview {
    /// Whitespace-collapsed content short enough to display.
    Text(String),
    /// Content exceeds the card budget and is not previewed.
    TooLong,
}

/// Use-case facade over a note repository.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a note from trimmed non-empty fields.
    pub fn create_note(&mut self, title: &str, content: &str) -> Result<Note, NoteServiceError> {
        let (title, content) = validate_fields(title, content)?;
        let note = self.repo.insert(title, content, Utc::now());
        info!(
            "event=note_created id={} total={}",
            note.id,
            self.repo.list().len()
        );
        Ok(note)
    }

    /// Replaces title/content of an existing note, preserving `created_at`.
    pub fn update_note(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
    ) -> Result<Note, NoteServiceError> {
        let (title, content) = validate_fields(title, content)?;
        let note = self
            .repo
            .replace(id, title, content)
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        info!("event=note_updated id={}", note.id);
        Ok(note)
    }

    /// Removes one note. Returns whether anything was removed; an absent
    /// id is a successful no-op.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let removed = self.repo.remove(id);
        debug!("event=note_deleted id={id} removed={removed}");
        removed
    }

    /// Clears the collection unconditionally.
    pub fn delete_all(&mut self) -> usize {
        let dropped = self.repo.clear();
        info!("event=notes_cleared dropped={dropped}");
        dropped
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.repo.get(id)
    }

    /// All committed notes in display order.
    pub fn notes(&self) -> &[Note] {
        self.repo.list()
    }
}

/// Derives the card preview for note content.
///
/// Rules:
/// - content longer than 150 characters is not previewed;
/// - otherwise runs of whitespace collapse to single spaces.
pub fn derive_preview(content: &str) -> NotePreview {
    if content.chars().count() > PREVIEW_MAX_CHARS {
        return NotePreview::TooLong;
    }
    let collapsed = WHITESPACE_RE.replace_all(content, " ");
    NotePreview::Text(collapsed.trim().to_string())
}
