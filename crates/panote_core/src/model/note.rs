//! Note domain model.
//!
//! # Responsibility
//! - Define the committed note record and its identifier type.
//! - Own save-time field validation (trim, reject blank).
//!
//! # Invariants
//! - `id` is unique within one collection and assigned by the repository.
//! - `created_at` is set once when a note is first committed and never
//!   changes across edits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collection-local identifier for a committed note.
///
/// Ids are small monotonically assigned integers, not global handles;
/// after a delete the next create may legitimately reuse a value.
pub type NoteId = i64;

/// The user-entered field that failed save validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteField {
    Title,
    Content,
}

impl Display for NoteField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Content => write!(f, "content"),
        }
    }
}

/// Save-time validation error for note fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// The field is empty after trimming surrounding whitespace.
    EmptyField(NoteField),
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "note {field} cannot be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// One committed note in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique within the collection, assigned at commit time.
    pub id: NoteId,
    /// Trimmed, non-empty.
    pub title: String,
    /// Trimmed, non-empty.
    pub content: String,
    /// Creation timestamp, preserved across edits.
    pub created_at: DateTime<Utc>,
}

/// Trims both fields and rejects blank input.
///
/// Returns the trimmed `(title, content)` pair that the commit must use,
/// so validation and normalization cannot drift apart.
pub fn validate_fields(
    title: &str,
    content: &str,
) -> Result<(String, String), NoteValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(NoteValidationError::EmptyField(NoteField::Title));
    }
    let content = content.trim();
    if content.is_empty() {
        return Err(NoteValidationError::EmptyField(NoteField::Content));
    }
    Ok((title.to_string(), content.to_string()))
}
