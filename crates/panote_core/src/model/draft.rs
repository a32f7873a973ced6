//! Draft editing model and display formatting flags.
//!
//! # Responsibility
//! - Hold the in-progress note independently of the committed collection.
//! - Derive formatting flags from toggle-group token sets and project them
//!   back for toolbar state.
//!
//! # Invariants
//! - A draft with `id == None` commits as a create, otherwise as an update
//!   of that note.
//! - Formatting is presentational only; it is never persisted on a note
//!   and resets to defaults whenever a draft is started or seeded.

use crate::model::note::{Note, NoteId};
use serde::{Deserialize, Serialize};

/// Paragraph alignment for the draft text area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// One toggle token emitted by the formatting toolbar.
///
/// Style tokens combine freely; the toolbar enforces that at most one
/// alignment token is present in a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatToken {
    Bold,
    Italic,
    Underline,
    Left,
    Center,
    Right,
}

impl FormatToken {
    /// Parses a toolbar token name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bold" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "underline" => Some(Self::Underline),
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Stable token name used by the toolbar.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    fn alignment(self) -> Option<Alignment> {
        match self {
            Self::Left => Some(Alignment::Left),
            Self::Center => Some(Alignment::Center),
            Self::Right => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Display-only styling flags for the draft text area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatting {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub align: Alignment,
}

impl Formatting {
    /// Derives flags from the set of currently toggled tokens.
    ///
    /// Bold/italic/underline are independent presence flags. The first
    /// alignment token wins; a set without one falls back to `Left`.
    pub fn from_tokens(tokens: &[FormatToken]) -> Self {
        Self {
            bold: tokens.contains(&FormatToken::Bold),
            italic: tokens.contains(&FormatToken::Italic),
            underline: tokens.contains(&FormatToken::Underline),
            align: tokens
                .iter()
                .find_map(|token| token.alignment())
                .unwrap_or_default(),
        }
    }

    /// Projects the flags back into the token set driving toolbar state.
    pub fn active_tokens(self) -> Vec<FormatToken> {
        let mut tokens = Vec::with_capacity(4);
        if self.bold {
            tokens.push(FormatToken::Bold);
        }
        if self.italic {
            tokens.push(FormatToken::Italic);
        }
        if self.underline {
            tokens.push(FormatToken::Underline);
        }
        tokens.push(match self.align {
            Alignment::Left => FormatToken::Left,
            Alignment::Center => FormatToken::Center,
            Alignment::Right => FormatToken::Right,
        });
        tokens
    }
}

/// The in-progress note being created or edited.
///
/// Fields are unconstrained while editing; validation happens only when
/// the draft is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// `None` while creating; the target note id while editing.
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub formatting: Formatting,
}

impl Draft {
    /// Blank draft for a brand-new note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a draft from an existing note.
    ///
    /// Formatting is not persisted on notes, so editing always starts from
    /// the unstyled defaults.
    pub fn for_note(note: &Note) -> Self {
        Self {
            id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            formatting: Formatting::default(),
        }
    }

    /// Whether committing this draft updates an existing note.
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }

    /// Appends a dictated transcript to the content, space-separated when
    /// content is already present.
    pub fn append_transcript(&mut self, transcript: &str) {
        if !self.content.is_empty() {
            self.content.push(' ');
        }
        self.content.push_str(transcript);
    }
}
