//! Core session logic for Pa-Note.
//! This crate is the single source of truth for note-editing invariants.

pub mod dictation;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;
pub mod session;

pub use dictation::{
    transcription_channel, DictationEngine, DictationError, Transcription, TranscriptionSink,
    TranscriptionStatus,
};
pub use logging::{default_log_level, init_logging};
pub use model::draft::{Alignment, Draft, FormatToken, Formatting};
pub use model::note::{Note, NoteField, NoteId, NoteValidationError};
pub use notify::{Notification, NotificationKind, Notifier, NOTIFICATION_TTL};
pub use repo::note_repo::{MemoryNoteRepository, NoteRepository};
pub use service::note_service::{derive_preview, NotePreview, NoteService, NoteServiceError};
pub use session::NoteSession;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
