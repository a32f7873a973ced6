//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `panote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use panote_core::{default_log_level, derive_preview, init_logging, NotePreview, NoteSession};

fn main() {
    let log_dir = std::env::temp_dir().join("panote-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(error) = init_logging(default_log_level(), dir) {
            eprintln!("logging disabled: {error}");
        }
    }

    let mut session = NoteSession::seeded();
    session.begin_create();
    session.set_title("Scratch");
    session.set_content("quick linkage check");
    session.save_draft();

    println!("panote_core version={}", panote_core::core_version());
    println!("notes={}", session.notes().len());
    for note in session.notes() {
        match derive_preview(&note.content) {
            NotePreview::Text(text) => println!("note {} preview={text}", note.id),
            NotePreview::TooLong => println!("note {} preview=<too long>", note.id),
        }
    }
    if let Some(notification) = session.notification() {
        println!("notification={}", notification.message);
    }
}
