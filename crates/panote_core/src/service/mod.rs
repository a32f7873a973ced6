//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into validate-then-commit APIs.
//! - Keep the session layer decoupled from collection storage details.

pub mod note_service;
