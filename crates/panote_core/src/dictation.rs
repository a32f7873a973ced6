//! Speech-to-text adapter seam.
//!
//! # Responsibility
//! - Define the engine contract for platform dictation capabilities.
//! - Carry one dictation session's result over a one-shot channel.
//!
//! # Invariants
//! - A `Transcription` yields at most one terminal outcome.
//! - Dropping the sink without finishing closes the session with neither
//!   a transcript nor an error.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Failure modes of the platform dictation capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationError {
    /// The platform has no speech recognition capability.
    Unavailable,
    /// Recognition started but failed mid-session.
    Failed(String),
}

impl Display for DictationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "speech recognition is not available on this platform"),
            Self::Failed(reason) => write!(f, "speech recognition failed: {reason}"),
        }
    }
}

impl Error for DictationError {}

/// Platform speech-to-text capability, single-utterance mode.
///
/// `start` either rejects up front (capability missing) or hands back the
/// receiving end of one dictation session.
pub trait DictationEngine {
    fn start(&mut self) -> Result<Transcription, DictationError>;
}

/// Observed state of an in-flight dictation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionStatus {
    /// No terminal event yet.
    Pending,
    /// The single final transcript was produced.
    Done(String),
    /// The session failed; no transcript will arrive.
    Failed(DictationError),
    /// The session ended without recognizing anything.
    Closed,
}

/// Receiving end of one dictation session.
#[derive(Debug)]
pub struct Transcription {
    rx: Receiver<Result<String, DictationError>>,
}

impl Transcription {
    /// Non-blocking poll for the session outcome.
    pub fn poll(&self) -> TranscriptionStatus {
        match self.rx.try_recv() {
            Ok(Ok(transcript)) => TranscriptionStatus::Done(transcript),
            Ok(Err(error)) => TranscriptionStatus::Failed(error),
            Err(TryRecvError::Empty) => TranscriptionStatus::Pending,
            Err(TryRecvError::Disconnected) => TranscriptionStatus::Closed,
        }
    }
}

/// Producing end handed to engine implementations.
///
/// The completion methods consume the sink, enforcing the single-result
/// contract at the type level.
#[derive(Debug)]
pub struct TranscriptionSink {
    tx: Sender<Result<String, DictationError>>,
}

impl TranscriptionSink {
    /// Completes the session with the final transcript.
    pub fn finish(self, transcript: impl Into<String>) {
        let _ = self.tx.send(Ok(transcript.into()));
    }

    /// Completes the session with a mid-session failure.
    pub fn fail(self, error: DictationError) {
        let _ = self.tx.send(Err(error));
    }
}

/// Creates the two ends of one dictation session.
pub fn transcription_channel() -> (TranscriptionSink, Transcription) {
    let (tx, rx) = mpsc::channel();
    (TranscriptionSink { tx }, Transcription { rx })
}

#[cfg(test)]
mod tests {
    use super::{transcription_channel, DictationError, TranscriptionStatus};

    #[test]
    fn poll_is_pending_until_the_sink_finishes() {
        let (sink, transcription) = transcription_channel();
        assert_eq!(transcription.poll(), TranscriptionStatus::Pending);

        sink.finish("hello");
        assert_eq!(
            transcription.poll(),
            TranscriptionStatus::Done("hello".to_string())
        );
    }

    #[test]
    fn poll_surfaces_session_failure() {
        let (sink, transcription) = transcription_channel();
        sink.fail(DictationError::Failed("microphone".to_string()));

        assert_eq!(
            transcription.poll(),
            TranscriptionStatus::Failed(DictationError::Failed("microphone".to_string()))
        );
    }

    #[test]
    fn dropped_sink_closes_the_session_without_result() {
        let (sink, transcription) = transcription_channel();
        drop(sink);
        assert_eq!(transcription.poll(), TranscriptionStatus::Closed);
    }
}
