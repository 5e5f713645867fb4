//! Speech engine seam

use std::sync::mpsc::Sender;

use super::types::{EngineEvent, SessionId, SessionOptions};

/// A platform speech-to-text capability.
///
/// Implementations report results for a session through `events` until they
/// send `Ended` or `Error`, or until `end` is called for that session.
pub trait SpeechEngine: Send + Sync {
    /// `Err` carries a user-facing reason when recognition cannot run here
    fn availability(&self) -> Result<(), String>;

    fn begin(
        &self,
        session: SessionId,
        options: &SessionOptions,
        events: Sender<EngineEvent>,
    ) -> Result<(), String>;

    /// Tear down a session. Ending an unknown or finished session is a no-op.
    fn end(&self, session: SessionId);
}
