//! Voice dictation types

/// Engine session identifier, unique per `DictationSlot`
pub type SessionId = u64;

/// Dictation controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceState {
    #[default]
    Idle,
    Listening,
}

impl VoiceState {
    pub fn is_listening(&self) -> bool {
        matches!(self, VoiceState::Listening)
    }
}

impl std::fmt::Display for VoiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoiceState::Idle => write!(f, "Idle"),
            VoiceState::Listening => write!(f, "Listening"),
        }
    }
}

/// Snapshot of the controller's session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceSession {
    pub id: SessionId,
    pub is_listening: bool,
    pub continuous: bool,
}

/// Options handed to the engine when a session begins
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Keep listening across engine session ends
    pub continuous: bool,
    /// Recognition language (`auto`, `en`, `de`, ...)
    pub language: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            continuous: true,
            language: "auto".to_string(),
        }
    }
}

/// Events reported by a speech engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Recognized text for segment `index` of the session; interim segments
    /// are replaced by later events with the same index
    Transcript {
        session: SessionId,
        index: usize,
        text: String,
        is_final: bool,
    },
    /// Nothing was said; not an error
    NoSpeech { session: SessionId },
    /// The engine finished the session on its own
    Ended { session: SessionId },
    /// Recognition failed
    Error { session: SessionId, message: String },
}

impl EngineEvent {
    pub fn session(&self) -> SessionId {
        match self {
            EngineEvent::Transcript { session, .. }
            | EngineEvent::NoSpeech { session }
            | EngineEvent::Ended { session }
            | EngineEvent::Error { session, .. } => *session,
        }
    }
}

/// Events surfaced by the dictation controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    /// Listening began with a fresh engine session
    Started { session: SessionId },
    /// Full transcript of the current session so far
    Transcript { text: String },
    /// Continuous mode resumed with a fresh engine session
    Restarted { session: SessionId },
    /// Session ended and the controller is idle
    Stopped,
    /// Another controller took over the dictation slot
    Preempted,
    /// Recognition failed; the controller is idle and can be restarted
    Failed { message: String },
}

/// Errors returned from `start`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoiceError {
    #[error("speech recognition unavailable: {0}")]
    UnsupportedCapability(String),

    #[error("failed to start speech recognition: {0}")]
    Engine(String),
}
