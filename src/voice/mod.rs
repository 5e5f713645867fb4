//! Voice dictation into the search query
//!
//! - `VoiceDictationController`: start/stop state machine, continuous restart
//! - `SpeechEngine`: recognition seam, with `SoxWhisperEngine` (sox + whisper-cpp)
//! - `DictationSlot`: at most one live dictation session per process
//! - `CuePlayer`: short start/stop tones

mod controller;
mod cue;
mod engine;
mod slot;
mod types;
mod whisper;


pub use controller::VoiceDictationController;
pub use cue::{Cue, CuePlayer, SilentCuePlayer, SoxCuePlayer};
pub use engine::SpeechEngine;
pub use slot::{ClaimToken, DictationSlot};
pub use types::{
    EngineEvent, SessionId, SessionOptions, VoiceError, VoiceEvent, VoiceSession, VoiceState,
};
pub use whisper::{SoxWhisperEngine, check_availability, clean_transcript};
