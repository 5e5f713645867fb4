//! Audible start/stop cues

use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use tracing::warn;

/// Which cue to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// High-pitched: dictation started
    Start,
    /// Low-pitched: dictation stopped
    Stop,
}

impl Cue {
    pub fn frequency_hz(self) -> u32 {
        match self {
            Cue::Start => 880,
            Cue::Stop => 440,
        }
    }
}

/// Plays cues. Best effort: failures are logged, never returned.
pub trait CuePlayer: Send + Sync {
    fn play(&self, cue: Cue);
}

/// Plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&self, _cue: Cue) {}
}

/// Short sine tone through sox `play`
#[derive(Debug, Clone)]
pub struct SoxCuePlayer {
    duration: Duration,
}

impl Default for SoxCuePlayer {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(150),
        }
    }
}

impl CuePlayer for SoxCuePlayer {
    fn play(&self, cue: Cue) {
        let spawned = Command::new("play")
            .args([
                "-q",
                "-n",
                "synth",
                &format!("{:.3}", self.duration.as_secs_f32()),
                "sine",
                &cue.frequency_hz().to_string(),
                "vol",
                "0.3",
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                // Reap in the background so the caller never waits on audio
                thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => warn!("Failed to play {:?} cue: {}", cue, e),
        }
    }
}
