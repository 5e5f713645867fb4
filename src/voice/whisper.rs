//! Speech engine backed by sox (`rec`) and whisper-cpp (`whisper-cli`)
//!
//! Each session records fixed-length chunks on a worker thread and
//! transcribes them one by one. A chunk with no speech counts as silence;
//! two silent chunks in a row end the session, as does the first transcript
//! when the session is not continuous.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::engine::SpeechEngine;
use super::types::{EngineEvent, SessionId, SessionOptions};
use crate::config::VoiceSettings;

/// Consecutive silent chunks that end a session
const SILENT_CHUNKS_TO_END: u32 = 2;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

type StopFlags = Arc<Mutex<HashMap<SessionId, Arc<AtomicBool>>>>;

pub struct SoxWhisperEngine {
    model_path: PathBuf,
    work_dir: PathBuf,
    chunk: Duration,
    sessions: StopFlags,
}

impl SoxWhisperEngine {
    pub fn new(model_path: PathBuf, work_dir: PathBuf, chunk: Duration) -> Self {
        Self {
            model_path,
            work_dir,
            chunk: chunk.max(Duration::from_secs(1)),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn from_settings(settings: &VoiceSettings) -> Self {
        Self::new(
            settings.model_path(),
            std::env::temp_dir().join("glyphscout"),
            Duration::from_secs(settings.chunk_secs),
        )
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl SpeechEngine for SoxWhisperEngine {
    fn availability(&self) -> Result<(), String> {
        check_availability(&self.model_path)
    }

    fn begin(
        &self,
        session: SessionId,
        options: &SessionOptions,
        events: Sender<EngineEvent>,
    ) -> Result<(), String> {
        std::fs::create_dir_all(&self.work_dir).map_err(|e| {
            format!(
                "Failed to create recording directory {}: {}",
                self.work_dir.display(),
                e
            )
        })?;

        let stop = Arc::new(AtomicBool::new(false));
        self.sessions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(session, Arc::clone(&stop));

        let worker = SessionWorker {
            session,
            options: options.clone(),
            model_path: self.model_path.clone(),
            work_dir: self.work_dir.clone(),
            chunk: self.chunk,
            stop,
            events,
        };
        let sessions = Arc::clone(&self.sessions);

        thread::Builder::new()
            .name(format!("dictation-{}", session))
            .spawn(move || {
                worker.run();
                sessions
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .remove(&session);
            })
            .map_err(|e| format!("Failed to start dictation thread: {}", e))?;

        debug!(session, "dictation session started");
        Ok(())
    }

    fn end(&self, session: SessionId) {
        if let Some(stop) = self
            .sessions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&session)
        {
            stop.store(true, Ordering::SeqCst);
            debug!(session, "dictation session ended");
        }
    }
}

impl Drop for SoxWhisperEngine {
    fn drop(&mut self) {
        let sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        for stop in sessions.values() {
            stop.store(true, Ordering::SeqCst);
        }
    }
}

struct SessionWorker {
    session: SessionId,
    options: SessionOptions,
    model_path: PathBuf,
    work_dir: PathBuf,
    chunk: Duration,
    stop: Arc<AtomicBool>,
    events: Sender<EngineEvent>,
}

impl SessionWorker {
    fn stopped(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    fn send(&self, event: EngineEvent) -> bool {
        // A dropped receiver means the controller is gone
        self.events.send(event).is_ok()
    }

    fn run(&self) {
        let session = self.session;
        let mut index = 0usize;
        let mut silent_chunks = 0u32;

        loop {
            if self.stopped() {
                return;
            }

            let audio_path = self
                .work_dir
                .join(format!("session-{}-{}.wav", session, index));
            let recorded = self.record_chunk(&audio_path);
            if self.stopped() {
                let _ = std::fs::remove_file(&audio_path);
                return;
            }
            if let Err(message) = recorded {
                self.send(EngineEvent::Error { session, message });
                return;
            }

            let transcribed = run_whisper(&audio_path, &self.model_path, &self.options.language);
            let _ = std::fs::remove_file(&audio_path);
            if self.stopped() {
                return;
            }

            match transcribed {
                Ok(Some(text)) => {
                    silent_chunks = 0;
                    let delivered = self.send(EngineEvent::Transcript {
                        session,
                        index,
                        text,
                        is_final: true,
                    });
                    index += 1;
                    if !delivered {
                        return;
                    }
                    if !self.options.continuous {
                        self.send(EngineEvent::Ended { session });
                        return;
                    }
                }
                Ok(None) => {
                    silent_chunks += 1;
                    if !self.send(EngineEvent::NoSpeech { session }) {
                        return;
                    }
                    if silent_chunks >= SILENT_CHUNKS_TO_END {
                        self.send(EngineEvent::Ended { session });
                        return;
                    }
                }
                Err(message) => {
                    self.send(EngineEvent::Error { session, message });
                    return;
                }
            }
        }
    }

    /// Record one chunk, returning early when the session is stopped
    fn record_chunk(&self, audio_path: &Path) -> Result<(), String> {
        let mut child = start_recording_process(audio_path, self.chunk)?;
        let deadline = Instant::now() + self.chunk + Duration::from_secs(2);

        loop {
            if self.stopped() {
                cancel_recording_process(child);
                return Ok(());
            }
            match child.try_wait() {
                Ok(Some(status)) if status.success() => return Ok(()),
                Ok(Some(status)) => {
                    return Err(format!("Recording failed with {}", status));
                }
                Ok(None) if Instant::now() >= deadline => {
                    warn!(session = self.session, "recording overran its chunk, stopping it");
                    stop_recording_process(child);
                    return Ok(());
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    cancel_recording_process(child);
                    return Err(format!("Failed to wait for recording: {}", e));
                }
            }
        }
    }
}

// === Tooling ===

/// `Err` names the missing piece and how to install it
pub fn check_availability(model_path: &Path) -> Result<(), String> {
    if !command_exists("rec") {
        return Err("sox not found. Install with: brew install sox".to_string());
    }
    if !command_exists("whisper-cli") {
        return Err("whisper-cli not found. Install with: brew install whisper-cpp".to_string());
    }
    if !model_path.exists() {
        return Err(format!("Whisper model not found at {}", model_path.display()));
    }
    Ok(())
}

fn command_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .is_ok_and(|output| output.status.success())
}

fn start_recording_process(audio_path: &Path, length: Duration) -> Result<Child, String> {
    Command::new("rec")
        .args(["-q", "-r", "16000", "-c", "1", "-b", "16"])
        .arg(audio_path)
        .args(["trim", "0", &format!("{}", length.as_secs_f32())])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to start recording: {}", e))
}

/// SIGTERM first so sox can finalize the WAV header
fn stop_recording_process(mut process: Child) {
    #[cfg(unix)]
    {
        let _ = Command::new("kill")
            .args(["-TERM", &process.id().to_string()])
            .output();
        thread::sleep(Duration::from_millis(100));
    }
    let _ = process.kill();
    let _ = process.wait();
}

fn cancel_recording_process(mut process: Child) {
    let _ = process.kill();
    let _ = process.wait();
}

/// `Ok(None)` when whisper heard nothing
fn run_whisper(
    audio_path: &Path,
    model_path: &Path,
    language: &str,
) -> Result<Option<String>, String> {
    let output = Command::new("whisper-cli")
        .arg("-m")
        .arg(model_path)
        .arg("-f")
        .arg(audio_path)
        .args(["--no-timestamps", "-l", language])
        .output()
        .map_err(|e| format!("Failed to run whisper: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Whisper failed: {}", stderr.trim()));
    }

    Ok(clean_transcript(&String::from_utf8_lossy(&output.stdout)))
}

/// Trim whisper output and drop its non-speech markers like `[BLANK_AUDIO]`
pub fn clean_transcript(raw: &str) -> Option<String> {
    let text = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_non_speech_marker(line))
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() { None } else { Some(text) }
}

fn is_non_speech_marker(line: &str) -> bool {
    (line.starts_with('[') && line.ends_with(']')) || (line.starts_with('(') && line.ends_with(')'))
}
