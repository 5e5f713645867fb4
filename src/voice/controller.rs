//! Voice dictation controller
//!
//! Wraps a `SpeechEngine` session and mirrors its transcript into the grid
//! query. Engine events carry the session id they were produced for; events
//! from any session other than the current one are dropped, so nothing from
//! a stopped or replaced session can restart dictation.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info, warn};

use super::cue::{Cue, CuePlayer};
use super::engine::SpeechEngine;
use super::slot::{ClaimToken, DictationSlot};
use super::types::{
    EngineEvent, SessionId, SessionOptions, VoiceError, VoiceEvent, VoiceSession, VoiceState,
};
use crate::grid::QueryPaginationController;

struct ActiveSession {
    id: SessionId,
    token: ClaimToken,
}

pub struct VoiceDictationController {
    engine: Arc<dyn SpeechEngine>,
    cues: Arc<dyn CuePlayer>,
    slot: Arc<DictationSlot>,
    options: SessionOptions,
    state: VoiceState,
    session: Option<ActiveSession>,
    /// Transcript segments of the current engine session, by index
    segments: Vec<String>,
    transcript: String,
    pending: Vec<VoiceEvent>,
    last_error: Option<String>,
    event_tx: Sender<EngineEvent>,
    event_rx: Receiver<EngineEvent>,
}

impl VoiceDictationController {
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        cues: Arc<dyn CuePlayer>,
        slot: Arc<DictationSlot>,
        options: SessionOptions,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            engine,
            cues,
            slot,
            options,
            state: VoiceState::Idle,
            session: None,
            segments: Vec::new(),
            transcript: String::new(),
            pending: Vec::new(),
            last_error: None,
            event_tx,
            event_rx,
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state.is_listening()
    }

    pub fn session(&self) -> Option<VoiceSession> {
        self.session.as_ref().map(|active| VoiceSession {
            id: active.id,
            is_listening: self.state.is_listening(),
            continuous: self.options.continuous,
        })
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Applies from the next engine session on
    pub fn set_continuous(&mut self, continuous: bool) {
        self.options.continuous = continuous;
    }

    /// Accumulated transcript of the current engine session
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start listening. A no-op while already listening.
    pub fn start(&mut self) -> Result<(), VoiceError> {
        self.check_preempted();
        if self.state.is_listening() {
            debug!("dictation already listening");
            return Ok(());
        }

        self.engine
            .availability()
            .map_err(VoiceError::UnsupportedCapability)?;

        let id = self.slot.next_session();
        let token = self.slot.claim(id, Arc::clone(&self.engine));
        if let Err(message) = self.engine.begin(id, &self.options, self.event_tx.clone()) {
            self.slot.release(&token);
            warn!("Failed to start dictation: {}", message);
            return Err(VoiceError::Engine(message));
        }

        self.segments.clear();
        self.transcript.clear();
        self.last_error = None;
        self.session = Some(ActiveSession { id, token });
        self.state = VoiceState::Listening;
        self.cues.play(Cue::Start);
        self.pending.push(VoiceEvent::Started { session: id });
        info!(session = id, continuous = self.options.continuous, "dictation started");
        Ok(())
    }

    /// Stop listening. Safe to call when idle.
    pub fn stop(&mut self) {
        self.check_preempted();
        if self.session.is_none() {
            self.state = VoiceState::Idle;
            return;
        }
        self.cues.play(Cue::Stop);
        self.teardown();
        info!("dictation stopped");
    }

    /// Drain engine events into controller events
    pub fn poll_events(&mut self) -> Vec<VoiceEvent> {
        self.check_preempted();
        let mut events = std::mem::take(&mut self.pending);

        while let Ok(event) = self.event_rx.try_recv() {
            let current = self.session.as_ref().map(|active| active.id);
            if current != Some(event.session()) {
                debug!(session = event.session(), "dropping event from stale dictation session");
                continue;
            }

            match event {
                EngineEvent::Transcript { index, text, .. } => {
                    self.record_segment(index, text);
                    events.push(VoiceEvent::Transcript {
                        text: self.transcript.clone(),
                    });
                }
                EngineEvent::NoSpeech { session } => {
                    debug!(session, "no speech detected");
                }
                EngineEvent::Ended { session } => {
                    if self.options.continuous {
                        events.push(self.restart(session));
                    } else {
                        self.teardown();
                        events.push(VoiceEvent::Stopped);
                    }
                }
                EngineEvent::Error { session, message } => {
                    warn!(session, "Dictation failed: {}", message);
                    self.teardown();
                    self.last_error = Some(message.clone());
                    events.push(VoiceEvent::Failed { message });
                }
            }

            if self.session.is_none() {
                break;
            }
        }

        events
    }

    /// Poll and mirror every transcript into the grid query
    pub fn apply_to(&mut self, grid: &mut QueryPaginationController) -> Vec<VoiceEvent> {
        let events = self.poll_events();
        for event in &events {
            if let VoiceEvent::Transcript { text } = event {
                grid.set_query(text.as_str());
            }
        }
        events
    }

    fn record_segment(&mut self, index: usize, text: String) {
        if self.segments.len() <= index {
            self.segments.resize(index + 1, String::new());
        }
        self.segments[index] = text;
        self.transcript = self
            .segments
            .iter()
            .map(|segment| segment.trim())
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
    }

    /// Begin a fresh engine session after the previous one ended on its own
    fn restart(&mut self, ended: SessionId) -> VoiceEvent {
        let id = self.slot.next_session();
        let rebound = self
            .session
            .as_ref()
            .is_some_and(|active| self.slot.rebind(&active.token, id));
        if !rebound {
            self.teardown();
            return VoiceEvent::Preempted;
        }

        if let Err(message) = self.engine.begin(id, &self.options, self.event_tx.clone()) {
            warn!("Failed to restart dictation: {}", message);
            self.teardown();
            self.last_error = Some(message.clone());
            return VoiceEvent::Failed { message };
        }

        if let Some(active) = self.session.as_mut() {
            active.id = id;
        }
        self.segments.clear();
        self.transcript.clear();
        debug!(ended, session = id, "dictation restarted");
        VoiceEvent::Restarted { session: id }
    }

    fn check_preempted(&mut self) {
        let revoked = self
            .session
            .as_ref()
            .is_some_and(|active| active.token.is_revoked());
        if revoked {
            info!("dictation taken over by another session");
            self.teardown();
            self.pending.push(VoiceEvent::Preempted);
        }
    }

    fn teardown(&mut self) {
        if let Some(active) = self.session.take() {
            self.engine.end(active.id);
            self.slot.release(&active.token);
        }
        self.state = VoiceState::Idle;
    }
}

impl Drop for VoiceDictationController {
    fn drop(&mut self) {
        self.teardown();
    }
}
