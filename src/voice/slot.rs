//! The single dictation slot
//!
//! The microphone is one OS-level stream, so only one dictation session may
//! be live at a time. Every controller is handed the same `DictationSlot`;
//! claiming it ends whatever session held it before and revokes that
//! holder's claim so it cannot restart.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::info;

use super::engine::SpeechEngine;
use super::types::SessionId;

struct Holder {
    session: SessionId,
    engine: Arc<dyn SpeechEngine>,
    revoked: Arc<AtomicBool>,
}

/// A controller's claim on the slot
#[derive(Debug, Clone)]
pub struct ClaimToken {
    revoked: Arc<AtomicBool>,
}

impl ClaimToken {
    /// True once another controller has taken the slot
    pub fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct DictationSlot {
    next_session: AtomicU64,
    holder: Mutex<Option<Holder>>,
}

impl DictationSlot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Allocate a fresh session id
    pub fn next_session(&self) -> SessionId {
        self.next_session.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Take the slot for `session`, ending and revoking the previous holder
    pub fn claim(&self, session: SessionId, engine: Arc<dyn SpeechEngine>) -> ClaimToken {
        let revoked = Arc::new(AtomicBool::new(false));
        let previous = {
            let mut holder = self.holder.lock().unwrap_or_else(|e| e.into_inner());
            holder.replace(Holder {
                session,
                engine,
                revoked: Arc::clone(&revoked),
            })
        };

        if let Some(previous) = previous {
            info!(session = previous.session, "stopping previous dictation session");
            previous.revoked.store(true, Ordering::SeqCst);
            previous.engine.end(previous.session);
        }

        ClaimToken { revoked }
    }

    /// Point the claim at a new session id after a continuous-mode restart.
    /// Returns false when the claim has been revoked meanwhile.
    pub fn rebind(&self, token: &ClaimToken, session: SessionId) -> bool {
        let mut holder = self.holder.lock().unwrap_or_else(|e| e.into_inner());
        match holder.as_mut() {
            Some(current) if Arc::ptr_eq(&current.revoked, &token.revoked) => {
                current.session = session;
                true
            }
            _ => false,
        }
    }

    /// Give the slot back if `token` still holds it
    pub fn release(&self, token: &ClaimToken) {
        let mut holder = self.holder.lock().unwrap_or_else(|e| e.into_inner());
        if holder
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(&current.revoked, &token.revoked))
        {
            *holder = None;
        }
    }

    /// Session currently holding the slot
    pub fn active_session(&self) -> Option<SessionId> {
        self.holder
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|holder| holder.session)
    }
}
