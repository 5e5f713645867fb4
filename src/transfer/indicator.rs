//! Per-icon "just copied" indicator
//!
//! Each icon owns at most one pending clear. Starting a new action on an icon
//! cancels its pending clear, so a stale deadline can never wipe a newer
//! flash. Icons never share deadlines.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a completed action stays visible
pub const FLASH_DURATION: Duration = Duration::from_secs(2);

/// Which action finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    CopiedLink,
    CopiedMarkup,
    Downloaded,
}

/// What the icon shows until its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Done(TransferKind),
    Failed(TransferKind),
}

#[derive(Debug)]
struct Entry {
    flash: Flash,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct TransferIndicator {
    duration: Duration,
    entries: HashMap<String, Entry>,
}

impl Default for TransferIndicator {
    fn default() -> Self {
        Self::new(FLASH_DURATION)
    }
}

impl TransferIndicator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            entries: HashMap::new(),
        }
    }

    /// A new action started on `icon_id`: drop its current flash and deadline
    pub fn begin(&mut self, icon_id: &str) {
        self.entries.remove(icon_id);
    }

    /// Record the outcome of an action and arm its clear deadline
    pub fn record<T, E>(
        &mut self,
        icon_id: &str,
        kind: TransferKind,
        result: &Result<T, E>,
        now: Instant,
    ) -> Flash {
        let flash = match result {
            Ok(_) => Flash::Done(kind),
            Err(_) => Flash::Failed(kind),
        };
        self.entries.insert(
            icon_id.to_string(),
            Entry {
                flash,
                expires_at: now + self.duration,
            },
        );
        flash
    }

    /// Cancel the flash of one icon
    pub fn cancel(&mut self, icon_id: &str) {
        self.entries.remove(icon_id);
    }

    /// Current flash for an icon, if it has not expired
    pub fn flash(&self, icon_id: &str, now: Instant) -> Option<Flash> {
        self.entries
            .get(icon_id)
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.flash)
    }

    /// Clear expired flashes; returns the icons that were cleared
    pub fn poll(&mut self, now: Instant) -> Vec<String> {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| now >= entry.expires_at)
            .map(|(id, _)| id.clone())
            .collect();
        for id in &expired {
            self.entries.remove(id);
        }
        expired
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK: Result<(), ()> = Ok(());

    #[test]
    fn test_flash_clears_after_duration() {
        let mut indicator = TransferIndicator::default();
        let t0 = Instant::now();
        indicator.record("house-solid", TransferKind::CopiedMarkup, &OK, t0);

        assert_eq!(
            indicator.flash("house-solid", t0 + Duration::from_millis(1999)),
            Some(Flash::Done(TransferKind::CopiedMarkup))
        );
        assert!(indicator.poll(t0 + Duration::from_millis(1999)).is_empty());
        assert_eq!(indicator.poll(t0 + FLASH_DURATION), vec!["house-solid".to_string()]);
        assert!(indicator.is_empty());
    }

    #[test]
    fn test_new_action_cancels_pending_clear() {
        let mut indicator = TransferIndicator::default();
        let t0 = Instant::now();
        indicator.record("house-solid", TransferKind::CopiedLink, &OK, t0);

        let t1 = t0 + Duration::from_millis(1500);
        indicator.begin("house-solid");
        assert_eq!(indicator.flash("house-solid", t1), None);
        indicator.record("house-solid", TransferKind::Downloaded, &OK, t1);

        // The first deadline has passed but the second flash survives it
        let t2 = t0 + Duration::from_millis(2500);
        assert!(indicator.poll(t2).is_empty());
        assert_eq!(
            indicator.flash("house-solid", t2),
            Some(Flash::Done(TransferKind::Downloaded))
        );
    }

    #[test]
    fn test_icons_are_independent() {
        let mut indicator = TransferIndicator::default();
        let t0 = Instant::now();
        indicator.record("a-solid", TransferKind::CopiedLink, &OK, t0);
        indicator.record(
            "b-solid",
            TransferKind::CopiedMarkup,
            &Err::<(), _>("denied"),
            t0 + Duration::from_secs(1),
        );

        assert_eq!(indicator.poll(t0 + FLASH_DURATION), vec!["a-solid".to_string()]);
        assert_eq!(
            indicator.flash("b-solid", t0 + FLASH_DURATION),
            Some(Flash::Failed(TransferKind::CopiedMarkup))
        );
        indicator.cancel("b-solid");
        assert!(indicator.is_empty());
    }
}
