//! Query/pagination controller for the icon grid
//!
//! State changes only mark the controller dirty. `poll` issues a single fetch
//! once the debounce interval has passed since the last change, so a burst of
//! keystrokes becomes one request for the final state. Every fetch carries a
//! `FetchTicket`; a completed fetch is applied only when its ticket is the
//! latest one issued and its query snapshot still equals the current state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::window::page_window;
use crate::api::{FetchError, IconFetchClient};
use crate::domain::{QueryState, ResultPage, StyleFilter};

/// Identifies one issued fetch and the state it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: QueryState,
}

/// Result of applying a completed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    /// The page is now displayed
    Loaded {
        ticket: FetchTicket,
        items: usize,
        total: u64,
    },
    /// A newer request or state change superseded this fetch
    Discarded { ticket: FetchTicket },
    /// The fetch for the current state failed; the previous page stays
    Failed { ticket: FetchTicket, error: FetchError },
}

#[derive(Debug)]
struct FetchOutcome {
    ticket: FetchTicket,
    result: Result<ResultPage, FetchError>,
}

/// Owns the query state and the displayed result page.
///
/// Fetches are spawned on the ambient tokio runtime, so `poll` and `flush`
/// must be called from within one.
pub struct QueryPaginationController {
    state: QueryState,
    client: Arc<dyn IconFetchClient>,
    debounce: Duration,
    dirty_since: Option<Instant>,
    next_generation: u64,
    latest: Option<FetchTicket>,
    latest_pending: bool,
    in_flight: usize,
    displayed: ResultPage,
    displayed_query: Option<QueryState>,
    last_error: Option<FetchError>,
    outcome_tx: UnboundedSender<FetchOutcome>,
    outcome_rx: UnboundedReceiver<FetchOutcome>,
}

impl QueryPaginationController {
    /// Create a controller. The initial listing is pending until the first poll.
    pub fn new(client: Arc<dyn IconFetchClient>, page_size: u32, debounce: Duration) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: QueryState::new(page_size),
            client,
            debounce,
            dirty_since: Some(Instant::now()),
            next_generation: 0,
            latest: None,
            latest_pending: false,
            in_flight: 0,
            displayed: ResultPage::default(),
            displayed_query: None,
            last_error: None,
            outcome_tx,
            outcome_rx,
        }
    }

    // === State mutators ===

    /// Replace the query text; resets to page 1 when it changes
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.state.text {
            return;
        }
        self.state.text = text;
        self.state.page = 1;
        self.mark_dirty();
    }

    /// Replace the style filter; resets to page 1 when it changes
    pub fn set_style_filter(&mut self, filter: StyleFilter) {
        if filter == self.state.style_filter {
            return;
        }
        self.state.style_filter = filter;
        self.state.page = 1;
        self.mark_dirty();
    }

    /// Jump to a page, clamped to the known page range
    pub fn go_to_page(&mut self, page: u32) {
        let mut page = page.max(1);
        if let Some(total) = self.total_pages() {
            page = page.min(total.max(1));
        }
        if page == self.state.page {
            return;
        }
        self.state.page = page;
        self.mark_dirty();
    }

    /// Advance one page. Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.state.page += 1;
        self.mark_dirty();
        true
    }

    /// Go back one page. Returns false on page 1.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev_page() {
            return false;
        }
        self.state.page -= 1;
        self.mark_dirty();
        true
    }

    fn mark_dirty(&mut self) {
        self.dirty_since = Some(Instant::now());
    }

    // === Fetch scheduling ===

    /// Issue the pending fetch if the debounce interval has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<FetchTicket> {
        let since = self.dirty_since?;
        if now.saturating_duration_since(since) < self.debounce {
            return None;
        }
        Some(self.issue())
    }

    /// Issue the pending fetch immediately, if there is one
    pub fn flush(&mut self) -> Option<FetchTicket> {
        self.dirty_since?;
        Some(self.issue())
    }

    /// True when a state change has not been fetched yet
    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    fn issue(&mut self) -> FetchTicket {
        self.dirty_since = None;
        self.last_error = None;
        self.next_generation += 1;
        let ticket = FetchTicket {
            generation: self.next_generation,
            query: self.state.clone(),
        };
        self.latest = Some(ticket.clone());
        self.latest_pending = true;
        self.in_flight += 1;

        debug!(
            generation = ticket.generation,
            q = %ticket.query.text,
            style = %ticket.query.style_filter,
            page = ticket.query.page,
            "issuing icon fetch"
        );

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        let task_ticket = ticket.clone();
        tokio::spawn(async move {
            let result = client.fetch_page(&task_ticket.query).await;
            let _ = tx.send(FetchOutcome {
                ticket: task_ticket,
                result,
            });
        });

        ticket
    }

    // === Applying results ===

    /// Apply every fetch that has completed so far (non-blocking)
    pub fn drain(&mut self) -> Vec<GridEvent> {
        let mut events = Vec::new();
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            events.push(self.apply(outcome));
        }
        events
    }

    /// Wait for the next in-flight fetch to complete and apply it.
    /// Returns `None` when nothing is in flight.
    pub async fn settle(&mut self) -> Option<GridEvent> {
        if self.in_flight == 0 {
            return None;
        }
        let outcome = self.outcome_rx.recv().await?;
        Some(self.apply(outcome))
    }

    /// Wait until the latest issued fetch has been applied
    pub async fn settle_latest(&mut self) -> Vec<GridEvent> {
        let mut events = Vec::new();
        while self.latest_pending {
            match self.settle().await {
                Some(event) => events.push(event),
                None => break,
            }
        }
        events
    }

    fn apply(&mut self, outcome: FetchOutcome) -> GridEvent {
        let FetchOutcome { ticket, result } = outcome;
        self.in_flight = self.in_flight.saturating_sub(1);

        let is_latest = self
            .latest
            .as_ref()
            .is_some_and(|latest| latest.generation == ticket.generation);
        if is_latest {
            self.latest_pending = false;
        }

        if !is_latest || ticket.query != self.state {
            debug!(generation = ticket.generation, "discarding superseded icon fetch");
            return GridEvent::Discarded { ticket };
        }

        match result {
            Ok(page) => {
                let items = page.len();
                let total = page.total_matching;
                info!(
                    q = %ticket.query.text,
                    style = %ticket.query.style_filter,
                    page = ticket.query.page,
                    items,
                    total,
                    "icon page loaded"
                );
                self.displayed = page;
                self.displayed_query = Some(ticket.query.clone());
                self.last_error = None;
                GridEvent::Loaded {
                    ticket,
                    items,
                    total,
                }
            }
            Err(error) => {
                warn!(generation = ticket.generation, "failed to fetch icons: {}", error);
                self.last_error = Some(error.clone());
                GridEvent::Failed { ticket, error }
            }
        }
    }

    // === Derived values ===

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn current_page(&self) -> u32 {
        self.state.page
    }

    pub fn page_size(&self) -> u32 {
        self.state.page_size
    }

    /// The page currently on screen (possibly from an older state)
    pub fn displayed(&self) -> &ResultPage {
        &self.displayed
    }

    /// Query the displayed page was fetched for
    pub fn displayed_query(&self) -> Option<&QueryState> {
        self.displayed_query.as_ref()
    }

    /// Total match count, known once a page for the current filter has loaded
    pub fn known_total(&self) -> Option<u64> {
        self.displayed_query
            .as_ref()
            .filter(|shown| shown.same_filter(&self.state))
            .map(|_| self.displayed.total_matching)
    }

    /// `ceil(total / page_size)`, once the total is known
    pub fn total_pages(&self) -> Option<u32> {
        self.known_total()?;
        Some(self.displayed.total_pages(self.state.page_size))
    }

    /// With an unknown total one optimistic step past page 1 is allowed, but
    /// only after page 1 for the current filter has been requested. That page
    /// may come back empty.
    pub fn has_next_page(&self) -> bool {
        match self.total_pages() {
            Some(total) => self.state.page < total,
            None => self.state.page == 1 && self.filter_requested(),
        }
    }

    /// Whether a fetch for the current text and style filter has been issued
    fn filter_requested(&self) -> bool {
        self.latest
            .as_ref()
            .is_some_and(|latest| latest.query.same_filter(&self.state))
    }

    pub fn has_prev_page(&self) -> bool {
        self.state.page > 1
    }

    /// Whether the fetch for the current state is still outstanding
    pub fn is_loading(&self) -> bool {
        self.latest_pending
    }

    /// Most recent failure for the current state
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Page numbers for the pagination bar
    pub fn page_window(&self) -> Vec<u32> {
        page_window(self.total_pages().unwrap_or(0), self.state.page)
    }

    /// Header text: total count, plus "Page X of Y" when there are several pages
    pub fn status_line(&self) -> String {
        let Some(total) = self.known_total() else {
            if let Some(error) = &self.last_error {
                return format!("Failed to load icons: {}", error);
            }
            return "Loading icons...".to_string();
        };
        let pages = self.displayed.total_pages(self.state.page_size);
        if pages > 1 {
            format!(
                "Total icons found: {} · Page {} of {}",
                total, self.state.page, pages
            )
        } else {
            format!("Total icons found: {}", total)
        }
    }
}
