use std::sync::atomic::{AtomicU64, Ordering};

/// every issued ticket gets a fresh generation, so a list that was dropped and rebuilt never accepts
/// a response meant for its predecessor
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// handed out when a fetch is issued and handed back with its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// the parent id the fetch was scoped to, `None` for top level lists
    pub scope: Option<String>,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// nothing has been requested
    Idle,
    /// a fetch is in flight, render a placeholder
    Loading,
    Loaded(Vec<T>),
}

/// one fetched list of records plus the bookkeeping needed to drop responses that arrive late
#[derive(Debug, Clone)]
pub struct ListState<T> {
    scope: Option<String>,
    generation: u64,
    state: LoadState<T>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            scope: None,
            generation: 0,
            state: LoadState::Idle,
        }
    }
}

impl<T> ListState<T> {
    /// marks the list as loading for `scope` and returns the ticket the response must come back with.
    /// Any ticket issued before this one is now stale
    pub fn begin(&mut self, scope: Option<&str>) -> Ticket {
        self.generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        self.scope = scope.map(str::to_string);
        self.state = LoadState::Loading;
        Ticket {
            scope: self.scope.clone(),
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation && ticket.scope == self.scope
    }

    /// stores `items` if `ticket` is still current. Returns false when the response was dropped as stale
    pub fn resolve(&mut self, ticket: &Ticket, items: Vec<T>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale list response for scope {:?}",
                ticket.scope
            );
            return false;
        }
        self.state = LoadState::Loaded(items);
        true
    }

    /// forgets the list and invalidates any fetch still in flight
    pub fn clear(&mut self) {
        self.generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        self.scope = None;
        self.state = LoadState::Idle;
    }

    /// the loaded records, empty while idle or loading
    pub fn items(&self) -> &[T] {
        match &self.state {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}
