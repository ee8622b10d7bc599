use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

/// Lifecycle of one statistics view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    /// Underlying failure message, shown verbatim.
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Identifies one fetch started by [`ViewSlot::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Holds a view's state and drops responses from superseded fetches.
///
/// Each `begin` bumps the generation; `finish` only applies a result whose
/// ticket matches the latest generation, so the newest request always wins
/// regardless of the order responses arrive in.
#[derive(Debug)]
pub struct ViewSlot<T> {
    state: ViewState<T>,
    generation: u64,
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewSlot<T> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn into_state(self) -> ViewState<T> {
        self.state
    }

    /// Enter `Loading` for a new fetch.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = ViewState::Loading;
        Ticket(self.generation)
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale.
    pub fn finish<E>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool
    where
        E: Display,
    {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping stale view result"
            );
            return false;
        }

        self.state = match result {
            Ok(value) => ViewState::Ready(value),
            Err(err) => ViewState::Error(err.to_string()),
        };
        true
    }

    /// Back to `Idle`, invalidating any fetch in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = ViewState::Idle;
    }
}
