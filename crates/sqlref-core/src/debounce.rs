//! Last-edit-wins debouncing with an injected clock.
//!
//! A [`Debouncer`] holds at most one pending value. Every [`push`](Debouncer::push)
//! replaces it and restarts the quiet period; the value is released by
//! [`poll`](Debouncer::poll) once `delay` has passed since the last push.
//! Callers supply `now`, so the type never sleeps and needs no runtime; the
//! CLI drives it from a tokio timer, tests drive it with fixed instants.

use std::time::{Duration, Instant};

/// Default quiet period before a query edit is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value`, discarding anything still pending.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Release the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Release the pending value regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
