//! Timer abstraction for the typewriter.
//!
//! The engine never sleeps itself. It asks a [`Scheduler`] to deliver a
//! [`TimerToken`] after a delay and cancels outstanding tokens on restart.
//! [`TimerSlot`] holds the single pending tick so tests can fire it by hand
//! and the async driver can sleep on it.

use std::time::Duration;

/// Identifies one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Wraps a raw token value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Token following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Source of delayed tick delivery.
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler {
    /// Requests that `token` be delivered after `delay`.
    fn schedule(&mut self, token: TimerToken, delay: Duration);

    /// Withdraws `token` if it has not been delivered yet.
    fn cancel(&mut self, token: TimerToken);
}

/// A tick waiting to be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    /// Token to hand back to the engine.
    pub token: TimerToken,
    /// Delay requested when the tick was scheduled.
    pub delay: Duration,
}

/// Scheduler holding at most one pending tick.
///
/// Scheduling replaces any tick still waiting, which matches the engine's
/// one-loop-at-a-time ownership of the display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSlot {
    pending: Option<ScheduledTick>,
}

impl TimerSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Peeks at the pending tick.
    #[must_use]
    pub const fn pending(&self) -> Option<ScheduledTick> {
        self.pending
    }

    /// Removes and returns the pending tick, as if its timer fired.
    pub const fn take(&mut self) -> Option<ScheduledTick> {
        self.pending.take()
    }
}

impl Scheduler for TimerSlot {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.pending = Some(ScheduledTick { token, delay });
    }

    fn cancel(&mut self, token: TimerToken) {
        if self.pending.is_some_and(|tick| tick.token == token) {
            self.pending = None;
        }
    }
}
