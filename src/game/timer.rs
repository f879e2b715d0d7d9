//! One-shot memorization timer.
//!
//! The timer is owned by the Playing phase. Dropping it cancels it, so a
//! timer from a finished or abandoned round can never fire into a new one.

use std::time::{Duration, Instant};

/// Emitted when a scheduled action fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Memorization time is over; the target should no longer be shown
    TargetHidden,
}

/// Deadline that fires [`TimerEvent::TargetHidden`] at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorizeTimer {
    deadline: Instant,
    fired: bool,
}

impl MemorizeTimer {
    /// Schedules the timer `duration` after `now`.
    #[must_use]
    pub fn schedule(now: Instant, duration: Duration) -> Self {
        Self {
            deadline: now + duration,
            fired: false,
        }
    }

    /// True until the timer has fired.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.fired
    }

    /// Time left before firing; zero once due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        if self.fired {
            Duration::ZERO
        } else {
            self.deadline.saturating_duration_since(now)
        }
    }

    /// Fires if the deadline has passed and the timer has not fired yet.
    pub fn poll(&mut self, now: Instant) -> Option<TimerEvent> {
        if self.fired || now < self.deadline {
            return None;
        }
        self.fired = true;
        Some(TimerEvent::TargetHidden)
    }
}
