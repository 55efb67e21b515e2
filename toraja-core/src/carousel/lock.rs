//! Single-flight guard for slide transitions.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Idle,
    /// A slide animation is running until `until`.
    Transitioning { until: Instant },
}

/// Serializes navigation requests so a timer tick or a double click landing
/// mid-animation cannot move the index twice.
#[derive(Debug, Clone)]
pub struct TransitionLock {
    state: LockState,
    duration: Duration,
}

impl TransitionLock {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: LockState::Idle,
            duration,
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, LockState::Transitioning { .. })
    }

    /// Enter `Transitioning` if idle. Returns false when the request must be
    /// dropped.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        match self.state {
            LockState::Transitioning { .. } => false,
            LockState::Idle => {
                self.state = LockState::Transitioning {
                    until: now + self.duration,
                };
                true
            }
        }
    }

    /// When the running transition is scheduled to finish.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            LockState::Idle => None,
            LockState::Transitioning { until } => Some(until),
        }
    }

    /// Return to `Idle` if the transition has finished by `now`.
    pub fn release_if_due(&mut self, now: Instant) -> bool {
        match self.state {
            LockState::Transitioning { until } if until <= now => {
                self.state = LockState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Settle immediately, e.g. on layout change or unmount.
    pub fn force_release(&mut self) -> bool {
        let was_locked = self.is_transitioning();
        self.state = LockState::Idle;
        was_locked
    }
}
