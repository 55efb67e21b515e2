//! Interval timer that advances the carousel while nobody is interacting.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AutoPlay {
    interval: Duration,
    /// False while the pointer hovers or a finger rests on the carousel.
    playing: bool,
    next_due: Option<Instant>,
}

impl AutoPlay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            playing: true,
            next_due: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        if !playing {
            self.disarm();
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the period. A running countdown is left untouched; re-arm to
    /// apply it immediately.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start (or restart) the countdown from `now`. Ignored while paused or
    /// when the interval is zero.
    pub fn arm(&mut self, now: Instant) {
        if self.playing && !self.interval.is_zero() {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// If the countdown elapsed by `now`, schedule the following one and
    /// return the instant this tick was due.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<Instant> {
        let due = self.next_due.filter(|due| *due <= now)?;
        self.next_due = Some(due + self.interval);
        Some(due)
    }
}
