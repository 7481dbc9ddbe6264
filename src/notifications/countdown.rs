// SPDX-License-Identifier: MPL-2.0
//! Pausable countdown arithmetic.
//!
//! A countdown is a sequence of running segments separated by pauses. Only
//! the remaining time at the start of the current segment is stored; the
//! live value is derived from the segment start and the clock.

use std::time::Duration;
use tokio::time::Instant;

/// Countdown state of a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Countdown {
    planned: Duration,
    remaining: Duration,
    started_at: Instant,
    paused: bool,
}

impl Countdown {
    /// Starts a running countdown of `planned` at `now`.
    pub(crate) fn start(planned: Duration, now: Instant) -> Self {
        Self {
            planned,
            remaining: planned,
            started_at: now,
            paused: false,
        }
    }

    /// Freezes the countdown, folding the elapsed segment into `remaining`.
    ///
    /// Returns `false` if it was already paused.
    pub(crate) fn pause(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        self.remaining = self.remaining_at(now);
        self.paused = true;
        debug_assert!(self.remaining <= self.planned);
        true
    }

    /// Starts a new segment at `now`.
    ///
    /// Returns the time left to schedule, or `None` if it was not paused.
    pub(crate) fn resume(&mut self, now: Instant) -> Option<Duration> {
        if !self.paused {
            return None;
        }
        debug_assert!(self.remaining <= self.planned);
        self.started_at = now;
        self.paused = false;
        Some(self.remaining)
    }

    /// Live remaining time at `now`; frozen while paused.
    pub(crate) fn remaining_at(&self, now: Instant) -> Duration {
        if self.paused {
            return self.remaining;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        self.remaining.saturating_sub(elapsed)
    }

    /// Remaining time stored at the start of the current segment.
    pub(crate) fn remaining(&self) -> Duration {
        self.remaining
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.paused
    }
}
