use std::time::{Duration, Instant};

use crate::coordinator::TickOutcome;

/// The one repeating deadline that drives `PlaybackCoordinator::tick`.
///
/// There is never more than one pending tick: arming an armed ticker keeps
/// its phase, and a `Halt` outcome disarms it.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arm when `active` and not yet armed; disarm when not `active`.
    pub fn follow(&mut self, active: bool, now: Instant) {
        match (active, self.next_due) {
            (true, None) => self.next_due = Some(now + self.interval),
            (false, Some(_)) => self.next_due = None,
            _ => {}
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Record a tick and schedule the next one unless it asked to halt.
    pub fn fired(&mut self, outcome: TickOutcome, now: Instant) {
        self.next_due = match outcome {
            TickOutcome::Continue => Some(now + self.interval),
            TickOutcome::Halt => None,
        };
    }

    /// How long input polling may block without delaying the next tick.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.next_due
            .map(|due| due.saturating_duration_since(now).min(max))
            .unwrap_or(max)
    }
}
