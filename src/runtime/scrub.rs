use std::time::{Duration, Instant};

/// A keyboard scrub: `H`/`L` presses hold the slider, and it is released once
/// no press arrives for `release_after`.
#[derive(Debug)]
pub struct KeyScrub {
    release_after: Duration,
    last_input: Option<Instant>,
}

impl KeyScrub {
    pub fn new(release_after: Duration) -> Self {
        Self {
            release_after,
            last_input: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.last_input.is_some()
    }

    /// Record a scrub key press. Returns true when it starts a new scrub.
    pub fn nudge(&mut self, now: Instant) -> bool {
        let started = self.last_input.is_none();
        self.last_input = Some(now);
        started
    }

    pub fn should_release(&self, now: Instant) -> bool {
        self.last_input
            .is_some_and(|last| now.saturating_duration_since(last) >= self.release_after)
    }

    pub fn finish(&mut self) {
        self.last_input = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_nudge_starts_and_idle_releases() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut s = KeyScrub::new(ms(600));
        assert!(!s.is_active());
        assert!(!s.should_release(t0));

        assert!(s.nudge(t0));
        assert!(!s.nudge(t0 + ms(400)));
        assert!(!s.should_release(t0 + ms(900)));
        assert!(s.should_release(t0 + ms(1000)));

        s.finish();
        assert!(!s.is_active());
        assert!(!s.should_release(t0 + ms(5000)));
        assert!(s.nudge(t0 + ms(5000)));
    }
}
