//! Rest timer between workout sets
//!
//! A one-shot countdown: started with a duration, ticking once per
//! second down to zero, then stopping on its own. The event loop is the
//! only tick source; `advance` maps wall-clock time onto whole-second
//! ticks so the countdown needs no background schedule of its own.

use std::time::{Duration, Instant};

/// Countdown state for the rest period
#[derive(Debug)]
pub struct RestTimer {
    remaining: Option<u32>,
    active: bool,
    last_tick: Instant,
}

impl Default for RestTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl RestTimer {
    pub fn new() -> Self {
        Self {
            remaining: None,
            active: false,
            last_tick: Instant::now(),
        }
    }

    /// Start a countdown of the given duration
    ///
    /// Starting while a countdown is already running restarts it in
    /// place; there is only ever one tick schedule. A zero duration has
    /// nothing to count down and leaves the timer inactive.
    pub fn start(&mut self, seconds: u32) {
        if seconds == 0 {
            self.stop();
            return;
        }
        self.remaining = Some(seconds);
        self.active = true;
        self.last_tick = Instant::now();
    }

    /// Stop the countdown and clear the remaining value
    pub fn cancel(&mut self) {
        self.stop();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Apply one tick: decrement remaining by exactly 1
    ///
    /// When the value would drop to 0, the timer clears and stops
    /// instead of displaying a zero. Ticking an inactive timer is a
    /// no-op.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        match self.remaining {
            Some(r) if r > 1 => self.remaining = Some(r - 1),
            _ => self.stop(),
        }
    }

    /// Advance the countdown to `now`, ticking once per elapsed second
    ///
    /// Called every event-loop iteration. Sub-second remainders carry
    /// over to the next call; the cadence is approximately one second
    /// with no further drift correction.
    pub fn advance(&mut self, now: Instant) {
        const SECOND: Duration = Duration::from_secs(1);
        while self.active && now.saturating_duration_since(self.last_tick) >= SECOND {
            self.last_tick += SECOND;
            self.tick();
        }
    }

    fn stop(&mut self) {
        self.remaining = None;
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_inactive() {
        let mut timer = RestTimer::new();
        timer.start(3);
        assert!(timer.is_active());
        assert_eq!(timer.remaining(), Some(3));

        timer.tick();
        assert_eq!(timer.remaining(), Some(2));
        timer.tick();
        assert_eq!(timer.remaining(), Some(1));
        timer.tick();

        // N ticks after start(N): no remaining value, not active
        assert_eq!(timer.remaining(), None);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_cancel_clears_immediately() {
        let mut timer = RestTimer::new();
        timer.start(60);
        timer.tick();
        assert_eq!(timer.remaining(), Some(59));

        timer.cancel();
        assert_eq!(timer.remaining(), None);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_tick_when_inactive_is_noop() {
        let mut timer = RestTimer::new();
        timer.tick();
        assert_eq!(timer.remaining(), None);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_restart_replaces_running_countdown() {
        let mut timer = RestTimer::new();
        timer.start(60);
        timer.tick();
        timer.start(90);
        assert_eq!(timer.remaining(), Some(90));

        timer.tick();
        // Still a single schedule: one tick removes exactly one second
        assert_eq!(timer.remaining(), Some(89));
    }

    #[test]
    fn test_zero_duration_never_activates() {
        let mut timer = RestTimer::new();
        timer.start(0);
        assert!(!timer.is_active());
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn test_advance_before_first_second_does_not_tick() {
        let before = Instant::now();
        let mut timer = RestTimer::new();
        timer.start(5);
        // `before` predates the start; saturating elapsed time is zero
        timer.advance(before);
        assert_eq!(timer.remaining(), Some(5));
    }

    #[test]
    fn test_advance_past_duration_completes() {
        let mut timer = RestTimer::new();
        timer.start(3);
        timer.advance(Instant::now() + Duration::from_secs(10));
        assert_eq!(timer.remaining(), None);
        assert!(!timer.is_active());
    }
}
