//! Autoplay timer for a carousel.
//!
//! Deadline-based: the controller polls `tick()` from the main loop each
//! frame, the same way the scroll animator is driven. Time is passed in
//! explicitly so tests can advance it without sleeping.

use std::time::{Duration, Instant};

/// Periodic advance timer for one carousel instance.
///
/// At most one deadline is armed at a time: `start` replaces any prior
/// deadline, so two concurrent timers for the same controller cannot
/// exist.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl AutoplayTimer {
    /// Create a stopped timer. A zero interval disables autoplay entirely.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arm the timer: the next fire is one full interval from `now`.
    /// Replaces any previously armed deadline.
    pub fn start(&mut self, now: Instant) {
        if self.interval.is_zero() {
            return;
        }
        self.next_due = Some(now + self.interval);
    }

    /// Disarm the timer.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when the interval has elapsed, re-arming for the next
    /// fire. Returns false while stopped or not yet due.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(4500);

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut timer = AutoplayTimer::new(INTERVAL);
        let t0 = Instant::now();
        assert!(!timer.tick(t0 + INTERVAL * 3));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = AutoplayTimer::new(INTERVAL);
        let t0 = Instant::now();
        timer.start(t0);

        assert!(!timer.tick(t0 + Duration::from_millis(4499)));
        assert!(timer.tick(t0 + Duration::from_millis(4500)));
        // Re-armed: not due again until another full interval passes
        assert!(!timer.tick(t0 + Duration::from_millis(4600)));
        assert!(timer.tick(t0 + Duration::from_millis(9100)));
    }

    #[test]
    fn test_start_twice_leaves_one_timer() {
        let mut timer = AutoplayTimer::new(INTERVAL);
        let t0 = Instant::now();
        timer.start(t0);
        timer.start(t0);

        // One interval later exactly one fire is observed
        assert!(timer.tick(t0 + INTERVAL));
        assert!(!timer.tick(t0 + INTERVAL));
    }

    #[test]
    fn test_stop_disarms() {
        let mut timer = AutoplayTimer::new(INTERVAL);
        let t0 = Instant::now();
        timer.start(t0);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.tick(t0 + INTERVAL * 2));
    }

    #[test]
    fn test_restart_uses_full_interval() {
        let mut timer = AutoplayTimer::new(INTERVAL);
        let t0 = Instant::now();
        timer.start(t0);
        timer.stop();

        // Resumed halfway through: the deadline is a full interval from the restart
        let t1 = t0 + Duration::from_millis(2000);
        timer.start(t1);
        assert!(!timer.tick(t0 + INTERVAL));
        assert!(timer.tick(t1 + INTERVAL));
    }

    #[test]
    fn test_zero_interval_is_disabled() {
        let mut timer = AutoplayTimer::new(Duration::ZERO);
        let t0 = Instant::now();
        timer.start(t0);
        assert!(!timer.is_running());
        assert!(!timer.tick(t0 + Duration::from_secs(10)));
    }
}
