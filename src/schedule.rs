//! Auto-refresh scheduling — a cancellable repeating task over an injectable clock.
//!
//! `RefreshTimer` never sleeps on its own. The owner asks it whether a firing
//! is due at the clock's current time; with `SystemClock` that is real time,
//! with `ManualClock` tests advance time by hand.

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source plus a wall clock for "last updated" stamps.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;

    fn wall_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Real time, measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    elapsed: Rc<Cell<Duration>>,
    wall_origin: DateTime<Utc>,
}

impl ManualClock {
    /// A clock at zero whose wall time starts at `wall_origin`.
    pub fn new(wall_origin: DateTime<Utc>) -> Self {
        Self {
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
            wall_origin,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.elapsed.get()
    }

    fn wall_now(&self) -> DateTime<Utc> {
        chrono::Duration::from_std(self.elapsed.get())
            .ok()
            .and_then(|elapsed| self.wall_origin.checked_add_signed(elapsed))
            .unwrap_or(self.wall_origin)
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn wall_now(&self) -> DateTime<Utc> {
        (**self).wall_now()
    }
}

/// A repeating task that can be cancelled and re-armed.
///
/// Each `start` creates a new schedule (a new generation); firings of an
/// earlier schedule can never leak into the new one.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Option<Duration>,
    generation: u64,
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Incremented on every `start`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the timer: first firing one interval after `now`.
    pub fn start(&mut self, now: Duration) {
        self.generation += 1;
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Time left until the next firing; `None` when disarmed.
    pub fn due_in(&self, now: Duration) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_sub(now))
    }

    /// Consume a due firing. Returns `true` at most once per call.
    ///
    /// Intervals missed while nobody polled collapse into one firing; the
    /// next firing stays on the original cadence.
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if !self.interval.is_zero() {
            while next <= now {
                next += self.interval;
            }
        }
        self.next_due = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn test_disarmed_timer_never_fires() {
        let mut timer = RefreshTimer::new(MINUTE);
        assert!(!timer.fire_if_due(MINUTE * 10));
        assert_eq!(timer.due_in(Duration::ZERO), None);
    }

    #[test]
    fn test_fires_every_interval() {
        let mut timer = RefreshTimer::new(MINUTE);
        timer.start(Duration::ZERO);
        assert!(!timer.fire_if_due(Duration::from_secs(59)));
        assert!(timer.fire_if_due(MINUTE));
        assert!(!timer.fire_if_due(MINUTE));
        assert!(timer.fire_if_due(MINUTE * 2));
    }

    #[test]
    fn test_missed_intervals_collapse() {
        let mut timer = RefreshTimer::new(MINUTE);
        timer.start(Duration::ZERO);
        assert!(timer.fire_if_due(Duration::from_secs(150)));
        assert!(!timer.fire_if_due(Duration::from_secs(170)));
        assert_eq!(timer.due_in(Duration::from_secs(170)), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_cancel_and_restart() {
        let mut timer = RefreshTimer::new(MINUTE);
        timer.start(Duration::ZERO);
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(MINUTE * 5));

        timer.start(Duration::from_secs(30));
        assert_eq!(timer.generation(), 2);
        assert!(!timer.fire_if_due(MINUTE));
        assert!(timer.fire_if_due(Duration::from_secs(90)));
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::default();
        let other = clock.clone();
        clock.advance(MINUTE);
        assert_eq!(other.now(), MINUTE);
        assert_eq!(other.wall_now().timestamp(), 60);
    }
}
