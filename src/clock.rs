//! Clock sources and elapsed-time measurement.
//!
//! The runner never reads the system clock directly; it is handed a
//! [`Clock`] so tests can swap in [`SteppingClock`] and get exact timings.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since this clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Production clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that moves forward by `step` on every reading.
///
/// The first reading returns `step`, the second `2 * step`, and so on.
#[derive(Debug)]
pub struct SteppingClock {
    current: Cell<Duration>,
    step: Duration,
    reads: Cell<u64>,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            current: Cell::new(Duration::ZERO),
            step,
            reads: Cell::new(0),
        }
    }

    /// How many times [`Clock::now`] has been called
    pub fn reads(&self) -> u64 {
        self.reads.get()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        let next = self.current.get().saturating_add(self.step);
        self.current.set(next);
        self.reads.set(self.reads.get() + 1);
        next
    }
}

/// A started stopwatch over some [`Clock`].
///
/// Reading the elapsed time does not stop the timer.
#[derive(Debug)]
pub struct Timer<'a, C: Clock + ?Sized> {
    clock: &'a C,
    started: Duration,
}

impl<'a, C: Clock + ?Sized> Timer<'a, C> {
    /// Capture the clock's current reading as the start point
    pub fn start(clock: &'a C) -> Self {
        Self {
            started: clock.now(),
            clock,
        }
    }

    /// Time since [`Timer::start`]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started)
    }

    /// Fractional seconds since [`Timer::start`], at nanosecond resolution
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let t1 = clock.now();
        std::thread::sleep(Duration::from_millis(2));
        let t2 = clock.now();

        assert!(t2 > t1);
    }

    #[test]
    fn test_stepping_clock_advances_per_read() {
        let clock = SteppingClock::new(Duration::from_millis(5));
        assert_eq!(clock.now(), Duration::from_millis(5));
        assert_eq!(clock.now(), Duration::from_millis(10));
        assert_eq!(clock.reads(), 2);
    }

    #[test]
    fn test_timer_elapsed_secs_on_stepping_clock() {
        let clock = SteppingClock::new(Duration::from_millis(250));
        let timer = Timer::start(&clock);

        assert_eq!(timer.elapsed_secs(), 0.25);
        // Still running: a second reading sees another step.
        assert_eq!(timer.elapsed_secs(), 0.5);
    }

    #[test]
    fn test_timer_sub_millisecond_resolution() {
        let clock = SteppingClock::new(Duration::from_nanos(1_500));
        let timer = Timer::start(&clock);

        let secs = timer.elapsed_secs();
        assert!((secs - 0.000_001_5).abs() < 1e-12);
    }

    #[test]
    fn test_timer_real_clock_non_negative() {
        let clock = MonotonicClock::new();
        let timer = Timer::start(&clock);
        assert!(timer.elapsed_secs() >= 0.0);
    }
}
