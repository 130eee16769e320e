//! Time sources used to pace a mock run.
//!
//! The interactive dashboard polls a [`Clock`] from the frame loop, while the
//! blocking driver hands each pause to a [`Scheduler`]. Tests use
//! [`ManualClock`], which implements both and never sleeps.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Default length of one time unit.
pub const DEFAULT_TIME_UNIT: Duration = Duration::from_millis(1000);

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Something that can wait out a pause.
pub trait Scheduler {
    fn wait(&mut self, duration: Duration);
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Scheduler that blocks the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn wait(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Hand-advanced clock. Clones share the same elapsed time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
    waits: Rc<Cell<u32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
            waits: Rc::new(Cell::new(0)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    /// Number of non-zero waits handed to this clock as a [`Scheduler`].
    pub fn wait_count(&self) -> u32 {
        self.waits.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

impl Scheduler for ManualClock {
    fn wait(&mut self, duration: Duration) {
        if !duration.is_zero() {
            self.waits.set(self.waits.get() + 1);
        }
        self.advance(duration);
    }
}

/// Fixed waits of a run, expressed in time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    None,
    /// One unit after each progress checkpoint.
    Checkpoint,
    /// Two units after the finalizing status.
    Finalize,
    /// Half a unit per generated prediction.
    Generation,
}

impl Pause {
    pub fn duration(self, unit: Duration) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Checkpoint => unit,
            Self::Finalize => unit * 2,
            Self::Generation => unit / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pauses_scale_with_unit() {
        let unit = Duration::from_millis(200);
        assert_eq!(Pause::None.duration(unit), Duration::ZERO);
        assert_eq!(Pause::Checkpoint.duration(unit), unit);
        assert_eq!(Pause::Finalize.duration(unit), Duration::from_millis(400));
        assert_eq!(Pause::Generation.duration(unit), Duration::from_millis(100));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let start = clock.now();
        let mut handle = clock.clone();
        handle.wait(Duration::from_secs(3));
        handle.wait(Duration::ZERO);
        assert_eq!(clock.now() - start, Duration::from_secs(3));
        assert_eq!(clock.wait_count(), 1);
    }
}
