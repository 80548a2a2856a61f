use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Timelike;

/// Source of the wall-clock seconds component stamped into tick labels.
pub trait Clock: Send + Sync {
    /// Seconds within the current minute, `0..=59`.
    fn seconds(&self) -> u32;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn seconds(&self) -> u32 {
        chrono::Local::now().second()
    }
}

/// Clock pinned to a settable seconds value.
#[derive(Debug, Default)]
pub struct FixedClock {
    seconds: AtomicU32,
}

impl FixedClock {
    /// Values past 59 wrap into the minute.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds: AtomicU32::new(seconds % 60),
        }
    }

    pub fn set(&self, seconds: u32) {
        self.seconds.store(seconds % 60, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn seconds(&self) -> u32 {
        self.seconds.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock, SystemClock};

    #[test]
    fn fixed_clock_wraps_into_minute() {
        let clock = FixedClock::new(61);
        assert_eq!(clock.seconds(), 1);
        clock.set(59);
        assert_eq!(clock.seconds(), 59);
    }

    #[test]
    fn system_clock_stays_within_minute() {
        assert!(SystemClock.seconds() < 60);
    }
}
