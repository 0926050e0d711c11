//! Scoped wall-clock measurement.
//!
//! A [`ScopedTimer`] records [`Instant::now`] when created and hands the elapsed
//! [`Duration`] to its report callback exactly once, when it goes out of scope.

use log::trace;
use std::time::{Duration, Instant};

const NANO_TO_MICRO: f64 = 0.001;
const MICRO_TO_MILLI: f64 = 0.001;

/// Converts a duration to fractional milliseconds at nanosecond resolution.
///
/// ```
/// use std::time::Duration;
/// use sortbench::timer::millis;
///
/// assert!((millis(Duration::from_micros(1500)) - 1.5).abs() < 1e-12);
/// ```
pub fn millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 * NANO_TO_MICRO * MICRO_TO_MILLI
}

/// RAII guard that reports how long it was alive.
///
/// The guard is neither `Clone` nor `Copy`, so a measurement can only be reported by the
/// guard that started it.
///
/// ```
/// use std::time::Duration;
/// use sortbench::timer::ScopedTimer;
///
/// let mut elapsed = None;
/// {
///     let _timer = ScopedTimer::new(|d: Duration| elapsed = Some(d));
///     let _ = std::hint::black_box((0..1000).sum::<u64>());
/// }
/// assert!(elapsed.is_some());
/// ```
#[must_use = "the timer reports when dropped; binding it to `_` drops it immediately"]
pub struct ScopedTimer<F: FnOnce(Duration)> {
    start: Instant,
    report: Option<F>,
}

impl<F: FnOnce(Duration)> ScopedTimer<F> {
    pub fn new(report: F) -> Self {
        Self {
            start: Instant::now(),
            report: Some(report),
        }
    }

    /// Time elapsed since the guard was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Runs `work` inside a timer scope and returns its result.
    pub fn time<T>(report: F, work: impl FnOnce() -> T) -> T {
        let _timer = Self::new(report);
        work()
    }
}

impl<F: FnOnce(Duration)> Drop for ScopedTimer<F> {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        if let Some(report) = self.report.take() {
            trace!("Timer scope closed after {:?}", elapsed);
            report(elapsed);
        }
    }
}
