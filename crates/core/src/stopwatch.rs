//! Wall-clock timing on a monotonic clock

use std::time::Instant;

/// Measures elapsed time from [`Stopwatch::start`]
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed so far
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Stop the stopwatch and return elapsed milliseconds
    pub fn stop(self) -> f64 {
        let elapsed_ms = self.elapsed_ms();
        tracing::trace!(elapsed_ms, "Stopwatch stopped");
        elapsed_ms
    }
}

/// Run `operation` and return its output with the elapsed milliseconds
pub fn measure<T>(operation: impl FnOnce() -> T) -> (T, f64) {
    let stopwatch = Stopwatch::start();
    let output = operation();
    (output, stopwatch.stop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_measure_returns_output() {
        let (value, elapsed) = measure(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_measure_sleep() {
        let ((), elapsed) = measure(|| std::thread::sleep(Duration::from_millis(10)));
        assert!(elapsed >= 10.0);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let stopwatch = Stopwatch::start();
        let first = stopwatch.elapsed_ms();
        let second = stopwatch.elapsed_ms();
        assert!(second >= first);
        assert!(stopwatch.stop() >= second);
    }
}
