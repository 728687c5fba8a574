//! Clock used to schedule deferred terminal effects
//!
//! The interactive app and the headless runner use [`RealTimeSource`]. Tests
//! drive a [`TestTimeSource`], whose logical clock lets a `register` delay
//! elapse without sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait TimeSource: Send + Sync + std::fmt::Debug {
    fn now(&self) -> Instant;

    /// Block until `duration` has passed. The test clock advances instead.
    fn sleep(&self, duration: Duration);
}

/// Clock shared between a session and whoever drives it
pub type SharedTimeSource = Arc<dyn TimeSource>;

/// Wall clock: `Instant::now` and `thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Logical clock for tests
///
/// ```
/// use innohacks::services::time_source::{TestTimeSource, TimeSource};
/// use std::time::Duration;
///
/// let time = TestTimeSource::new();
/// let start = time.now();
/// time.sleep(Duration::from_millis(1000));
/// assert_eq!(time.now() - start, Duration::from_millis(1000));
/// ```
#[derive(Debug)]
pub struct TestTimeSource {
    nanos: AtomicU64,
    origin: Instant,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    pub fn new() -> Self {
        Self {
            nanos: AtomicU64::new(0),
            origin: Instant::now(),
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn advance(&self, duration: Duration) {
        self.nanos.fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Logical time advanced since creation
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_clock_moves_forward() {
        let clock = RealTimeSource;
        let before = clock.now();
        clock.sleep(Duration::from_millis(1));
        assert!(clock.now() > before);
    }

    #[test]
    fn test_logical_clock_only_moves_when_told() {
        let clock = TestTimeSource::new();
        let start = clock.now();
        assert_eq!(clock.now(), start);

        clock.advance(Duration::from_millis(400));
        clock.sleep(Duration::from_millis(600));
        assert_eq!(clock.elapsed(), Duration::from_secs(1));
        assert_eq!(clock.now() - start, Duration::from_secs(1));
    }

    #[test]
    fn test_shared_clock_seen_through_trait_object() {
        let clock = TestTimeSource::shared();
        let shared: SharedTimeSource = clock.clone();
        let start = shared.now();
        clock.advance(Duration::from_millis(250));
        assert_eq!(shared.now() - start, Duration::from_millis(250));
    }
}
