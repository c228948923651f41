use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Process-wide state shared by every connection.
///
/// Holds the request counter behind an atomic so concurrent `/count`
/// handlers never lose an increment, and exposes the wall-clock read
/// the `/time` route needs. Created once at startup and passed by
/// `Arc` into each connection task.
#[derive(Debug, Default)]
pub struct ServerState {
    request_count: AtomicU64,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically increments the request counter and returns the new value.
    ///
    /// The first call returns 1. Concurrent callers each observe a
    /// distinct value; the counter never goes backwards within a
    /// process lifetime.
    pub fn next_request_count(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current counter value without incrementing. Mostly for tests.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Wall-clock seconds since the Unix epoch.
    pub fn unix_time(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_one() {
        let state = ServerState::new();
        assert_eq!(state.next_request_count(), 1);
        assert_eq!(state.next_request_count(), 2);
        assert_eq!(state.request_count(), 2);
    }
}
