use std::pin::Pin;
use std::time::Duration;
use tokio::time::{Sleep, sleep};

/// One-shot cancellable timer bounding a connection's lifetime.
///
/// Armed once when the connection starts. The connection races
/// [`expired`](Deadline::expired) against its pending reads and writes;
/// after a successful write it calls [`cancel`](Deadline::cancel) so a
/// late firing can never touch an already-finished connection.
///
/// Invariants: the deadline fires at most once, and cancelling after it
/// has fired is a no-op.
pub struct Deadline {
    timer: Pin<Box<Sleep>>,
    fired: bool,
    cancelled: bool,
}

impl Deadline {
    pub fn arm(timeout: Duration) -> Self {
        Self {
            timer: Box::pin(sleep(timeout)),
            fired: false,
            cancelled: false,
        }
    }

    /// Resolves when the deadline fires. Never resolves after
    /// cancellation or after it has already fired once.
    pub async fn expired(&mut self) {
        if self.fired || self.cancelled {
            std::future::pending::<()>().await;
        }

        self.timer.as_mut().await;
        self.fired = true;
    }

    /// Disarms the timer. No-op if the deadline already fired.
    pub fn cancel(&mut self) {
        if !self.fired {
            self.cancelled = true;
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
