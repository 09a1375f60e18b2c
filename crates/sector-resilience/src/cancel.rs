//! Cooperative cancellation token with an optional deadline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation signal for retried operations.
///
/// Cancellation and deadline expiry are distinct outcomes: a caller
/// cancelling mid-sleep surfaces as "operation canceled", while an
/// exceeded deadline surfaces as a timeout.
#[derive(Debug, Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token that never expires on its own.
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// A token that expires `budget` from now.
    pub fn with_deadline(budget: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + budget),
        }
    }

    /// Signal cancellation. All clones observe it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether the token was explicitly cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Whether the deadline (if any) has passed.
    pub fn deadline_exceeded(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a cancellable sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepOutcome {
    Completed,
    Cancelled,
    DeadlineExceeded,
}

/// Sleep slice size — the cancellation latency upper bound.
const SLEEP_SLICE: Duration = Duration::from_millis(10);

/// Sleep for `duration`, waking early on cancellation or deadline expiry.
pub fn sleep_cancellable(duration: Duration, token: &CancelToken) -> SleepOutcome {
    let wake_at = Instant::now() + duration;
    loop {
        if token.is_cancelled() {
            return SleepOutcome::Cancelled;
        }
        if token.deadline_exceeded() {
            return SleepOutcome::DeadlineExceeded;
        }
        let now = Instant::now();
        if now >= wake_at {
            return SleepOutcome::Completed;
        }
        std::thread::sleep(SLEEP_SLICE.min(wake_at - now));
    }
}
