//! Fail-fast guard for persistently failing operations.
//!
//! Closed counts failures until a threshold opens the circuit; an open
//! circuit rejects calls until a cool-down elapses, then admits a single
//! trial (half-open). The open → half-open transition happens as a side
//! effect of `can_execute`, not a separate timer.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Breaker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

#[derive(Debug)]
struct BreakerInner {
    state: CircuitState,
    failure_count: u32,
    last_failure: Option<Instant>,
}

/// Circuit breaker for one operation name.
///
/// State transitions are strictly ordered under concurrent success and
/// failure notifications — all of them run under one lock.
#[derive(Debug)]
pub struct CircuitBreaker {
    threshold: u32,
    cooldown: Duration,
    inner: Mutex<BreakerInner>,
}

impl CircuitBreaker {
    pub fn new(threshold: u32, cooldown: Duration) -> Self {
        Self {
            threshold,
            cooldown,
            inner: Mutex::new(BreakerInner {
                state: CircuitState::Closed,
                failure_count: 0,
                last_failure: None,
            }),
        }
    }

    /// Breaker state is a plain counter; a poisoned lock cannot leave it
    /// torn, so recover the guard instead of propagating the panic.
    fn lock(&self) -> MutexGuard<'_, BreakerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a call may proceed. An open breaker whose cool-down has
    /// elapsed transitions to half-open and admits the call.
    pub fn can_execute(&self) -> bool {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed | CircuitState::HalfOpen => true,
            CircuitState::Open => {
                let cooled = inner
                    .last_failure
                    .is_some_and(|t| t.elapsed() >= self.cooldown);
                if cooled {
                    inner.state = CircuitState::HalfOpen;
                    tracing::debug!(event = "breaker_half_open", "circuit breaker half-open");
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Record a successful call. Half-open closes; the counter resets.
    pub fn on_success(&self) {
        let mut inner = self.lock();
        inner.state = CircuitState::Closed;
        inner.failure_count = 0;
    }

    /// Record a failed call. Closed opens at the threshold; half-open
    /// reopens immediately with no grace.
    pub fn on_failure(&self) {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed => {
                inner.failure_count += 1;
                if inner.failure_count >= self.threshold {
                    inner.state = CircuitState::Open;
                    inner.last_failure = Some(Instant::now());
                    tracing::warn!(
                        event = "breaker_open",
                        failures = inner.failure_count,
                        "circuit breaker opened"
                    );
                }
            }
            CircuitState::HalfOpen => {
                inner.state = CircuitState::Open;
                inner.last_failure = Some(Instant::now());
                tracing::warn!(event = "breaker_reopen", "circuit breaker reopened");
            }
            CircuitState::Open => {
                inner.last_failure = Some(Instant::now());
            }
        }
    }

    /// Current state without side effects.
    pub fn state(&self) -> CircuitState {
        self.lock().state
    }

    /// Current consecutive-failure count.
    pub fn failure_count(&self) -> u32 {
        self.lock().failure_count
    }
}
