//! Generic retry loop with exponential backoff, jitter, and per-operation
//! circuit breaking.

use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use rand::Rng;

use sector_core::config::RetryConfig;

use crate::cancel::{sleep_cancellable, CancelToken, SleepOutcome};
use crate::circuit_breaker::CircuitBreaker;

/// Outcome of a retried operation.
#[derive(Debug, Clone)]
pub struct RetryResult<T> {
    pub success: bool,
    pub data: Option<T>,
    /// Attempts actually made. Zero when the breaker rejected the call
    /// or the token was already cancelled.
    pub attempts: u32,
    pub last_error: Option<String>,
    /// Delay slept before each retry, in order.
    pub retry_delays: Vec<Duration>,
    pub circuit_breaker_hit: bool,
    pub total_time: Duration,
}

/// Cumulative counters across all calls to one mechanism, until reset.
#[derive(Debug, Clone, Default)]
pub struct RetryStats {
    pub total_attempts: u64,
    pub successful_retries: u64,
    pub failed_retries: u64,
    pub total_retry_time: Duration,
}

/// Retry-with-backoff wrapper for arbitrary fallible operations.
///
/// Circuit breakers are keyed by operation name and created lazily;
/// independent names never affect each other.
pub struct RetryMechanism {
    config: RetryConfig,
    breakers: DashMap<String, Arc<CircuitBreaker>>,
    stats: Mutex<RetryStats>,
}

impl RetryMechanism {
    pub fn new(config: RetryConfig) -> Self {
        Self {
            config,
            breakers: DashMap::new(),
            stats: Mutex::new(RetryStats::default()),
        }
    }

    fn stats_lock(&self) -> MutexGuard<'_, RetryStats> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the cumulative counters.
    pub fn stats(&self) -> RetryStats {
        self.stats_lock().clone()
    }

    /// Reset the cumulative counters to zero.
    pub fn reset_stats(&self) {
        *self.stats_lock() = RetryStats::default();
    }

    /// The breaker for an operation name, creating it on first use.
    pub fn breaker(&self, operation_name: &str) -> Arc<CircuitBreaker> {
        self.breakers
            .entry(operation_name.to_string())
            .or_insert_with(|| {
                Arc::new(CircuitBreaker::new(
                    self.config.circuit_breaker_threshold,
                    self.config.circuit_breaker_timeout,
                ))
            })
            .clone()
    }

    /// Execute `operation` under retry, backoff, and circuit breaking.
    ///
    /// The token is checked before each attempt and during inter-attempt
    /// sleeps; cancellation surfaces as "operation canceled", distinct
    /// from timeouts and exhausted retries.
    pub fn execute_with_retry<T, E: Display>(
        &self,
        token: &CancelToken,
        mut operation: impl FnMut() -> Result<T, E>,
        operation_name: &str,
    ) -> RetryResult<T> {
        let start = Instant::now();
        let breaker = self.breaker(operation_name);

        if !breaker.can_execute() {
            tracing::warn!(
                event = "retry_rejected",
                operation = operation_name,
                "circuit breaker is open"
            );
            return RetryResult {
                success: false,
                data: None,
                attempts: 0,
                last_error: Some("circuit breaker is open".to_string()),
                retry_delays: Vec::new(),
                circuit_breaker_hit: true,
                total_time: start.elapsed(),
            };
        }

        let mut retry_delays: Vec<Duration> = Vec::new();
        let mut last_error: Option<String> = None;
        let mut attempts: u32 = 0;

        for attempt in 1..=self.config.max_attempts {
            if token.is_cancelled() {
                last_error = Some("operation canceled".to_string());
                break;
            }
            if token.deadline_exceeded() {
                last_error = Some(format!("operation timed out after {attempts} attempts"));
                break;
            }

            let attempt_start = Instant::now();
            let outcome = operation();
            attempts = attempt;
            self.stats_lock().total_attempts += 1;

            let overran = self
                .config
                .timeout_per_attempt
                .is_some_and(|budget| attempt_start.elapsed() > budget);
            if overran {
                last_error = Some(format!("operation timed out after {attempts} attempts"));
                break;
            }

            match outcome {
                Ok(value) => {
                    breaker.on_success();
                    let total_time = start.elapsed();
                    let mut stats = self.stats_lock();
                    if attempt > 1 {
                        stats.successful_retries += 1;
                    }
                    stats.total_retry_time += total_time;
                    drop(stats);
                    tracing::debug!(
                        event = "retry_success",
                        operation = operation_name,
                        attempts,
                        "operation succeeded"
                    );
                    return RetryResult {
                        success: true,
                        data: Some(value),
                        attempts,
                        last_error: None,
                        retry_delays,
                        circuit_breaker_hit: false,
                        total_time,
                    };
                }
                Err(e) => {
                    let message = e.to_string();
                    let retryable = self.is_retryable_error(&message);
                    tracing::debug!(
                        event = "retry_attempt_failed",
                        operation = operation_name,
                        attempt,
                        retryable,
                        error = %message,
                        "attempt failed"
                    );
                    last_error = Some(message);

                    if !retryable {
                        break;
                    }
                    if attempt < self.config.max_attempts {
                        breaker.on_failure();
                        let delay = self.calculate_delay(attempt);
                        retry_delays.push(delay);
                        match sleep_cancellable(delay, token) {
                            SleepOutcome::Completed => {}
                            SleepOutcome::Cancelled => {
                                last_error = Some("operation canceled".to_string());
                                break;
                            }
                            SleepOutcome::DeadlineExceeded => {
                                last_error = Some(format!(
                                    "operation timed out after {attempts} attempts"
                                ));
                                break;
                            }
                        }
                    } else {
                        last_error = Some(format!(
                            "operation failed after {attempts} attempts: {}",
                            last_error.as_deref().unwrap_or("unknown error")
                        ));
                    }
                }
            }
        }

        let total_time = start.elapsed();
        let mut stats = self.stats_lock();
        stats.failed_retries += 1;
        stats.total_retry_time += total_time;
        drop(stats);

        RetryResult {
            success: false,
            data: None,
            attempts,
            last_error,
            retry_delays,
            circuit_breaker_hit: false,
            total_time,
        }
    }

    /// Classify an error message as transient or permanent.
    ///
    /// The deny list wins over the allow list; unrecognized text defaults
    /// to retryable — failures are more often transient than permanent
    /// misconfigurations.
    fn is_retryable_error(&self, message: &str) -> bool {
        let lowered = message.to_lowercase();
        if self
            .config
            .non_retryable_errors
            .iter()
            .any(|needle| lowered.contains(needle))
        {
            return false;
        }
        if self
            .config
            .retryable_errors
            .iter()
            .any(|needle| lowered.contains(needle))
        {
            return true;
        }
        true
    }

    /// Exponential backoff capped at the max delay, with uniform jitter.
    fn calculate_delay(&self, attempt: u32) -> Duration {
        let exp = self.config.backoff_multiplier.powi(attempt as i32 - 1);
        let base = self.config.base_delay.as_secs_f64() * exp;
        let capped = base.min(self.config.max_delay.as_secs_f64());

        if self.config.jitter_factor <= 0.0 {
            return Duration::from_secs_f64(capped);
        }
        let spread = capped * self.config.jitter_factor;
        let jittered = capped + rand::thread_rng().gen_range(-spread..=spread);
        Duration::from_secs_f64(jittered.max(0.0))
    }

    /// The active configuration.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

impl Default for RetryMechanism {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}
