//! Tests for sector-resilience: circuit breaker state machine, retry
//! loop semantics, cancellation, and stats accumulation.

use std::time::Duration;

use sector_core::config::RetryConfig;
use sector_resilience::{CancelToken, CircuitBreaker, CircuitState, RetryMechanism};

/// Config with deterministic delays and fast tests.
fn fast_config() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        base_delay: Duration::from_millis(2),
        max_delay: Duration::from_millis(100),
        backoff_multiplier: 2.0,
        jitter_factor: 0.0,
        ..Default::default()
    }
}

// ─── Circuit breaker state machine ───

#[test]
fn breaker_opens_at_threshold() {
    let breaker = CircuitBreaker::new(3, Duration::from_secs(60));
    assert_eq!(breaker.state(), CircuitState::Closed);

    breaker.on_failure();
    breaker.on_failure();
    assert_eq!(breaker.state(), CircuitState::Closed);

    breaker.on_failure();
    assert_eq!(breaker.state(), CircuitState::Open);
    assert!(!breaker.can_execute());
}

#[test]
fn breaker_half_open_success_closes_and_resets() {
    let breaker = CircuitBreaker::new(1, Duration::from_millis(5));
    breaker.on_failure();
    assert_eq!(breaker.state(), CircuitState::Open);

    // Cool-down elapses; the check itself performs the transition.
    std::thread::sleep(Duration::from_millis(10));
    assert!(breaker.can_execute());
    assert_eq!(breaker.state(), CircuitState::HalfOpen);

    breaker.on_success();
    assert_eq!(breaker.state(), CircuitState::Closed);
    assert_eq!(breaker.failure_count(), 0);
}

#[test]
fn breaker_half_open_failure_reopens_immediately() {
    let breaker = CircuitBreaker::new(1, Duration::from_millis(5));
    breaker.on_failure();
    std::thread::sleep(Duration::from_millis(10));
    assert!(breaker.can_execute());
    assert_eq!(breaker.state(), CircuitState::HalfOpen);

    breaker.on_failure();
    assert_eq!(breaker.state(), CircuitState::Open);
    assert!(!breaker.can_execute());
}

// ─── Retry loop ───

#[test]
fn retry_succeeds_on_third_attempt_with_monotonic_backoff() {
    let mechanism = RetryMechanism::new(fast_config());
    let token = CancelToken::new();
    let mut calls = 0;

    let result = mechanism.execute_with_retry(
        &token,
        || {
            calls += 1;
            if calls < 3 {
                Err("connection refused")
            } else {
                Ok(42u32)
            }
        },
        "flaky_op",
    );

    assert!(result.success);
    assert_eq!(result.data, Some(42));
    assert_eq!(result.attempts, 3);
    assert_eq!(result.retry_delays.len(), 2);
    // No jitter: delays follow the pure exponential schedule.
    assert!(result.retry_delays[1] > result.retry_delays[0]);
    assert!(result.last_error.is_none());
    assert!(!result.circuit_breaker_hit);
}

#[test]
fn non_retryable_error_stops_immediately() {
    let mechanism = RetryMechanism::new(fast_config());
    let token = CancelToken::new();
    let mut calls = 0;

    let result = mechanism.execute_with_retry(
        &token,
        || -> Result<(), &str> {
            calls += 1;
            Err("invalid input: missing business name")
        },
        "strict_op",
    );

    assert!(!result.success);
    assert_eq!(result.attempts, 1);
    assert_eq!(calls, 1);
    assert!(result.retry_delays.is_empty());
    assert!(result
        .last_error
        .as_deref()
        .is_some_and(|e| e.contains("invalid input")));
}

#[test]
fn exhausted_retries_report_attempt_count_and_cause() {
    let mechanism = RetryMechanism::new(fast_config());
    let token = CancelToken::new();

    let result = mechanism.execute_with_retry(
        &token,
        || -> Result<(), &str> { Err("temporary failure") },
        "always_down",
    );

    assert!(!result.success);
    assert_eq!(result.attempts, 3);
    let err = result.last_error.expect("error expected");
    assert!(err.contains("failed after 3 attempts"), "got: {err}");
    assert!(err.contains("temporary failure"), "got: {err}");
}

#[test]
fn open_breaker_short_circuits_without_invoking_operation() {
    let config = RetryConfig {
        circuit_breaker_threshold: 2,
        ..fast_config()
    };
    let mechanism = RetryMechanism::new(config);
    let token = CancelToken::new();

    // One exhausted round notifies the breaker twice (attempts 1 and 2).
    let _ = mechanism.execute_with_retry(
        &token,
        || -> Result<(), &str> { Err("network error") },
        "remote_scoring",
    );

    let mut calls = 0;
    let result = mechanism.execute_with_retry(
        &token,
        || -> Result<(), &str> {
            calls += 1;
            Err("network error")
        },
        "remote_scoring",
    );

    assert!(result.circuit_breaker_hit);
    assert_eq!(result.attempts, 0);
    assert_eq!(calls, 0);
    assert_eq!(result.last_error.as_deref(), Some("circuit breaker is open"));
}

#[test]
fn breakers_are_independent_per_operation_name() {
    let config = RetryConfig {
        circuit_breaker_threshold: 2,
        ..fast_config()
    };
    let mechanism = RetryMechanism::new(config);
    let token = CancelToken::new();

    let _ = mechanism.execute_with_retry(
        &token,
        || -> Result<(), &str> { Err("network error") },
        "op_a",
    );
    assert!(!mechanism.breaker("op_a").can_execute());
    assert!(mechanism.breaker("op_b").can_execute());

    let result =
        mechanism.execute_with_retry(&token, || -> Result<u8, &str> { Ok(1) }, "op_b");
    assert!(result.success);
}

// ─── Cancellation ───

#[test]
fn cancelled_token_prevents_any_attempt() {
    let mechanism = RetryMechanism::new(fast_config());
    let token = CancelToken::new();
    token.cancel();

    let mut calls = 0;
    let result = mechanism.execute_with_retry(
        &token,
        || -> Result<(), &str> {
            calls += 1;
            Err("timeout")
        },
        "cancelled_op",
    );

    assert!(!result.success);
    assert_eq!(calls, 0);
    assert_eq!(result.attempts, 0);
    assert_eq!(result.last_error.as_deref(), Some("operation canceled"));
}

#[test]
fn deadline_exceeded_surfaces_as_timeout() {
    let config = RetryConfig {
        base_delay: Duration::from_millis(50),
        jitter_factor: 0.0,
        ..fast_config()
    };
    let mechanism = RetryMechanism::new(config);
    // Deadline shorter than the first backoff sleep.
    let token = CancelToken::with_deadline(Duration::from_millis(10));

    let result = mechanism.execute_with_retry(
        &token,
        || -> Result<(), &str> { Err("timeout") },
        "slow_op",
    );

    assert!(!result.success);
    let err = result.last_error.expect("error expected");
    assert!(err.contains("timed out"), "got: {err}");
}

// ─── Stats ───

#[test]
fn stats_accumulate_until_reset() {
    let mechanism = RetryMechanism::new(fast_config());
    let token = CancelToken::new();

    let mut calls = 0;
    let _ = mechanism.execute_with_retry(
        &token,
        || {
            calls += 1;
            if calls < 2 {
                Err("timeout")
            } else {
                Ok(())
            }
        },
        "op",
    );
    let _ = mechanism.execute_with_retry(
        &token,
        || -> Result<(), &str> { Err("invalid input") },
        "op",
    );

    let stats = mechanism.stats();
    assert_eq!(stats.total_attempts, 3);
    assert_eq!(stats.successful_retries, 1);
    assert_eq!(stats.failed_retries, 1);
    assert!(stats.total_retry_time > Duration::ZERO);

    mechanism.reset_stats();
    let stats = mechanism.stats();
    assert_eq!(stats.total_attempts, 0);
    assert_eq!(stats.total_retry_time, Duration::ZERO);
}
