use std::time::Duration;

/// Configuration for retry behavior and circuit breaking.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (first call included).
    pub max_attempts: u32,
    /// Initial delay between attempts.
    pub base_delay: Duration,
    /// Maximum delay between attempts.
    pub max_delay: Duration,
    /// Multiplier for exponential backoff.
    pub backoff_multiplier: f64,
    /// Uniform jitter applied as ± this fraction of the computed delay.
    /// Zero disables jitter entirely.
    pub jitter_factor: f64,
    /// Wall-clock budget per attempt. `None` disables the check.
    pub timeout_per_attempt: Option<Duration>,
    /// Consecutive failures before a circuit breaker opens.
    pub circuit_breaker_threshold: u32,
    /// Cool-down before an open breaker admits a trial call.
    pub circuit_breaker_timeout: Duration,
    /// Error substrings that mark a failure as retryable.
    pub retryable_errors: Vec<String>,
    /// Error substrings that stop retrying immediately.
    pub non_retryable_errors: Vec<String>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            jitter_factor: 0.1,
            timeout_per_attempt: None,
            circuit_breaker_threshold: 5,
            circuit_breaker_timeout: Duration::from_secs(60),
            retryable_errors: [
                "timeout",
                "connection refused",
                "connection reset",
                "network",
                "temporary",
                "rate limit",
                "service unavailable",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            non_retryable_errors: [
                "invalid input",
                "authentication",
                "authorization",
                "permission denied",
                "not found",
                "bad request",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl RetryConfig {
    /// A configuration that never retries (single attempt, no breaker trip).
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }
}
