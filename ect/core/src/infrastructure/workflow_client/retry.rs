// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Retry policy for unary workflow calls.
//!
//! Only transport-level transient codes are retried. The delay before retry
//! `n` (0-based) is `min(base_delay * 2^n, max_delay)` and a call is invoked
//! at most `max_retry_attempts + 1` times.

use std::time::Duration;
use tonic::{Code, Status};

use crate::domain::config::RetryConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first invocation
    pub max_retry_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retry_attempts: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retry_attempts: config.max_retry_attempts,
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retry_attempts: 0,
            ..Self::default()
        }
    }

    pub fn is_transient(code: Code) -> bool {
        matches!(
            code,
            Code::Unavailable | Code::DeadlineExceeded | Code::Internal
        )
    }

    /// Whether to invoke again after `attempts` invocations ended in `status`.
    pub fn should_retry(&self, status: &Status, attempts: u32) -> bool {
        Self::is_transient(status.code()) && attempts <= self.max_retry_attempts
    }

    /// Delay before retry `retry` (0-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }

    pub fn max_invocations(&self) -> u32 {
        self.max_retry_attempts.saturating_add(1)
    }
}
