//! Timing configuration of the poller.

use crate::core::domain::error::ValidationError;
use std::time::Duration;

/// Default interval between scheduled polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Default client-side timeout for a single status request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(2000);

/// Configuration for the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Interval between scheduled fetches.
    pub poll_interval: Duration,
    /// Fetches that take longer than this are dropped.
    pub request_timeout: Duration,
}

impl DashboardConfig {
    /// Checks that both durations are non-zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.poll_interval.is_zero() {
            return Err(ValidationError::Field {
                field: "poll_interval".to_string(),
                message: "Poll interval cannot be zero".to_string(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ValidationError::Field {
                field: "request_timeout".to_string(),
                message: "Request timeout cannot be zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
