use std::time::Duration;
use thiserror::Error;

/// The main error type for dashboard operations.
///
/// Every variant stays local to a single poll attempt: the poller logs it and
/// keeps showing the last successfully rendered state.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Represents transport failures and non-success HTTP statuses
    ///
    /// # Fields
    /// * `0` - A description of what went wrong while fetching the snapshot
    #[error("Connection error: {0}")]
    Connection(String),

    /// The status endpoint did not answer within the request timeout
    ///
    /// # Fields
    /// * `0` - The timeout that elapsed
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body is not a valid cluster snapshot
    ///
    /// # Fields
    /// * `0` - The decoder's description of the malformed field
    #[error("Decode error: {0}")]
    Decode(String),

    /// Represents configuration validation failures
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },
}

impl From<ValidationError> for DashboardError {
    fn from(error: ValidationError) -> Self {
        DashboardError::Validation { source: error }
    }
}

/// Specialized error type for configuration validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;
