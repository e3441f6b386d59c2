use crate::core::domain::error::{DashboardResult, ValidationError};
use std::collections::HashSet;
use std::fmt;

/// Represents the configuration for a status URL value object
///
/// URLs are checked against RFC 3986 syntax (through the `url` crate), a maximum
/// length, and the set of schemes the HTTP client can talk to.
#[derive(Debug, Clone)]
pub struct StatusUrlConfig {
    allowed_schemes: HashSet<String>,
    max_length: usize,
}

impl StatusUrlConfig {
    fn validate_url(&self, value: &str) -> Result<url::Url, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Field {
                field: "url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }

        if value.len() > self.max_length {
            return Err(ValidationError::Format(format!(
                "URL exceeds maximum length of {} characters",
                self.max_length
            )));
        }

        let parsed = url::Url::parse(value)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

        if !self.allowed_schemes.contains(parsed.scheme()) {
            let mut schemes: Vec<&str> = self.allowed_schemes.iter().map(String::as_str).collect();
            schemes.sort_unstable();
            return Err(ValidationError::ConstraintViolation(format!(
                "Invalid scheme. Must be one of: {}",
                schemes.join(", ")
            )));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ValidationError::Field {
                field: "url".to_string(),
                message: "URL must include a host".to_string(),
            });
        }

        Ok(parsed)
    }
}

impl Default for StatusUrlConfig {
    fn default() -> Self {
        let schemes = ["http", "https"].into_iter().map(String::from).collect();

        Self {
            allowed_schemes: schemes,
            max_length: 2083,
        }
    }
}

/// A validated URL of a status endpoint.
///
/// # Examples
///
/// ```
/// use gpu_cluster_dashboard::StatusUrl;
///
/// let base = StatusUrl::new("http://monitor.local:7070").unwrap();
/// let status = base.with_path("/get-status").unwrap();
/// assert_eq!(status.as_str(), "http://monitor.local:7070/get-status");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUrl(url::Url);

impl StatusUrl {
    /// Parses and validates `value`.
    pub fn new(value: impl AsRef<str>) -> DashboardResult<Self> {
        let parsed = StatusUrlConfig::default().validate_url(value.as_ref())?;
        Ok(Self(parsed))
    }

    /// Appends `path` to this URL, keeping exactly one slash between them.
    pub fn with_path(&self, path: &str) -> DashboardResult<Self> {
        let base = self.0.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Self::new(format!("{}/{}", base, path))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub(crate) fn as_url(&self) -> &url::Url {
        &self.0
    }
}

impl fmt::Display for StatusUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
