//! HTTP access to the cluster status endpoint.

use crate::core::domain::{
    error::{DashboardError, DashboardResult, ValidationError},
    model::{cluster_status::ClusterStatus, dashboard_config::DEFAULT_REQUEST_TIMEOUT},
    value_object::StatusUrl,
};
use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use std::sync::Arc;
use std::time::Duration;

/// Path of the status endpoint relative to the dashboard server.
pub const DEFAULT_STATUS_PATH: &str = "/get-status";

/// Something that can produce a fresh cluster snapshot.
///
/// The poller only talks to this trait, so tests can swap the network for
/// fixture snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches one snapshot.
    ///
    /// # Errors
    /// Returns `DashboardError` if the snapshot cannot be fetched or decoded.
    async fn fetch(&self) -> DashboardResult<ClusterStatus>;
}

#[async_trait]
impl<S: StatusSource + ?Sized> StatusSource for Arc<S> {
    async fn fetch(&self) -> DashboardResult<ClusterStatus> {
        (**self).fetch().await
    }
}

/// Fetches snapshots with `GET <base>/get-status`.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    http_client: Client,
    url: StatusUrl,
    timeout: Duration,
}

/// Builder for HttpStatusSource configuration
#[derive(Debug, Default)]
pub struct HttpStatusSourceBuilder {
    base_url: Option<StatusUrl>,
    status_path: Option<String>,
    timeout: Option<Duration>,
}

impl HttpStatusSourceBuilder {
    /// Sets the base URL of the dashboard server (e.g. `http://monitor:7070`).
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> DashboardResult<Self> {
        self.base_url = Some(StatusUrl::new(base_url)?);
        Ok(self)
    }

    /// Overrides the status path (defaults to `/get-status`).
    pub fn status_path(mut self, path: impl Into<String>) -> Self {
        self.status_path = Some(path.into());
        self
    }

    /// Overrides the client-side request timeout (defaults to 2000 ms).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> DashboardResult<HttpStatusSource> {
        let base_url = self.base_url.ok_or_else(|| ValidationError::Field {
            field: "base_url".to_string(),
            message: "Base URL is required".to_string(),
        })?;
        let path = self.status_path.as_deref().unwrap_or(DEFAULT_STATUS_PATH);
        let url = base_url.with_path(path)?;
        HttpStatusSource::new(url, self.timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
    }
}

impl HttpStatusSource {
    /// Creates a source for the exact status `url`.
    ///
    /// # Errors
    /// Returns `DashboardError::Validation` for a zero timeout and
    /// `DashboardError::Connection` if the HTTP client cannot be built.
    pub fn new(url: StatusUrl, timeout: Duration) -> DashboardResult<Self> {
        if timeout.is_zero() {
            return Err(ValidationError::Field {
                field: "timeout".to_string(),
                message: "Timeout cannot be zero".to_string(),
            }
            .into());
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(default_headers)
            .timeout(timeout)
            .build()
            .map_err(|e| DashboardError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            url,
            timeout,
        })
    }

    pub fn builder() -> HttpStatusSourceBuilder {
        HttpStatusSourceBuilder::default()
    }

    /// The full URL requested on every fetch.
    pub fn url(&self) -> &StatusUrl {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request_error(&self, error: reqwest::Error) -> DashboardError {
        if error.is_timeout() {
            DashboardError::Timeout(self.timeout)
        } else {
            DashboardError::Connection(format!("HTTP request failed: {}", error))
        }
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self) -> DashboardResult<ClusterStatus> {
        tracing::debug!(url = %self.url, "fetching cluster status");

        let response = self
            .http_client
            .get(self.url.as_url().clone())
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(DashboardError::Connection(format!(
                "Status endpoint error ({}): {}",
                status, error_text
            )));
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;

        serde_json::from_slice::<ClusterStatus>(&body)
            .map_err(|e| DashboardError::Decode(format!("Invalid cluster status: {}", e)))
    }
}
