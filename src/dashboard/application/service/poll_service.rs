//! Periodic and on-demand refresh of the dashboard.

use crate::{
    core::{
        domain::{
            error::{DashboardError, DashboardResult},
            model::{cluster_status::ClusterStatus, dashboard_config::DashboardConfig},
        },
        infrastructure::status_client::StatusSource,
    },
    dashboard::application::{render::render, target::RenderTarget},
};
use std::sync::{Arc, Weak};
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

/// Polls a status source and mounts every successful snapshot on a render target.
///
/// Every fetch runs in its own task and fetches may overlap. Results are
/// applied in completion order: a slow older response that completes after a
/// newer one overwrites it. At most one timer is active at a time.
///
/// The handle is cheap to clone; clones share the same state.
///
/// # Examples
///
/// ```no_run
/// use gpu_cluster_dashboard::{
///     Dashboard, DashboardConfig, DashboardResult, HttpStatusSource, ViewTarget,
/// };
///
/// #[tokio::main]
/// async fn main() -> DashboardResult<()> {
///     let source = HttpStatusSource::builder()
///         .base_url("http://monitor.local:7070")?
///         .build()?;
///     let dashboard = Dashboard::new(source, ViewTarget::new(), DashboardConfig::default())?;
///
///     dashboard.refresh_now();
///     dashboard.start().await;
///     Ok(())
/// }
/// ```
pub struct Dashboard<S, T> {
    inner: Arc<Inner<S, T>>,
}

struct Inner<S, T> {
    source: S,
    target: T,
    config: DashboardConfig,
    // Guards the target too, so a snapshot and its view are swapped together.
    snapshot: RwLock<Option<ClusterStatus>>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl<S, T> Clone for Dashboard<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, T> Drop for Inner<S, T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.get_mut().take() {
            timer.abort();
        }
    }
}

impl<S, T> Dashboard<S, T>
where
    S: StatusSource + 'static,
    T: RenderTarget + 'static,
{
    /// Creates a stopped dashboard with no snapshot.
    ///
    /// # Errors
    /// Returns `DashboardError::Validation` if `config` has a zero interval or timeout.
    pub fn new(source: S, target: T, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(Inner {
                source,
                target,
                config,
                snapshot: RwLock::new(None),
                timer: Mutex::new(None),
            }),
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    pub fn target(&self) -> &T {
        &self.inner.target
    }

    /// Starts firing a refresh every poll interval, the first one a full interval from now.
    ///
    /// Returns `false` without doing anything if a timer is already running.
    /// Must be called from within a Tokio runtime.
    pub async fn start(&self) -> bool {
        let mut timer = self.inner.timer.lock().await;
        if timer.as_ref().is_some_and(|handle| !handle.is_finished()) {
            tracing::debug!("poll timer already running");
            return false;
        }

        let period = self.inner.config.poll_interval;
        let weak = Arc::downgrade(&self.inner);
        *timer = Some(tokio::spawn(tick_loop(weak, period)));
        tracing::info!(interval_ms = period.as_millis() as u64, "poll timer started");
        true
    }

    /// Cancels the running timer. Fetches already in flight still apply their result.
    ///
    /// Returns `false` if no timer was running.
    pub async fn stop(&self) -> bool {
        match self.inner.timer.lock().await.take() {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.abort();
                tracing::info!("poll timer stopped");
                was_running
            }
            None => false,
        }
    }

    pub async fn is_running(&self) -> bool {
        self.inner
            .timer
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Triggers one fetch in the background, independent of the timer.
    ///
    /// Failures are logged and dropped; the returned handle only reports completion.
    pub fn refresh_now(&self) -> JoinHandle<()> {
        let dashboard = self.clone();
        tokio::spawn(async move {
            let _ = dashboard.refresh().await;
        })
    }

    /// Fetches one snapshot and, on success, renders and mounts it.
    ///
    /// # Errors
    /// Returns the fetch error, or `DashboardError::Timeout` if the source did not
    /// answer within the request timeout. The mounted state is left untouched.
    pub async fn refresh(&self) -> DashboardResult<()> {
        let timeout = self.inner.config.request_timeout;
        let snapshot = match tokio::time::timeout(timeout, self.inner.source.fetch()).await {
            Ok(Ok(snapshot)) => snapshot,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "dropping cluster status poll");
                return Err(e);
            }
            Err(_) => {
                let e = DashboardError::Timeout(timeout);
                tracing::warn!(error = %e, "dropping cluster status poll");
                return Err(e);
            }
        };

        self.apply(snapshot).await;
        Ok(())
    }

    /// The last snapshot that was mounted, if any.
    pub async fn last_snapshot(&self) -> Option<ClusterStatus> {
        self.inner.snapshot.read().await.clone()
    }

    async fn apply(&self, snapshot: ClusterStatus) {
        let view = render(&snapshot);
        let mut last = self.inner.snapshot.write().await;
        self.inner.target.replace(&view).await;
        *last = Some(snapshot);
        tracing::debug!(nodes = view.nodes.len(), "cluster status rendered");
    }
}

async fn tick_loop<S, T>(inner: Weak<Inner<S, T>>, period: std::time::Duration)
where
    S: StatusSource + 'static,
    T: RenderTarget + 'static,
{
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let Some(inner) = inner.upgrade() else {
            break;
        };
        Dashboard { inner }.refresh_now();
    }
}
