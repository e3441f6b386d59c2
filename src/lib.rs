//! A poller and renderer for GPU cluster status dashboards.
//!
//! The crate fetches a cluster snapshot from a status endpoint
//! (`GET /get-status`) on a fixed interval and on demand, turns it into a view
//! with one block per node and one line per GPU, and mounts that view on a
//! render target, replacing whatever was shown before.
//!
//! - [`HttpStatusSource`] fetches snapshots over HTTP with a client-side timeout.
//! - [`render`] is the pure snapshot-to-view transformation.
//! - [`Dashboard`] drives the polling lifecycle (`start`, `stop`, `refresh_now`).
//! - [`ViewTarget`] and [`HtmlTarget`] are ready-made render targets.
//!
//! # Examples
//!
//! ```no_run
//! use gpu_cluster_dashboard::{
//!     Dashboard, DashboardConfig, DashboardResult, HtmlTarget, HttpStatusSource,
//! };
//!
//! #[tokio::main]
//! async fn main() -> DashboardResult<()> {
//!     let source = HttpStatusSource::builder()
//!         .base_url("http://monitor.local:7070")?
//!         .build()?;
//!     let dashboard = Dashboard::new(source, HtmlTarget::new(), DashboardConfig::default())?;
//!
//!     dashboard.refresh().await?;
//!     println!("{}", dashboard.target().html().await);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod dashboard;

pub use crate::core::{
    domain::{
        error::{DashboardError, DashboardResult, ValidationError},
        model::{
            cluster_status::{ClusterStatus, GpuVersion, NodeState, NodeStatus},
            dashboard_config::{DEFAULT_POLL_INTERVAL, DEFAULT_REQUEST_TIMEOUT, DashboardConfig},
            gpu_status::{GpuStatus, GpuUser},
        },
        value_object::StatusUrl,
    },
    infrastructure::status_client::{
        DEFAULT_STATUS_PATH, HttpStatusSource, HttpStatusSourceBuilder, StatusSource,
    },
};
pub use crate::dashboard::application::{
    render::{ClusterView, GpuLine, MemoryCell, NodeView, UsersCell, render, to_html, to_text},
    service::poll_service::Dashboard,
    target::{HtmlTarget, RenderTarget, ViewTarget},
};

#[cfg(test)]
mod tests;
