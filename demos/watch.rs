//! Watch a GPU cluster from the terminal.
//!
//! Reads `DASHBOARD_URL` (default `http://localhost:7070`) from the environment
//! or a `.env` file, refreshes once immediately, then every three seconds, and
//! prints the cluster table after each successful poll. Stops on Ctrl-C.

use async_trait::async_trait;
use gpu_cluster_dashboard::{
    ClusterView, Dashboard, DashboardConfig, DashboardResult, HttpStatusSource, RenderTarget,
    to_text,
};
use std::env;
use tracing_subscriber::EnvFilter;

/// Prints every mounted view to stdout.
struct TerminalTarget;

#[async_trait]
impl RenderTarget for TerminalTarget {
    async fn replace(&self, view: &ClusterView) {
        print!("\x1b[2J\x1b[H{}", to_text(view));
    }
}

#[tokio::main]
async fn main() -> DashboardResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url =
        env::var("DASHBOARD_URL").unwrap_or_else(|_| "http://localhost:7070".to_string());
    let source = HttpStatusSource::builder().base_url(&base_url)?.build()?;
    tracing::info!(url = %source.url(), "watching cluster");

    let dashboard = Dashboard::new(source, TerminalTarget, DashboardConfig::default())?;
    dashboard.refresh_now();
    dashboard.start().await;

    let _ = tokio::signal::ctrl_c().await;
    dashboard.stop().await;
    Ok(())
}
