//! Render targets: where a rendered view gets mounted.
//!
//! A target always replaces its content wholesale; there is no diffing.

use crate::dashboard::application::render::{ClusterView, to_html};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Receives every successfully rendered view.
#[async_trait]
pub trait RenderTarget: Send + Sync {
    /// Replaces whatever is currently shown with `view`.
    async fn replace(&self, view: &ClusterView);
}

#[async_trait]
impl<T: RenderTarget + ?Sized> RenderTarget for Arc<T> {
    async fn replace(&self, view: &ClusterView) {
        (**self).replace(view).await
    }
}

/// Keeps the last mounted view in memory.
#[derive(Debug, Default)]
pub struct ViewTarget {
    current: RwLock<Option<ClusterView>>,
}

impl ViewTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The view currently mounted, if any render happened yet.
    pub async fn current(&self) -> Option<ClusterView> {
        self.current.read().await.clone()
    }
}

#[async_trait]
impl RenderTarget for ViewTarget {
    async fn replace(&self, view: &ClusterView) {
        *self.current.write().await = Some(view.clone());
    }
}

/// Keeps the last mounted view serialized as the status container's HTML.
#[derive(Debug, Default)]
pub struct HtmlTarget {
    html: RwLock<String>,
}

impl HtmlTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn html(&self) -> String {
        self.html.read().await.clone()
    }
}

#[async_trait]
impl RenderTarget for HtmlTarget {
    async fn replace(&self, view: &ClusterView) {
        *self.html.write().await = to_html(view);
    }
}
