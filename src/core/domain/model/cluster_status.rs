//! Domain models for the cluster snapshot served by `/get-status`.
//!
//! The snapshot is owned by the status endpoint. This crate only reads it: it is
//! fetched fresh on every poll and replaced wholesale.

use crate::core::domain::model::gpu_status::GpuStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A full cluster snapshot.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ClusterStatus {
    /// Nodes in the order the aggregator lists them.
    #[serde(rename = "Nodes")]
    pub nodes: Vec<NodeStatus>,
}

/// Status of a single host in the cluster.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeStatus {
    /// Host name reported by the node.
    pub hostname: String,
    /// Whether the node is considered online.
    pub status: NodeState,
    /// GPU model(s) installed on the node.
    #[serde(default)]
    pub version: GpuVersion,
    /// ISO-8601 time of the node's last report (if it ever reported).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    /// `(interface, address)` pairs for the node's up interfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<(String, String)>>,
    /// GPUs in device order.
    pub gpus: Vec<GpuStatus>,
}

/// Node liveness as sent by the status endpoint.
///
/// The aggregator sends a boolean, but any label is accepted and passed through.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NodeState {
    Online(bool),
    Label(String),
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeState::Online(online) => write!(f, "{}", online),
            NodeState::Label(label) => f.write_str(label),
        }
    }
}

/// GPU model description of a node: a single string or one name per GPU.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum GpuVersion {
    Text(String),
    Names(Vec<String>),
}

impl Default for GpuVersion {
    fn default() -> Self {
        GpuVersion::Text(String::new())
    }
}

impl fmt::Display for GpuVersion {
    /// Lists are written comma-separated without spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuVersion::Text(text) => f.write_str(text),
            GpuVersion::Names(names) => f.write_str(&names.join(",")),
        }
    }
}
