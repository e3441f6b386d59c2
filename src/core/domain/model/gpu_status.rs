//! Per-GPU entries of a node snapshot.

use serde::{Deserialize, Serialize};

/// Utilization and memory of a single GPU.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GpuStatus {
    /// Device index on the node.
    pub index: i64,
    /// Device model name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Used memory in MiB.
    pub use_mem: f64,
    /// Total memory in MiB. Assumed non-zero.
    pub tot_mem: f64,
    /// Compute utilization percentage.
    pub utilize: f64,
    /// Temperature in degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
    /// Processes currently holding memory on the device.
    pub users: Vec<GpuUser>,
}

impl GpuStatus {
    /// Memory usage as a percentage of total memory.
    ///
    /// Not clamped, and not guarded against `tot_mem == 0` (yields NaN or infinity).
    pub fn memory_percent(&self) -> f64 {
        self.use_mem / self.tot_mem * 100.0
    }
}

/// A process using a GPU.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GpuUser {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    /// Memory held by the process in MiB.
    #[serde(rename = "mem(MiB)", default, skip_serializing_if = "Option::is_none")]
    pub mem_mib: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl GpuUser {
    /// A user entry carrying only a name.
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            pid: None,
            mem_mib: None,
            command: None,
        }
    }
}
