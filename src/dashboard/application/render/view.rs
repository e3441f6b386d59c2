//! Pure transformation from a cluster snapshot to a rendered view tree.
//!
//! The view holds exactly the field values the dashboard shows. Mounting it
//! anywhere (HTML, a terminal, a test) is the job of a `RenderTarget`.

use crate::core::domain::model::{
    cluster_status::{ClusterStatus, NodeStatus},
    gpu_status::GpuStatus,
};

/// Non-breaking space used for padding and blank cells.
pub const NBSP: char = '\u{a0}';

/// Padding written after every address in the IP field.
pub const IP_PADDING: &str = "\u{a0}\u{a0}\u{a0}\u{a0}";

/// Fill color of the used part of the memory bar.
pub const MEMORY_FILL_COLOR: &str = "#99CC66";

/// Rendered content of the whole dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterView {
    pub nodes: Vec<NodeView>,
}

/// One node block.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub hostname: String,
    /// Value of the `data-status` attribute.
    pub status: String,
    pub version: String,
    /// `None` when the snapshot carries no `ips` field; the IP cell is left untouched.
    pub ip: Option<String>,
    pub gpus: Vec<GpuLine>,
}

/// One GPU line inside a node block.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuLine {
    pub index: String,
    pub memory: MemoryCell,
    /// Utilization text, e.g. `"37 %"`.
    pub utilize: String,
    pub users: UsersCell,
}

/// Memory cell: `"<use_mem>/<tot_mem>"` over a proportional background fill.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCell {
    pub text: String,
    /// `use_mem / tot_mem * 100`, unclamped.
    pub fill_percent: f64,
}

impl MemoryCell {
    /// CSS background drawing the fill as a two-stop horizontal gradient.
    pub fn background(&self) -> String {
        let percent = format_number(self.fill_percent);
        format!(
            "linear-gradient(to right, {} {}%, white {}%, white)",
            MEMORY_FILL_COLOR, percent, percent
        )
    }
}

/// Users cell of a GPU line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersCell {
    /// No process holds the GPU.
    Blank,
    /// Usernames joined with single spaces, in input order.
    Names(String),
}

impl UsersCell {
    /// Text content of the cell; a blank cell holds a single non-breaking space.
    pub fn text(&self) -> String {
        match self {
            UsersCell::Blank => NBSP.to_string(),
            UsersCell::Names(names) => names.clone(),
        }
    }
}

/// Renders a full snapshot. Node and GPU order follow the input.
pub fn render(status: &ClusterStatus) -> ClusterView {
    ClusterView {
        nodes: status.nodes.iter().map(render_node).collect(),
    }
}

fn render_node(node: &NodeStatus) -> NodeView {
    NodeView {
        hostname: node.hostname.clone(),
        status: node.status.to_string(),
        version: node.version.to_string(),
        ip: node.ips.as_deref().map(format_ips),
        gpus: node.gpus.iter().map(render_gpu).collect(),
    }
}

fn render_gpu(gpu: &GpuStatus) -> GpuLine {
    let users = if gpu.users.is_empty() {
        UsersCell::Blank
    } else {
        let names: Vec<&str> = gpu.users.iter().map(|u| u.username.as_str()).collect();
        UsersCell::Names(names.join(" "))
    };

    GpuLine {
        index: gpu.index.to_string(),
        memory: MemoryCell {
            text: format!(
                "{}/{}",
                format_number(gpu.use_mem),
                format_number(gpu.tot_mem)
            ),
            fill_percent: gpu.memory_percent(),
        },
        utilize: format!("{} %", format_number(gpu.utilize)),
        users,
    }
}

/// `"<address>(<label>)"` plus padding for every pair.
pub fn format_ips(ips: &[(String, String)]) -> String {
    ips.iter()
        .map(|(label, address)| format!("{}({}){}", address, label, IP_PADDING))
        .collect()
}

/// Formats a number the way it is shown on the page: integral values without a
/// fractional part and `NaN`/`Infinity` for non-finite values.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        value.to_string()
    }
}
