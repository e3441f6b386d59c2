//! Plain-text serialization of a `ClusterView` for terminals.

use crate::dashboard::application::render::view::{ClusterView, NBSP};

/// Renders one block per node followed by an aligned table of its GPUs.
pub fn to_text(view: &ClusterView) -> String {
    let mut out = String::from("\n=== GPU Cluster Status ===\n");

    if view.nodes.is_empty() {
        out.push_str("\n  (No nodes reported)\n");
        return out;
    }

    for node in &view.nodes {
        out.push_str(&format!(
            "\n[{}] status={} version={}\n",
            node.hostname, node.status, node.version
        ));
        if let Some(ip) = &node.ip {
            let ip = ip.replace(NBSP, " ");
            out.push_str(&format!("  ip: {}\n", ip.trim_end()));
        }
        if node.gpus.is_empty() {
            out.push_str("  (No GPUs)\n");
            continue;
        }
        out.push_str(&format!(
            "  {:<5} {:<15} {:>8} {:>8}  {}\n",
            "GPU", "Memory", "Mem %", "Util", "Users"
        ));
        for gpu in &node.gpus {
            out.push_str(&format!(
                "  {:<5} {:<15} {:>7.1}% {:>8}  {}\n",
                gpu.index,
                gpu.memory.text,
                gpu.memory.fill_percent,
                gpu.utilize,
                gpu.users.text().replace(NBSP, "-"),
            ));
        }
    }
    out
}
