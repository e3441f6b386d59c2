//! HTML fragment serialization of a `ClusterView`.
//!
//! Class names follow the dashboard stylesheet: one `node-line` per node with a
//! `gpu-list` of `gpu-line` rows made of `colum` cells.

use crate::dashboard::application::render::view::{ClusterView, GpuLine, NodeView, UsersCell};
use std::fmt::Write;

/// Serializes the whole view into the content of the status container.
pub fn to_html(view: &ClusterView) -> String {
    let mut out = String::new();
    for node in &view.nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &NodeView) {
    out.push_str("<div class=\"node-line\"><div class=\"node-info\">");
    let _ = write!(
        out,
        "<span class=\"node-name\">{}</span><span class=\"node-status\" data-status=\"{}\"></span><span class=\"node-version\">{}</span><span class=\"node-ip\">{}</span>",
        escape(&node.hostname),
        escape(&node.status),
        escape(&node.version),
        node.ip.as_deref().map(escape).unwrap_or_default(),
    );
    out.push_str("</div><div class=\"gpu-list\">");
    for gpu in &node.gpus {
        write_gpu(out, gpu);
    }
    out.push_str("</div></div>");
}

fn write_gpu(out: &mut String, gpu: &GpuLine) {
    let users = match &gpu.users {
        UsersCell::Blank => "&nbsp;".to_string(),
        UsersCell::Names(names) => format!("<div>{}</div>", escape(names)),
    };
    let _ = write!(
        out,
        "<div><div class=\"gpu-line\"><div class=\"colum gpu-idx\">{}</div><div class=\"colum memory\" style=\"background: {}\">{}</div><div class=\"colum utilize\">{}</div><div class=\"colum users\">{}</div></div></div>",
        escape(&gpu.index),
        escape(&gpu.memory.background()),
        escape(&gpu.memory.text),
        escape(&gpu.utilize),
        users,
    );
}

/// Escapes text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}
