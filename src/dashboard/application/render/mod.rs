pub mod html;
pub mod text;
pub mod view;

pub use html::to_html;
pub use text::to_text;
pub use view::{ClusterView, GpuLine, MemoryCell, NodeView, UsersCell, render};
