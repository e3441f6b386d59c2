pub mod render;
pub mod service;
pub mod target;
