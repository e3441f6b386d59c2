pub mod cluster_status;
pub mod dashboard_config;
pub mod gpu_status;
