mod status_url;

pub use status_url::{StatusUrl, StatusUrlConfig};
