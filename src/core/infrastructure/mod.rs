pub mod status_client;
