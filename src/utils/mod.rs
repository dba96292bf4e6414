pub mod api_client;
pub mod csv_exporter;
pub mod logger;
pub mod mailto;
