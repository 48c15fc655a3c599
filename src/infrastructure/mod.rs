// Infrastructure layer - External dependencies and adapters
pub mod api_client;
pub mod api_source;
pub mod config;
pub mod csv_source;
pub mod http_response;
pub mod reference_data;
