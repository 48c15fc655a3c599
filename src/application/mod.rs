// Application layer - Use cases over the emissions sources
pub mod choropleth;
pub mod dashboard_service;
pub mod emissions_source;
pub mod transform;
