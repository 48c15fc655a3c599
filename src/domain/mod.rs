// Domain layer - Emissions data and the figures derived from it
pub mod catalog;
pub mod choropleth;
pub mod cloud;
pub mod dashboard;
pub mod emission;
pub mod equivalence;
pub mod experiment;
pub mod reference;
