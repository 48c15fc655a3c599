// Dashboard domain model
use super::choropleth::{ChoroplethRow, RegionalRows};
use super::cloud::CloudComparison;
use super::emission::EmissionRecord;
use super::equivalence::EquivalenceFigures;
use super::experiment::ExperimentSummary;

/// Everything derived from one experiment selection.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub summary: ExperimentSummary,
    pub equivalences: EquivalenceFigures,
    /// Chronological
    pub records: Vec<EmissionRecord>,
    pub global: Vec<ChoroplethRow>,
    pub regional: Option<RegionalRows>,
    pub cloud: Option<CloudComparison>,
}
