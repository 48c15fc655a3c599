// Source trait for emissions data access
use crate::domain::emission::EmissionRecord;
use crate::domain::experiment::ExperimentOption;
use async_trait::async_trait;

#[async_trait]
pub trait EmissionsSource: Send + Sync {
    /// Experiments offered in the dropdown
    async fn list_experiments(&self) -> anyhow::Result<Vec<ExperimentOption>>;

    /// Every record of one experiment, in no particular order
    async fn experiment_records(&self, experiment_id: &str) -> anyhow::Result<Vec<EmissionRecord>>;
}
