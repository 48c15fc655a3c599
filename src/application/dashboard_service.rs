// Dashboard service - Use case for building an experiment dashboard
use crate::application::choropleth::{cloud_comparison, global_rows, regional_rows};
use crate::application::emissions_source::EmissionsSource;
use crate::application::transform::{aggregate, chronological};
use crate::domain::choropleth::ChoroplethRow;
use crate::domain::dashboard::Dashboard;
use crate::domain::equivalence::equivalences;
use crate::domain::experiment::ExperimentOption;
use crate::domain::reference::ReferenceData;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("no experiment selected")]
    NoSelection,
    #[error("Invalid experiment id: {0}")]
    NoRuns(String),
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn EmissionsSource>,
    reference: Arc<ReferenceData>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn EmissionsSource>, reference: Arc<ReferenceData>) -> Self {
        Self { source, reference }
    }

    pub async fn list_experiments(&self) -> anyhow::Result<Vec<ExperimentOption>> {
        self.source.list_experiments().await
    }

    /// Fetch, aggregate and shape everything shown for one experiment.
    pub async fn get_dashboard(&self, experiment_id: &str) -> Result<Dashboard, DashboardError> {
        let experiment_id = experiment_id.trim();
        if experiment_id.is_empty() {
            return Err(DashboardError::NoSelection);
        }

        let records = self.source.experiment_records(experiment_id).await?;
        tracing::debug!("Loaded {} records for experiment {}", records.len(), experiment_id);

        let summary = aggregate(experiment_id, &records)
            .ok_or_else(|| DashboardError::NoRuns(experiment_id.to_string()))?;

        let net_energy = summary.total.energy_consumed;
        let equivalences = equivalences(summary.total.emissions);
        let global = global_rows(net_energy, &self.reference);
        let regional = regional_rows(net_energy, &summary.country_iso_code, &self.reference);
        let cloud = cloud_comparison(
            net_energy,
            summary.on_cloud,
            &summary.cloud_provider,
            &summary.cloud_region,
            &self.reference,
        );

        if regional.is_none() {
            tracing::debug!(
                "No regional view for country code {:?}",
                summary.country_iso_code
            );
        }

        Ok(Dashboard {
            summary,
            equivalences,
            records: chronological(records),
            global,
            regional,
            cloud,
        })
    }

    /// Global layers only, for when the energy type changes but the experiment does not.
    pub fn global_rows(&self, net_energy: f64) -> Vec<ChoroplethRow> {
        global_rows(net_energy, &self.reference)
    }
}
