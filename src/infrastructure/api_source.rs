// Emissions source backed by the remote API
use crate::application::emissions_source::EmissionsSource;
use crate::domain::emission::EmissionRecord;
use crate::domain::experiment::ExperimentOption;
use crate::infrastructure::api_client::ApiClient;
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct ApiSource {
    client: ApiClient,
    project_id: String,
}

impl ApiSource {
    pub fn new(client: ApiClient, project_id: String) -> Self {
        Self { client, project_id }
    }
}

#[async_trait]
impl EmissionsSource for ApiSource {
    async fn list_experiments(&self) -> Result<Vec<ExperimentOption>> {
        let experiments = self
            .client
            .project_experiments(&self.project_id, &[])
            .await
            .with_context(|| format!("Failed to list experiments of project {}", self.project_id))?;

        Ok(experiments
            .into_iter()
            .map(|e| ExperimentOption::new(e.id, e.name))
            .collect())
    }

    async fn experiment_records(&self, experiment_id: &str) -> Result<Vec<EmissionRecord>> {
        let runs = self
            .client
            .experiment_runs(experiment_id, &[])
            .await
            .with_context(|| format!("Failed to list runs of experiment {}", experiment_id))?;

        tracing::debug!("Experiment {} has {} runs", experiment_id, runs.len());

        // One run at a time; no requests are issued concurrently.
        let mut records = Vec::new();
        for run in runs {
            let page = self
                .client
                .run_emissions(&run.id, &[])
                .await
                .with_context(|| format!("Failed to load emissions of run {}", run.id))?;

            records.extend(page.items.into_iter().map(|mut record| {
                record.experiment_id = Some(experiment_id.to_string());
                if record.run_id.is_none() {
                    record.run_id = Some(run.id.clone());
                }
                record
            }));
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api_client::tests::fake_client;

    #[tokio::test]
    async fn test_list_experiments() {
        let source = ApiSource::new(fake_client().await, "proj".to_string());
        let experiments = source.list_experiments().await.unwrap();
        assert_eq!(
            experiments,
            vec![
                ExperimentOption::new("exp-1".to_string(), "Training".to_string()),
                ExperimentOption::new("exp-2".to_string(), "Inference".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_records_gathered_across_runs() {
        let source = ApiSource::new(fake_client().await, "proj".to_string());
        let records = source.experiment_records("exp-1").await.unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.experiment_id.as_deref() == Some("exp-1")));
        let energy: f64 = records.iter().map(|r| r.energy_consumed).sum();
        assert_eq!(energy, 3.0);
    }

    #[tokio::test]
    async fn test_experiment_without_runs_is_empty() {
        let source = ApiSource::new(fake_client().await, "proj".to_string());
        assert!(source.experiment_records("exp-2").await.unwrap().is_empty());
    }
}
