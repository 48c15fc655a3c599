// Emissions source backed by a CSV export
use crate::application::emissions_source::EmissionsSource;
use crate::domain::emission::EmissionRecord;
use crate::domain::experiment::ExperimentOption;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::Read;
use std::path::Path;

/// Columns renamed on load so older exports match the current layout.
const LEGACY_COLUMNS: &[(&str, &str)] = &[("experiment_name", "experiment_id")];

#[derive(Debug, Clone, Default)]
pub struct CsvSource {
    records: Vec<EmissionRecord>,
}

impl CsvSource {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open emissions CSV: {}", path.display()))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);

        let headers: csv::StringRecord = reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(adapt_column)
            .collect();
        reader.set_headers(headers);

        let mut records = Vec::new();
        for (line, result) in reader.deserialize().enumerate() {
            let record: EmissionRecord =
                result.with_context(|| format!("Failed to parse emissions row {}", line + 1))?;
            records.push(record);
        }

        tracing::info!("Loaded {} emission records from CSV", records.len());
        Ok(Self { records })
    }
}

fn adapt_column(name: &str) -> &str {
    LEGACY_COLUMNS
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map(|(_, current)| *current)
        .unwrap_or(name)
}

#[async_trait]
impl EmissionsSource for CsvSource {
    async fn list_experiments(&self) -> Result<Vec<ExperimentOption>> {
        let mut experiments: Vec<ExperimentOption> = Vec::new();
        for id in self.records.iter().filter_map(|r| r.experiment_id.as_deref()) {
            if !experiments.iter().any(|e| e.id == id) {
                experiments.push(ExperimentOption::new(id.to_string(), id.to_string()));
            }
        }
        Ok(experiments)
    }

    async fn experiment_records(&self, experiment_id: &str) -> Result<Vec<EmissionRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.experiment_id.as_deref() == Some(experiment_id))
            .cloned()
            .collect())
    }
}
