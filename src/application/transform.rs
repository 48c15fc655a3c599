// Aggregation of raw emission records into an experiment summary
use crate::domain::emission::EmissionRecord;
use crate::domain::experiment::{EnergyTotals, ExperimentSummary};

/// Summarise every record of one experiment. `None` when there are no records.
pub fn aggregate(experiment_id: &str, records: &[EmissionRecord]) -> Option<ExperimentSummary> {
    let last = records.iter().max_by(|a, b| a.chronological_cmp(b))?;

    let total = EnergyTotals {
        energy_consumed: order_independent_sum(records.iter().map(|r| r.energy_consumed)),
        emissions: order_independent_sum(records.iter().map(|r| r.emissions)),
    };

    Some(ExperimentSummary {
        experiment_id: experiment_id.to_string(),
        total,
        last_run: EnergyTotals {
            energy_consumed: last.energy_consumed,
            emissions: last.emissions,
        },
        country_name: text(&last.country_name),
        country_iso_code: text(&last.country_iso_code),
        region: text(&last.region),
        on_cloud: last.on_cloud.as_deref().map(str::trim) == Some("Y"),
        cloud_provider: text(&last.cloud_provider),
        cloud_region: text(&last.cloud_region),
    })
}

/// Records sorted oldest first, for the time series and bar charts.
pub fn chronological(mut records: Vec<EmissionRecord>) -> Vec<EmissionRecord> {
    records.sort_by(|a, b| a.chronological_cmp(b));
    records
}

// Sorting before summing keeps float rounding identical for any input order.
fn order_independent_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}
