// Experiment domain models
use serde::Serialize;

/// Entry of the experiment dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentOption {
    pub id: String,
    pub name: String,
}

impl ExperimentOption {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EnergyTotals {
    /// kWh
    pub energy_consumed: f64,
    /// kg CO2-equivalent
    pub emissions: f64,
}

/// Aggregate over every record of one experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentSummary {
    pub experiment_id: String,
    pub total: EnergyTotals,
    pub last_run: EnergyTotals,
    pub country_name: String,
    pub country_iso_code: String,
    pub region: String,
    pub on_cloud: bool,
    pub cloud_provider: String,
    pub cloud_region: String,
}

impl ExperimentSummary {
    pub fn location_label(&self) -> String {
        if self.region.trim().is_empty() {
            self.country_name.clone()
        } else {
            format!("{}, {}", self.region, self.country_name)
        }
    }

    pub fn total_energy_label(&self) -> String {
        format!("{:.1} kWh", self.total.energy_consumed)
    }

    pub fn total_emissions_label(&self) -> String {
        format!("{:.1} kg", self.total.emissions)
    }

    pub fn last_run_energy_label(&self) -> String {
        format!("{} kWh", self.last_run.energy_consumed)
    }

    pub fn last_run_emissions_label(&self) -> String {
        format!("{} kg", self.last_run.emissions)
    }
}
