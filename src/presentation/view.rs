// JSON view models returned to the dashboard page
use crate::domain::choropleth::{ChoroplethRow, EnergyType};
use crate::domain::cloud::CloudRecommendation;
use crate::domain::dashboard::Dashboard;
use crate::domain::equivalence::EquivalenceFigures;
use crate::domain::experiment::ExperimentSummary;
use crate::presentation::figures::{self, Figure};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SummaryLabels {
    pub net_power_consumption: String,
    pub net_carbon_equivalent: String,
    pub experiment_infrastructure_location: String,
    pub experiment_power_consumption: String,
    pub experiment_carbon_equivalent: String,
    pub last_run_power_consumption: String,
    pub last_run_carbon_equivalent: String,
}

impl SummaryLabels {
    fn new(summary: &ExperimentSummary) -> Self {
        Self {
            net_power_consumption: summary.total_energy_label(),
            net_carbon_equivalent: summary.total_emissions_label(),
            experiment_infrastructure_location: summary.location_label(),
            experiment_power_consumption: summary.total_energy_label(),
            experiment_carbon_equivalent: summary.total_emissions_label(),
            last_run_power_consumption: summary.last_run_energy_label(),
            last_run_carbon_equivalent: summary.last_run_emissions_label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EquivalentLabels {
    pub car_miles: String,
    pub tv_time: String,
    pub household_fraction: String,
}

impl From<&EquivalenceFigures> for EquivalentLabels {
    fn from(figures: &EquivalenceFigures) -> Self {
        Self {
            car_miles: figures.car_miles_label(),
            tv_time: figures.tv_time_label(),
            household_fraction: figures.household_fraction_label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GlobalView {
    pub emissions: Figure,
    pub energy_mix: Figure,
}

impl GlobalView {
    pub fn new(rows: &[ChoroplethRow], energy_type: EnergyType) -> Self {
        Self {
            emissions: figures::global_emissions_choropleth(rows),
            energy_mix: figures::global_energy_mix_choropleth(energy_type, rows),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegionalView {
    pub country_name: String,
    pub figure: Figure,
}

#[derive(Debug, Serialize)]
pub struct CloudView {
    pub provider_name: String,
    pub figure: Figure,
    pub recommendation: CloudRecommendation,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub summary: ExperimentSummary,
    pub labels: SummaryLabels,
    pub equivalences: EquivalenceFigures,
    pub equivalent_labels: EquivalentLabels,
    pub show_regional: bool,
    pub show_cloud: bool,
    pub global: GlobalView,
    pub regional: Option<RegionalView>,
    pub cloud: Option<CloudView>,
    pub time_series: Figure,
    pub bar_chart: Figure,
}

impl DashboardView {
    pub fn new(
        dashboard: &Dashboard,
        energy_type: EnergyType,
        canada_geojson: &serde_json::Value,
    ) -> Self {
        let regional = dashboard.regional.as_ref().map(|regional| RegionalView {
            country_name: dashboard.summary.country_name.clone(),
            figure: figures::regional_emissions_choropleth(regional, canada_geojson),
        });

        let cloud = dashboard.cloud.as_ref().map(|comparison| CloudView {
            provider_name: comparison.provider_name.clone(),
            figure: figures::cloud_emissions_barchart(comparison),
            recommendation: comparison.recommendation(),
        });

        Self {
            summary: dashboard.summary.clone(),
            labels: SummaryLabels::new(&dashboard.summary),
            equivalences: dashboard.equivalences,
            equivalent_labels: EquivalentLabels::from(&dashboard.equivalences),
            show_regional: regional.is_some(),
            show_cloud: cloud.is_some(),
            global: GlobalView::new(&dashboard.global, energy_type),
            regional,
            cloud,
            time_series: figures::experiment_time_series(&dashboard.records),
            bar_chart: figures::experiment_emissions_bar_chart(&dashboard.records),
        }
    }
}
