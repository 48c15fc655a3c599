// Fixed reference tables the dashboard joins against
use super::choropleth::EnergyMix;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct CountryEnergyMix {
    pub iso_code: String,
    pub country_name: String,
    #[serde(flatten)]
    pub mix: EnergyMix,
}

impl CountryEnergyMix {
    pub fn emission_factor(&self) -> f64 {
        self.mix.emission_factor()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateEmissionFactor {
    /// Two-letter postal code
    pub region_code: String,
    pub region_name: String,
    /// kg CO2-equivalent per kWh
    pub emission_factor: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvinceEnergyMix {
    /// Lower-cased province name
    pub region_code: String,
    pub region_name: String,
    #[serde(flatten)]
    pub mix: EnergyMix,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudRegionImpact {
    pub provider: String,
    pub provider_name: String,
    pub region: String,
    pub country_name: String,
    /// g CO2-equivalent per kWh
    pub impact: f64,
}

impl CloudRegionImpact {
    pub fn kg_per_kwh(&self) -> f64 {
        self.impact / 1000.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub countries: Vec<CountryEnergyMix>,
    pub usa_states: Vec<StateEmissionFactor>,
    pub canada_provinces: Vec<ProvinceEnergyMix>,
    pub cloud_regions: Vec<CloudRegionImpact>,
    /// Lower-cased province name to GeoJSON `cartodb_id`
    pub canada_feature_ids: HashMap<String, u32>,
    /// Canada provinces GeoJSON, passed through to the regional map
    pub canada_geojson: serde_json::Value,
}
