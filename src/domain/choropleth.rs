// Choropleth map domain models
use serde::{Deserialize, Serialize};

/// kg CO2-equivalent per kWh generated, by fuel.
pub const COAL_KG_PER_KWH: f64 = 0.995;
pub const PETROLEUM_KG_PER_KWH: f64 = 0.816;
pub const NATURAL_GAS_KG_PER_KWH: f64 = 0.743;
pub const LOW_CARBON_KG_PER_KWH: f64 = 0.0;

/// Share of electricity generation per source, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyMix {
    pub coal: f64,
    pub petroleum: f64,
    pub natural_gas: f64,
    pub low_carbon: f64,
}

impl EnergyMix {
    /// kg CO2-equivalent per kWh consumed on a grid with this mix
    pub fn emission_factor(&self) -> f64 {
        (self.coal * COAL_KG_PER_KWH
            + self.petroleum * PETROLEUM_KG_PER_KWH
            + self.natural_gas * NATURAL_GAS_KG_PER_KWH
            + self.low_carbon * LOW_CARBON_KG_PER_KWH)
            / 100.0
    }

    pub fn share(&self, energy_type: EnergyType) -> f64 {
        match energy_type {
            EnergyType::Coal => self.coal,
            EnergyType::Petroleum => self.petroleum,
            EnergyType::NaturalGas => self.natural_gas,
            EnergyType::LowCarbon => self.low_carbon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyType {
    #[default]
    Coal,
    Petroleum,
    NaturalGas,
    LowCarbon,
}

impl EnergyType {
    pub const ALL: [EnergyType; 4] = [
        EnergyType::Coal,
        EnergyType::Petroleum,
        EnergyType::NaturalGas,
        EnergyType::LowCarbon,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EnergyType::Coal => "coal",
            EnergyType::Petroleum => "petroleum",
            EnergyType::NaturalGas => "natural_gas",
            EnergyType::LowCarbon => "low_carbon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnergyType::Coal => "Coal",
            EnergyType::Petroleum => "Petroleum",
            EnergyType::NaturalGas => "Natural Gas",
            EnergyType::LowCarbon => "Low Carbon",
        }
    }

    pub fn axis_label(self) -> String {
        format!("{} Energy (%)", self.label())
    }
}

/// One location on a choropleth layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethRow {
    /// ISO-3 code for countries, region code for subdivisions
    pub code: String,
    pub name: String,
    /// kg CO2-equivalent for the experiment's energy at this location
    pub emissions: f64,
    #[serde(flatten)]
    pub mix: Option<EnergyMix>,
    /// GeoJSON feature id, for layers drawn from a GeoJSON document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<u32>,
}

/// Countries with a regional map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionalCountry {
    Usa,
    Canada,
}

impl RegionalCountry {
    pub fn from_iso_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USA" => Some(RegionalCountry::Usa),
            "CAN" => Some(RegionalCountry::Canada),
            _ => None,
        }
    }

    pub fn iso_code(self) -> &'static str {
        match self {
            RegionalCountry::Usa => "USA",
            RegionalCountry::Canada => "CAN",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionalRows {
    pub country: RegionalCountry,
    pub rows: Vec<ChoroplethRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_factor() {
        let all_coal = EnergyMix { coal: 100.0, ..Default::default() };
        assert!((all_coal.emission_factor() - COAL_KG_PER_KWH).abs() < 1e-12);

        let all_low_carbon = EnergyMix { low_carbon: 100.0, ..Default::default() };
        assert_eq!(all_low_carbon.emission_factor(), 0.0);

        let half = EnergyMix { natural_gas: 50.0, low_carbon: 50.0, ..Default::default() };
        assert!((half.emission_factor() - NATURAL_GAS_KG_PER_KWH / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_regional_country_from_iso_code() {
        assert_eq!(RegionalCountry::from_iso_code("usa"), Some(RegionalCountry::Usa));
        assert_eq!(RegionalCountry::from_iso_code("CAN"), Some(RegionalCountry::Canada));
        assert_eq!(RegionalCountry::from_iso_code("FRA"), None);
        assert_eq!(RegionalCountry::from_iso_code(""), None);
    }

    #[test]
    fn test_energy_type_deserialize() {
        let parsed: EnergyType = serde_json::from_str("\"natural_gas\"").unwrap();
        assert_eq!(parsed, EnergyType::NaturalGas);
        assert_eq!(parsed.axis_label(), "Natural Gas Energy (%)");
    }
}
