// Loading of the embedded reference tables
use crate::domain::reference::{
    CloudRegionImpact, CountryEnergyMix, ProvinceEnergyMix, ReferenceData, StateEmissionFactor,
};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

const GLOBAL_ENERGY_MIX: &str = include_str!("../../data/global_energy_mix.json");
const USA_EMISSIONS: &str = include_str!("../../data/usa_emissions.json");
const CANADA_ENERGY_MIX: &str = include_str!("../../data/canada_energy_mix.json");
const CLOUD_IMPACT: &str = include_str!("../../data/cloud_impact.json");
const CANADA_PROVINCES_GEOJSON: &str = include_str!("../../data/canada_provinces.geojson");

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    cartodb_id: u32,
    name: String,
}

/// Reference tables compiled into the binary.
pub fn embedded() -> Result<ReferenceData> {
    build(CANADA_PROVINCES_GEOJSON)
}

/// Embedded tables, with the Canada GeoJSON read from `path` instead.
pub fn with_canada_geojson(path: &Path) -> Result<ReferenceData> {
    let geojson = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read GeoJSON: {}", path.display()))?;
    build(&geojson)
}

fn build(canada_geojson: &str) -> Result<ReferenceData> {
    let countries: Vec<CountryEnergyMix> = parse("global energy mix", GLOBAL_ENERGY_MIX)?;
    let usa_states: Vec<StateEmissionFactor> = parse("USA emissions", USA_EMISSIONS)?;
    let canada_provinces: Vec<ProvinceEnergyMix> = parse("Canada energy mix", CANADA_ENERGY_MIX)?;
    let cloud_regions: Vec<CloudRegionImpact> = parse("cloud impact", CLOUD_IMPACT)?;

    let canada_geojson: Value = parse("Canada provinces GeoJSON", canada_geojson)?;
    let features = FeatureCollection::deserialize(&canada_geojson)
        .context("Invalid Canada provinces GeoJSON reference table")?;
    let canada_feature_ids: HashMap<String, u32> = features
        .features
        .into_iter()
        .map(|f| (f.properties.name.to_lowercase(), f.properties.cartodb_id))
        .collect();

    tracing::debug!(
        "Reference data: {} countries, {} states, {} provinces, {} cloud regions",
        countries.len(),
        usa_states.len(),
        canada_provinces.len(),
        cloud_regions.len()
    );

    Ok(ReferenceData {
        countries,
        usa_states,
        canada_provinces,
        cloud_regions,
        canada_feature_ids,
        canada_geojson,
    })
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("Invalid {} reference table", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_parse() {
        let reference = embedded().unwrap();
        assert!(!reference.countries.is_empty());
        assert_eq!(reference.usa_states.len(), 51);
        assert_eq!(reference.canada_provinces.len(), 13);
        assert_eq!(reference.canada_feature_ids.get("quebec"), Some(&9));
        assert!(reference.canada_geojson["features"].is_array());
    }

    #[test]
    fn test_energy_mix_shares_sum_to_a_hundred() {
        let reference = embedded().unwrap();
        for country in &reference.countries {
            let m = country.mix;
            let total = m.coal + m.petroleum + m.natural_gas + m.low_carbon;
            assert!((total - 100.0).abs() < 0.5, "{}: {}", country.iso_code, total);
        }
    }

    #[test]
    fn test_iso_codes_are_unique() {
        let reference = embedded().unwrap();
        let mut codes: Vec<&str> = reference.countries.iter().map(|c| c.iso_code.as_str()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), reference.countries.len());
    }

    #[test]
    fn test_embedded_provinces_have_polygons() {
        let reference = embedded().unwrap();
        let features = reference.canada_geojson["features"].as_array().unwrap();
        assert_eq!(features.len(), reference.canada_provinces.len());

        for feature in features {
            let name = &feature["properties"]["name"];
            let geometry = &feature["geometry"];
            assert!(
                matches!(geometry["type"].as_str(), Some("Polygon" | "MultiPolygon")),
                "{} has no polygon",
                name
            );
            let rings = geometry["coordinates"].as_array().unwrap();
            assert!(!rings.is_empty(), "{} has no coordinates", name);
        }
    }

    #[test]
    fn test_every_province_has_a_feature_id() {
        let reference = embedded().unwrap();
        for province in &reference.canada_provinces {
            assert!(
                reference.canada_feature_ids.contains_key(&province.region_code),
                "{}",
                province.region_code
            );
        }
    }

    #[test]
    fn test_invalid_geojson_is_rejected() {
        assert!(build("{\"features\": [{}]}").is_err());
    }
}
