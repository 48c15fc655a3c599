// Shapes reference tables into per-location emissions for the map layers
use crate::domain::choropleth::{ChoroplethRow, RegionalCountry, RegionalRows};
use crate::domain::cloud::{CloudComparison, CloudRegionRow};
use crate::domain::reference::{CloudRegionImpact, ReferenceData};

/// One row per reference country. Mix percentages are copied, not scaled.
pub fn global_rows(net_energy: f64, reference: &ReferenceData) -> Vec<ChoroplethRow> {
    reference
        .countries
        .iter()
        .map(|country| ChoroplethRow {
            code: country.iso_code.clone(),
            name: country.country_name.clone(),
            emissions: net_energy * country.emission_factor(),
            mix: Some(country.mix),
            feature_id: None,
        })
        .collect()
}

/// Subdivisions of one country. `None` for countries without a regional map.
pub fn regional_rows(
    net_energy: f64,
    country_iso_code: &str,
    reference: &ReferenceData,
) -> Option<RegionalRows> {
    let country = RegionalCountry::from_iso_code(country_iso_code)?;

    let rows = match country {
        RegionalCountry::Usa => reference
            .usa_states
            .iter()
            .map(|state| ChoroplethRow {
                code: state.region_code.clone(),
                name: state.region_name.clone(),
                emissions: net_energy * state.emission_factor,
                mix: None,
                feature_id: None,
            })
            .collect(),
        RegionalCountry::Canada => reference
            .canada_provinces
            .iter()
            .filter_map(|province| {
                let Some(feature_id) = reference
                    .canada_feature_ids
                    .get(&province.region_code.to_lowercase())
                    .copied()
                else {
                    tracing::warn!("No GeoJSON feature for province {}", province.region_code);
                    return None;
                };
                Some(ChoroplethRow {
                    code: province.region_code.clone(),
                    name: province.region_name.clone(),
                    emissions: net_energy * province.mix.emission_factor(),
                    mix: Some(province.mix),
                    feature_id: Some(feature_id),
                })
            })
            .collect(),
    };

    Some(RegionalRows { country, rows })
}

/// The experiment's cloud region against the provider's other regions.
/// `None` when not on cloud or the region is not in the reference table.
pub fn cloud_comparison(
    net_energy: f64,
    on_cloud: bool,
    cloud_provider: &str,
    cloud_region: &str,
    reference: &ReferenceData,
) -> Option<CloudComparison> {
    if !on_cloud {
        return None;
    }

    let current = reference
        .cloud_regions
        .iter()
        .find(|r| r.provider == cloud_provider && r.region == cloud_region)?;

    let to_row = |impact: &CloudRegionImpact| CloudRegionRow {
        provider: impact.provider.clone(),
        region: impact.region.clone(),
        country_name: impact.country_name.clone(),
        emissions: net_energy * impact.kg_per_kwh(),
    };

    let mut alternatives: Vec<CloudRegionRow> = reference
        .cloud_regions
        .iter()
        .filter(|r| r.provider == cloud_provider && r.region != cloud_region)
        .map(to_row)
        .collect();
    alternatives.sort_by(|a, b| a.emissions.total_cmp(&b.emissions));

    Some(CloudComparison {
        provider_name: current.provider_name.clone(),
        current: to_row(current),
        alternatives,
    })
}
