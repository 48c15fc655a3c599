// Emission record domain model
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One emissions measurement, as exported to CSV or returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub experiment_id: Option<String>,
    #[serde(default)]
    pub run_id: Option<String>,
    /// Seconds
    #[serde(default)]
    pub duration: f64,
    /// kWh
    pub energy_consumed: f64,
    /// kg CO2-equivalent
    pub emissions: f64,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_iso_code: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub on_cloud: Option<String>,
    #[serde(default)]
    pub cloud_provider: Option<String>,
    #[serde(default)]
    pub cloud_region: Option<String>,
}

impl EmissionRecord {
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    /// Chronological ordering. Unparsable timestamps sort first, then by raw text.
    /// Records stamped at the same instant are ordered by run id, then by
    /// their measurements, so the latest record never depends on input order.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.parsed_timestamp()
            .cmp(&other.parsed_timestamp())
            .then_with(|| self.timestamp.cmp(&other.timestamp))
            .then_with(|| self.run_id.cmp(&other.run_id))
            .then_with(|| self.energy_consumed.total_cmp(&other.energy_consumed))
            .then_with(|| self.emissions.total_cmp(&other.emissions))
            .then_with(|| self.duration.total_cmp(&other.duration))
    }
}

/// Parse the timestamp layouts produced by the tracker: RFC 3339, or naive
/// ISO-8601 with either `T` or a space between date and time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
pub(crate) fn record(timestamp: &str, energy_consumed: f64, emissions: f64) -> EmissionRecord {
    EmissionRecord {
        timestamp: timestamp.to_string(),
        experiment_id: Some("X".to_string()),
        run_id: None,
        duration: 10.0,
        energy_consumed,
        emissions,
        country_name: Some("Canada".to_string()),
        country_iso_code: Some("CAN".to_string()),
        region: Some("quebec".to_string()),
        on_cloud: Some("N".to_string()),
        cloud_provider: None,
        cloud_region: None,
    }
}
