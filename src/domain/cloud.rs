// Cloud region comparison domain models
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudRegionRow {
    pub provider: String,
    pub region: String,
    pub country_name: String,
    /// kg CO2-equivalent had the experiment run in this region
    pub emissions: f64,
}

/// The experiment's cloud region against every other region of the same provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudComparison {
    pub provider_name: String,
    pub current: CloudRegionRow,
    /// Ascending by emissions
    pub alternatives: Vec<CloudRegionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CloudRecommendation {
    AlreadyLowest {
        provider_name: String,
        region: String,
    },
    Switch {
        region: String,
        emissions: f64,
        reduction: f64,
    },
}

impl CloudComparison {
    /// Current region first, then the alternatives.
    pub fn rows(&self) -> impl Iterator<Item = &CloudRegionRow> {
        std::iter::once(&self.current).chain(self.alternatives.iter())
    }

    pub fn recommendation(&self) -> CloudRecommendation {
        let minimum = self
            .alternatives
            .iter()
            .min_by(|a, b| a.emissions.total_cmp(&b.emissions));

        match minimum {
            Some(best) if best.emissions < self.current.emissions => CloudRecommendation::Switch {
                region: best.region.clone(),
                emissions: best.emissions,
                reduction: self.current.emissions - best.emissions,
            },
            _ => CloudRecommendation::AlreadyLowest {
                provider_name: self.provider_name.clone(),
                region: self.current.region.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(region: &str, emissions: f64) -> CloudRegionRow {
        CloudRegionRow {
            provider: "gcp".to_string(),
            region: region.to_string(),
            country_name: "Somewhere".to_string(),
            emissions,
        }
    }

    #[test]
    fn test_recommends_true_minimum() {
        // Alternatives deliberately unsorted
        let comparison = CloudComparison {
            provider_name: "Google Cloud Platform".to_string(),
            current: row("asia-east1", 5.0),
            alternatives: vec![row("us-central1", 4.0), row("europe-north1", 1.0)],
        };

        match comparison.recommendation() {
            CloudRecommendation::Switch { region, emissions, reduction } => {
                assert_eq!(region, "europe-north1");
                assert_eq!(emissions, 1.0);
                assert_eq!(reduction, 4.0);
            }
            other => panic!("unexpected recommendation: {:?}", other),
        }
    }

    #[test]
    fn test_already_lowest() {
        let comparison = CloudComparison {
            provider_name: "Google Cloud Platform".to_string(),
            current: row("europe-north1", 1.0),
            alternatives: vec![row("us-central1", 4.0)],
        };
        assert_eq!(
            comparison.recommendation(),
            CloudRecommendation::AlreadyLowest {
                provider_name: "Google Cloud Platform".to_string(),
                region: "europe-north1".to_string(),
            }
        );

        let alone = CloudComparison { alternatives: vec![], ..comparison };
        assert!(matches!(alone.recommendation(), CloudRecommendation::AlreadyLowest { .. }));
        assert_eq!(alone.rows().count(), 1);
    }
}
