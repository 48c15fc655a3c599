// Resources exposed by the emissions API
use super::emission::EmissionRecord;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experiment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Run {
    pub id: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub experiment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub organization_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub team_id: Option<String>,
}

/// Page of emission records for one run
#[derive(Debug, Clone, Deserialize)]
pub struct EmissionsPage {
    #[serde(default)]
    pub items: Vec<EmissionRecord>,
    #[serde(default)]
    pub total: Option<u64>,
}
