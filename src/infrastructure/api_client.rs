// HTTP client for the emissions API
use crate::domain::catalog::{EmissionsPage, Experiment, Project, Run, Team};
use crate::infrastructure::config::ApiSettings;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Extra query parameters passed through untouched
pub type QueryParams<'a> = &'a [(&'a str, &'a str)];

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    host: String,
    user: String,
    password: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            host: settings.host.trim_end_matches('/').to_string(),
            user: settings.user.clone(),
            password: settings.password.clone(),
            http,
        })
    }

    /// `{host}/{resource}` with each path parameter percent-encoded
    fn resource_url(&self, resource: &[&str]) -> String {
        let path: Vec<String> = resource
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}/{}", self.host, path.join("/"))
    }

    /// Authenticated GET returning the parsed JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        resource: &[&str],
        params: QueryParams<'_>,
    ) -> Result<T, ApiError> {
        let url = self.resource_url(resource);
        tracing::debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .header("Accept", "application/json")
            .query(params)
            .send()
            .await
            .map_err(|source| ApiError::Request { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { url, status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Request { url: url.clone(), source })?;

        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { url, source })
    }

    pub async fn runs(&self, params: QueryParams<'_>) -> Result<Vec<Run>, ApiError> {
        self.get(&["runs"], params).await
    }

    pub async fn project_experiments(
        &self,
        project_id: &str,
        params: QueryParams<'_>,
    ) -> Result<Vec<Experiment>, ApiError> {
        self.get(&["experiments", "project", project_id], params).await
    }

    pub async fn experiment(
        &self,
        experiment_id: &str,
        params: QueryParams<'_>,
    ) -> Result<Experiment, ApiError> {
        self.get(&["experiment", experiment_id], params).await
    }

    pub async fn experiment_runs(
        &self,
        experiment_id: &str,
        params: QueryParams<'_>,
    ) -> Result<Vec<Run>, ApiError> {
        self.get(&["runs", "experiment", experiment_id], params).await
    }

    pub async fn run_emissions(
        &self,
        run_id: &str,
        params: QueryParams<'_>,
    ) -> Result<EmissionsPage, ApiError> {
        self.get(&["emissions", "run", run_id], params).await
    }

    pub async fn organization_teams(
        &self,
        organization_id: &str,
        params: QueryParams<'_>,
    ) -> Result<Vec<Team>, ApiError> {
        self.get(&["teams", "organization", organization_id], params).await
    }

    pub async fn team_projects(
        &self,
        team_id: &str,
        params: QueryParams<'_>,
    ) -> Result<Vec<Project>, ApiError> {
        self.get(&["projects", "team", team_id], params).await
    }
}
