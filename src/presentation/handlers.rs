// HTTP request handlers
use crate::application::dashboard_service::DashboardError;
use crate::domain::choropleth::EnergyType;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use crate::presentation::view::{DashboardView, GlobalView};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const DASHBOARD_JS: &str = include_str!("../../assets/dashboard.js");

#[derive(Deserialize)]
pub struct EnergyTypeQuery {
    #[serde(default)]
    pub energy_type: EnergyType,
}

#[derive(Deserialize)]
pub struct GlobalQuery {
    pub net_energy: f64,
    #[serde(default)]
    pub energy_type: EnergyType,
}

async fn respond<T: serde::Serialize>(status: StatusCode, data: &T, compress: bool) -> Response {
    match json_response(status, data, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn index() -> Html<String> {
    Html(render_page())
}

pub async fn dashboard_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], DASHBOARD_JS)
}

/// Experiments for the dropdown
pub async fn list_experiments(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);

    match state.dashboard_service.list_experiments().await {
        Ok(experiments) => respond(StatusCode::OK, &experiments, compress).await,
        Err(e) => {
            tracing::error!("Error fetching experiments: {:#}", e);
            let body = json!({"error": format!("{:#}", e)});
            respond(StatusCode::BAD_GATEWAY, &body, compress).await
        }
    }
}

/// Everything shown for one experiment
pub async fn experiment_dashboard(
    Path(id): Path<String>,
    Query(query): Query<EnergyTypeQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);

    match state.dashboard_service.get_dashboard(&id).await {
        Ok(dashboard) => {
            let view = DashboardView::new(&dashboard, query.energy_type, &state.reference.canada_geojson);
            respond(StatusCode::OK, &view, compress).await
        }
        Err(DashboardError::NoSelection) => StatusCode::NO_CONTENT.into_response(),
        Err(e @ DashboardError::NoRuns(_)) => {
            tracing::warn!("{}", e);
            respond(StatusCode::UNPROCESSABLE_ENTITY, &json!({"error": e.to_string()}), compress).await
        }
        Err(DashboardError::Source(e)) => {
            tracing::error!("Error building dashboard for {}: {:#}", id, e);
            let body = json!({"error": format!("{:#}", e)});
            respond(StatusCode::BAD_GATEWAY, &body, compress).await
        }
    }
}

/// Global layers for a new energy type, without refetching the experiment
pub async fn global_comparison(
    Query(query): Query<GlobalQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let rows = state.dashboard_service.global_rows(query.net_energy);
    let view = GlobalView::new(&rows, query.energy_type);
    respond(StatusCode::OK, &view, accepts_brotli(&headers)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::infrastructure::csv_source::CsvSource;
    use crate::infrastructure::reference_data::embedded;
    use serde_json::Value;

    const CSV: &str = "\
timestamp,experiment_id,duration,emissions,energy_consumed,country_name,country_iso_code,region,on_cloud,cloud_provider,cloud_region
2021-04-04T08:00:00,X,10.0,0.5,1.0,Canada,CAN,quebec,Y,gcp,northamerica-northeast1
2021-04-04T09:00:00,X,12.0,1.0,2.0,Canada,CAN,quebec,Y,gcp,northamerica-northeast1
";

    fn state() -> Arc<AppState> {
        let reference = Arc::new(embedded().unwrap());
        let source = Arc::new(CsvSource::from_reader(CSV.as_bytes()).unwrap());
        Arc::new(AppState {
            dashboard_service: DashboardService::new(source, reference.clone()),
            reference,
        })
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn energy(energy_type: EnergyType) -> Query<EnergyTypeQuery> {
        Query(EnergyTypeQuery { energy_type })
    }

    #[tokio::test]
    async fn test_list_experiments() {
        let response = list_experiments(HeaderMap::new(), State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([{"id": "X", "name": "X"}]));
    }

    #[tokio::test]
    async fn test_experiment_dashboard() {
        let response = experiment_dashboard(
            Path("X".to_string()),
            energy(EnergyType::Coal),
            HeaderMap::new(),
            State(state()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["labels"]["net_power_consumption"], "3.0 kWh");
        assert_eq!(body["labels"]["net_carbon_equivalent"], "1.5 kg");
        assert_eq!(body["labels"]["last_run_carbon_equivalent"], "1 kg");
        assert_eq!(body["labels"]["experiment_infrastructure_location"], "quebec, Canada");
        assert_eq!(body["show_regional"], true);
        assert_eq!(body["regional"]["country_name"], "Canada");
        assert_eq!(body["show_cloud"], true);
        assert_eq!(body["cloud"]["provider_name"], "Google Cloud Platform");
    }

    #[tokio::test]
    async fn test_unknown_experiment_is_unprocessable() {
        let response = experiment_dashboard(
            Path("nope".to_string()),
            energy(EnergyType::Coal),
            HeaderMap::new(),
            State(state()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["error"], "Invalid experiment id: nope");
    }

    #[tokio::test]
    async fn test_blank_experiment_is_no_content() {
        let response = experiment_dashboard(
            Path(" ".to_string()),
            energy(EnergyType::Coal),
            HeaderMap::new(),
            State(state()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_energy_type_failures_reach_the_error_alert() {
        let start = DASHBOARD_JS.find("async function changeEnergyType").unwrap();
        let end = start + DASHBOARD_JS[start..].find("function bindTabs").unwrap();
        let handler = &DASHBOARD_JS[start..end];
        assert!(handler.contains("try {"));
        assert!(handler.contains("catch (err)"));
        assert!(handler.contains("showError(err.message)"));
    }

    #[tokio::test]
    async fn test_global_comparison() {
        let query = Query(GlobalQuery { net_energy: 2.0, energy_type: EnergyType::Petroleum });
        let response = global_comparison(query, HeaderMap::new(), State(state())).await;
        let body = json_body(response).await;
        assert_eq!(
            body["energy_mix"]["data"][0]["colorbar"]["title"]["text"],
            "Petroleum Energy (%)"
        );
    }
}
