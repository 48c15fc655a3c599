// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::domain::reference::ReferenceData;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub reference: Arc<ReferenceData>,
}
