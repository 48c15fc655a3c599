use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_API_HOST: &str = "http://api.codecarbon.io";
pub const DEFAULT_PROJECT_ID: &str = "225904ca-f741-477c-83f5-d61587d6286c";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub dashboard: DashboardSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub user: String,
    pub password: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    /// Project whose experiments fill the dropdown when no CSV is given
    pub project_id: String,
    /// Canada provinces GeoJSON with full geometry, replacing the embedded one
    #[serde(default)]
    pub canada_geojson: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
}

/// Defaults, then `config/carbonboard.*` if present, then `CARBONBOARD__*` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    build_app_config(Some("config/carbonboard"))
}

fn build_app_config(file: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut builder = config::Config::builder()
        .set_default("api.host", DEFAULT_API_HOST)?
        .set_default("api.user", "")?
        .set_default("api.password", "")?
        .set_default("api.timeout_secs", 30)?
        .set_default("dashboard.project_id", DEFAULT_PROJECT_ID)?
        .set_default("server.host", "127.0.0.1")?;

    if let Some(file) = file {
        builder = builder.add_source(config::File::with_name(file).required(false));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("CARBONBOARD")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
