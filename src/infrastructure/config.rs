use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub influx: InfluxSettings,
    pub server: ServerSettings,
    pub refresh: RefreshSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InfluxSettings {
    pub host: String,
    pub token: String,
    pub database: String,
    pub retention_policy: String,
    pub measurement: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub interval_secs: u64,
}

impl InfluxSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Defaults, then `config/dashboard.{toml,...}` if present, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build_config(config::File::with_name("config/dashboard").required(false))
}

fn build_config<S>(file: S) -> anyhow::Result<DashboardConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("influx.host", "http://localhost:8086")?
        .set_default("influx.token", "")?
        .set_default("influx.database", "Temp_data")?
        .set_default("influx.retention_policy", "autogen")?
        .set_default("influx.measurement", "Sensor_Data")?
        .set_default("influx.timeout_secs", 8)?
        .set_default("server.port", 8060)?
        .set_default("refresh.interval_secs", 10)?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: DashboardConfig = settings.try_deserialize()?;
    if config.refresh.interval_secs == 0 {
        anyhow::bail!("refresh.interval_secs must be greater than zero");
    }
    if config.influx.timeout_secs == 0 {
        anyhow::bail!("influx.timeout_secs must be greater than zero");
    }
    Ok(config)
}
