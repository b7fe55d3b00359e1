use crate::connectors::ConnectorConfig;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    /// Built frontend bundle; API-only when unset or missing on disk
    pub frontend_dir: Option<String>,
    pub rate_limit: RateLimitSettings,
    pub connectors: ConnectorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_host: "127.0.0.1".to_string(),
            app_port: 3001,
            frontend_dir: None,
            rate_limit: RateLimitSettings::default(),
            connectors: ConnectorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    pub window_ms: u64,
    pub max_requests: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            window_ms: 900_000,
            max_requests: 10,
        }
    }
}

impl RateLimitSettings {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

impl Settings {
    /// Legacy variable names take precedence over file and APP__ values.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(port) = var("PORT").and_then(|v| v.parse().ok()) {
            self.app_port = port;
        }
        if let Some(window_ms) = var("RATE_LIMIT_WINDOW_MS").and_then(|v| v.parse().ok()) {
            self.rate_limit.window_ms = window_ms;
        }
        if let Some(max) = var("RATE_LIMIT_MAX_REQUESTS").and_then(|v| v.parse().ok()) {
            self.rate_limit.max_requests = max;
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // `configuration.yaml` (or .json/.toml) is optional, APP__SECTION__KEY overrides it
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;
    config.apply_env(|name| std::env::var(name).ok());

    Ok(config)
}
