use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::{info, warn};
use url::Url;

use eventia_domain::{LocationLookup, RuntimeConfig};

pub const DEFAULT_BASE_URL: &str = "https://eventiabackendproject10.vercel.app";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub request_timeout_seconds: Option<u64>,
    pub location_lookup: LocationLookup,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            request_timeout_seconds: None,
            location_lookup: LocationLookup::Path,
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    /// The path that was looked up and not found.
    Defaults(String),
}

/// Config plus where it came from. Loading happens before the log subscriber
/// exists, so the source is reported afterwards through `log_source`.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    pub fn log_source(&self) {
        match &self.source {
            ConfigSource::File(path) => info!(path = %path, "config file read"),
            ConfigSource::Defaults(path) => warn!("{} not found, using defaults", path),
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<LoadedConfig> {
        let path = env::var("EVENTIA_CONFIG").unwrap_or_else(|_| "./eventia.toml".to_string());
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &str) -> Result<LoadedConfig> {
        let file_path = Path::new(path);
        let base_dir = file_path.parent();
        let (mut config, source) = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            let config: AppConfig = toml::from_str(&content)?;
            (config, ConfigSource::File(path.to_string()))
        } else {
            (AppConfig::default(), ConfigSource::Defaults(path.to_string()))
        };
        config.apply_env_overrides()?;
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(LoadedConfig { config, source })
    }

    pub fn normalize(&mut self) {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if let Some(token) = &self.api_token {
            if token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(log_dir) = &self.log_dir {
            if log_dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if let Some(log_dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, log_dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|err| anyhow!("invalid base_url: {}", err))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!("base_url must be http or https, got '{}'", url.scheme()));
        }
        if self.request_timeout_seconds == Some(0) {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            base_url: self.base_url.clone(),
            api_token: self.api_token.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
            location_lookup: self.location_lookup,
            log_dir: self.log_dir.clone(),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = env::var("EVENTIA_BASE_URL") {
            self.base_url = value;
        }
        if let Ok(value) = env::var("EVENTIA_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("EVENTIA_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().ok().or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("EVENTIA_LOCATION_LOOKUP") {
            self.location_lookup = value.parse()?;
        }
        if let Ok(value) = env::var("EVENTIA_LOG_DIR") {
            self.log_dir = Some(value);
        }
        Ok(())
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
