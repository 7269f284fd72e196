use std::path::{Path, PathBuf};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, ConfigFile};

/// Environment variable overriding the API base URL
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Desktop client configuration.
///
/// Resolution order: `API_BASE_URL`, then the user config file, then defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
    source_file: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration from the environment and the default config file
    pub fn load() -> Result<Self, ConfigError> {
        let env_url = std::env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        let file = Self::default_config_path().filter(|p| p.is_file());
        Self::from_sources(env_url, file.as_deref())
    }

    pub fn from_sources(env_url: Option<String>, file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();
        if let Some(url) = env_url {
            builder = builder.api_base_url(url);
        }
        if let Some(path) = file {
            tracing::info!("[CONFIG] Reading {}", path.display());
            builder = builder.merge_file(ConfigFile::load(path)?);
        }
        let app = builder.build()?;
        Ok(Self {
            app,
            source_file: file.map(Path::to_path_buf),
        })
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
            source_file: None,
        })
    }

    /// `<config dir>/sitedesk/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sitedesk").join("config.toml"))
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn api_base_url(&self) -> &str {
        &self.app.api_base_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        self.app.api_url(path)
    }

    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }
}
