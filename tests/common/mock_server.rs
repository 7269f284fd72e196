//! Mock backend helpers for integration tests
//!
//! Wraps a `wiremock` server that answers under `/api`, the same prefix the
//! real backend uses.

use std::time::Duration;

use sitedesk::egui_app::api::ApiClient;
use sitedesk::egui_app::{AuthApi, Config};
use sitedesk::shared::AppConfig;
use wiremock::MockServer;

/// Address where nothing listens; requests fail without a response
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9/api";

/// Mock backend plus the base URL clients should use
pub struct MockBackend {
    pub server: MockServer,
    pub base_url: String,
}

impl MockBackend {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = format!("{}/api", server.uri());
        Self { server, base_url }
    }

    pub fn config(&self) -> Config {
        config_for(&self.base_url)
    }

    pub fn api(&self) -> AuthApi {
        api_for(&self.base_url)
    }
}

pub fn config_for(base_url: &str) -> Config {
    let builder = AppConfig::builder()
        .api_base_url(base_url)
        .request_timeout(Duration::from_secs(5));
    Config::with_builder(builder).expect("valid test config")
}

pub fn api_for(base_url: &str) -> AuthApi {
    let config = config_for(base_url);
    AuthApi::new(ApiClient::new(config.app()).expect("http client"))
}
