//! HTTP client wrapper
//!
//! Thin layer over `reqwest` that sends JSON to the configured API base URL
//! and folds every outcome into an [`ApiResponse`]. Nothing here returns
//! `Err`; callers branch on the envelope instead.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::response::{ApiError, ApiResponse, ErrorBody, FailureKind};
use crate::shared::config::{AppConfig, ConfigError};

/// Per-call extras on top of the default headers
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub bearer: Option<String>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `Authorization: Bearer <token>`
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// JSON API client bound to one base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Perform one call and normalize whatever comes back
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.api_url(path);
        tracing::debug!("[API] {} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(ref token) = options.bearer {
            request = request.bearer_auth(token);
        }
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("[API] {} {} failed without a response: {}", method, url, e);
                return ApiResponse::transport_failure(e.to_string());
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("[API] {} {} body could not be read: {}", method, url, e);
                let message = e.to_string();
                return ApiResponse::failure(
                    status.as_u16(),
                    message.clone(),
                    ApiError::transport(message),
                );
            }
        };

        let normalized = normalize(status, &text);
        if normalized.is_success() {
            tracing::debug!("[API] {} {} -> {}", method, url, status);
        } else {
            tracing::info!("[API] {} {} -> {} ({})", method, url, status, normalized.message);
        }
        normalized
    }

    pub async fn get<T>(&self, path: &str, options: RequestOptions) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, path, None, options).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B, options: RequestOptions) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body), options).await
    }
}

/// Turn a received status and body into the envelope
pub(crate) fn normalize<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResponse<T> {
    let code = status.as_u16();

    if !status.is_success() {
        let message = format!("Request failed with status code {}", code);
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let error = ApiError {
            message: parsed
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| message.clone()),
            field_errors: parsed.errors,
            kind: FailureKind::Status,
        };
        return ApiResponse::failure(code, message, error);
    }

    // Empty bodies (204, bare logout) decode as JSON null
    let source = if body.trim().is_empty() { "null" } else { body };
    match serde_json::from_str::<T>(source) {
        Ok(data) => ApiResponse::success(data, code, status.canonical_reason().unwrap_or_default()),
        Err(e) => {
            let message = format!("Failed to parse response: {}", e);
            ApiResponse::failure(code, message.clone(), ApiError::decode(message))
        }
    }
}
