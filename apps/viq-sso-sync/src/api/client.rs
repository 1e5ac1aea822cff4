//! HTTP client wrapper for the ExtremeCloud IQ API

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::logging::global_logger;
use crate::models::ApiErrorBody;

/// API client for one workflow run.
///
/// The bearer token obtained by [`ApiClient::authenticate`] lives in this
/// value only; starting a new workflow means building a new client.
pub struct ApiClient {
    client: Client,
    config: Config,
    token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

/// Status and raw body of a completed request
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// Only a plain 200 counts as success for this API
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> CliResult<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| CliError::Network(format!("Unexpected response body: {e}")))
    }

    /// The server's `error_message`, falling back to the raw body
    pub fn error_detail(&self) -> String {
        serde_json::from_str::<ApiErrorBody>(&self.body)
            .ok()
            .and_then(|b| b.error_message)
            .unwrap_or_else(|| self.body.trim().to_string())
    }

    /// Convert a non-200 response into an API error
    pub fn into_error(self) -> CliError {
        CliError::Api {
            status: self.status.as_u16(),
            message: self.error_detail(),
        }
    }
}

impl ApiClient {
    /// Create a new, unauthenticated API client
    pub fn new(config: Config) -> CliResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            token: None,
        })
    }

    /// Get a reference to the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Make an authenticated GET request
    pub async fn get_authenticated(&self, url: &str) -> CliResult<ApiResponse> {
        let token = self.token.as_deref().ok_or(CliError::NotAuthenticated)?;
        let request = self.client.get(url).bearer_auth(token);
        self.send(Method::GET, url, request, None).await
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> CliResult<ApiResponse> {
        let token = self.token.as_deref().ok_or(CliError::NotAuthenticated)?;
        let payload = serde_json::to_string(body)?;
        let request = self.client.post(url).bearer_auth(token).body(payload.clone());
        self.send(Method::POST, url, request, Some(payload)).await
    }

    /// Make an unauthenticated POST request with JSON body
    pub async fn post_json_unauthenticated<T: Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> CliResult<ApiResponse> {
        let payload = serde_json::to_string(body)?;
        let request = self.client.post(url).body(payload.clone());
        self.send(Method::POST, url, request, Some(payload)).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        request: reqwest::RequestBuilder,
        payload: Option<String>,
    ) -> CliResult<ApiResponse> {
        let logger = global_logger();
        if let Some(logger) = logger {
            logger.http_request(method.as_str(), url, payload.as_deref());
        }

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if let Some(logger) = logger {
            let elapsed = started.elapsed().as_millis() as u64;
            logger.http_response(status.as_u16(), elapsed, Some(&body));
        }

        Ok(ApiResponse { status, body })
    }
}
