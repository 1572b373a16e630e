//! InfluxDB HTTP API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::InfluxApi;
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Request timeout applied to every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by InfluxDB (`{"code": "...", "message": "..."}`)
#[derive(Debug, Deserialize)]
struct InfluxErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Pull a readable message out of an error response body
fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<InfluxErrorBody>(body) {
        match (parsed.code, parsed.message) {
            (_, Some(message)) if !message.is_empty() => return message,
            (Some(code), _) if !code.is_empty() => return code,
            _ => {}
        }
    }
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body.trim().to_string()
    }
}

/// Authenticated InfluxDB v2 client
pub struct InfluxClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl InfluxClient {
    /// Create a client for the given base URL and API token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.resolve_token()?;
        Self::new(config.base_url(), token)
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and decode the JSON response
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("{} {} -> {}", method, path, status);

        if status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

            if text.trim().is_empty() {
                return Ok(Value::Null);
            }

            let data: Value = serde_json::from_str(&text).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return Ok(data);
        }

        let text = response.text().await.unwrap_or_default();
        let err = match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound(error_message(&text, path)),
            StatusCode::CONFLICT => ApiError::Conflict(error_message(&text, "Conflict")),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(error_message(&text, "Bad request"))
            }
            status if status.is_server_error() => {
                ApiError::ServerError(error_message(&text, &format!("Server error: {}", status)))
            }
            _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
        };
        Err(err.into())
    }
}

#[async_trait]
impl InfluxApi for InfluxClient {
    async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }
}
