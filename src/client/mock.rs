//! Mock InfluxDB API client for testing
//!
//! Provides a mock implementation of [`InfluxApi`] for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::api::InfluxApi;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure canned GET bodies and failures via builder methods, then
/// inspect the captured requests.
///
/// # Example
/// ```ignore
/// let mock = MockInfluxClient::new()
///     .with_orgs(json!([{ "id": "o1", "name": "acme" }]))
///     .await;
///
/// let orgs = mock.list_orgs().await?;
/// assert_eq!(orgs.len(), 1);
/// ```
#[derive(Default)]
pub struct MockInfluxClient {
    /// Bodies returned for GET requests, keyed by path
    responses: Arc<Mutex<HashMap<String, Value>>>,
    /// Failures keyed by (method, path); consumed on first use
    failures: Arc<Mutex<HashMap<(String, String), ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// HTTP method (GET, POST, PATCH, DELETE)
    pub method: String,
    /// Request path
    pub path: String,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl CapturedRequest {
    /// Whether this request mutates server state
    pub fn is_mutation(&self) -> bool {
        self.method != "GET"
    }
}

impl MockInfluxClient {
    /// Create a new mock client with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the body returned for `GET path`.
    pub async fn with_response(self, path: &str, body: Value) -> Self {
        self.responses.lock().await.insert(path.to_string(), body);
        self
    }

    /// Configure the organizations returned from `/api/v2/orgs`.
    pub async fn with_orgs(self, orgs: Value) -> Self {
        self.with_response("/api/v2/orgs", json!({ "orgs": orgs }))
            .await
    }

    /// Configure the members returned for one organization.
    pub async fn with_members(self, org_id: &str, users: Value) -> Self {
        let path = format!("/api/v2/orgs/{}/members", org_id);
        self.with_response(&path, json!({ "users": users })).await
    }

    /// Configure the users returned from `/api/v2/users`.
    pub async fn with_users(self, users: Value) -> Self {
        self.with_response("/api/v2/users", json!({ "users": users }))
            .await
    }

    /// Configure an error for the next `method path` call.
    pub async fn with_failure(self, method: &str, path: &str, error: ApiError) -> Self {
        self.failures
            .lock()
            .await
            .insert((method.to_string(), path.to_string()), error);
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Get captured requests that changed server state.
    pub async fn mutations(&self) -> Vec<CapturedRequest> {
        self.captured_requests()
            .await
            .into_iter()
            .filter(CapturedRequest::is_mutation)
            .collect()
    }

    /// Record the request, then return a configured failure if one matches.
    async fn record(&self, method: &str, path: &str, body: Option<&Value>) -> Result<()> {
        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            path: path.to_string(),
            body: body.cloned(),
        });

        let mut failures = self.failures.lock().await;
        if let Some(err) = failures.remove(&(method.to_string(), path.to_string())) {
            return Err(err.into());
        }
        Ok(())
    }
}

#[async_trait]
impl InfluxApi for MockInfluxClient {
    async fn get(&self, path: &str) -> Result<Value> {
        self.record("GET", path, None).await?;

        let responses = self.responses.lock().await;
        responses
            .get(path)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(path.to_string()).into())
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.record("POST", path, Some(body)).await?;
        Ok(Value::Null)
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.record("PATCH", path, Some(body)).await?;
        Ok(Value::Null)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.record("DELETE", path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::OrgApi;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_returns_configured_orgs() {
        let mock = MockInfluxClient::new()
            .with_orgs(json!([{ "id": "o1", "name": "acme" }]))
            .await;

        let orgs = mock.list_orgs().await.unwrap();
        assert_eq!(orgs.len(), 1);
        assert_eq!(orgs[0].id, "o1");
    }

    #[tokio::test]
    async fn test_mock_unconfigured_get_is_not_found() {
        let mock = MockInfluxClient::new();
        match mock.list_users().await {
            Err(Error::Api(ApiError::NotFound(path))) => assert_eq!(path, "/api/v2/users"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_failure_is_consumed() {
        let mock = MockInfluxClient::new()
            .with_failure("PATCH", "/api/v2/orgs/o1", ApiError::Forbidden)
            .await;

        let body = json!({ "description": "x" });
        assert!(mock.patch("/api/v2/orgs/o1", &body).await.is_err());
        assert!(mock.patch("/api/v2/orgs/o1", &body).await.is_ok());
        assert_eq!(mock.mutations().await.len(), 2);
    }
}
