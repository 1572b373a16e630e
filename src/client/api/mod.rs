//! API trait definitions split by responsibility
//!
//! - [`InfluxApi`] - Raw JSON verbs against the InfluxDB HTTP API
//! - [`OrgApi`] - Typed organization, membership and user operations,
//!   available on every [`InfluxApi`] implementation

mod orgs;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use orgs::OrgApi;

/// JSON transport for the InfluxDB v2 HTTP API.
///
/// `path` is always relative to the server root (e.g. `/api/v2/orgs`).
/// Implementations return the decoded response body, or `Value::Null`
/// when the server sends none.
#[async_trait]
pub trait InfluxApi: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value>;

    async fn post(&self, path: &str, body: &Value) -> Result<Value>;

    async fn patch(&self, path: &str, body: &Value) -> Result<Value>;

    async fn delete(&self, path: &str) -> Result<()>;
}
