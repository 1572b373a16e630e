//! Organization models

use serde::{Deserialize, Serialize};

/// Organization resource as returned by `/api/v2/orgs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: String,

    /// Organization name
    pub name: String,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `GET /api/v2/orgs`.
///
/// A server that has not been set up yet may omit `orgs` entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrgsResponse {
    #[serde(default)]
    pub orgs: Vec<Organization>,
}

/// Body of `POST /api/v2/orgs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrgRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Body of `PATCH /api/v2/orgs/{org_id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateOrgRequest {
    pub description: Option<String>,
}

/// Body of `POST /api/v2/orgs/{org_id}/members`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddMemberRequest {
    pub name: String,
    pub id: String,
}
