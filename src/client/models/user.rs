//! User and membership models

use serde::{Deserialize, Serialize};

/// User resource as returned by `/api/v2/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,

    /// Login name
    pub name: String,

    /// Account status (active, inactive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `GET /api/v2/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Organization member as returned by `/api/v2/orgs/{org_id}/members`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceMember {
    /// User ID
    pub id: String,

    /// Login name
    pub name: String,

    /// Membership role (member, owner)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Body of `GET /api/v2/orgs/{org_id}/members`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MembersResponse {
    #[serde(default)]
    pub users: Vec<ResourceMember>,
}
