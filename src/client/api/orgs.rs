//! Organization API trait
//!
//! Typed wrappers over the raw verbs for the endpoints the reconciler uses:
//! - List organizations, their members, and users
//! - Create organizations and update their description
//! - Add and remove organization members

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::InfluxApi;
use crate::client::models::{
    AddMemberRequest, CreateOrgRequest, MembersResponse, Organization, OrgsResponse,
    ResourceMember, UpdateOrgRequest, User, UsersResponse,
};
use crate::error::{ApiError, Result};

pub(crate) const ORGS_PATH: &str = "/api/v2/orgs";
pub(crate) const USERS_PATH: &str = "/api/v2/users";

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse {} response: {}", what, e)).into()
    })
}

/// Organization and membership operations
#[async_trait]
pub trait OrgApi: InfluxApi {
    /// List all organizations visible to the token
    async fn list_orgs(&self) -> Result<Vec<Organization>> {
        let value = self.get(ORGS_PATH).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        let response: OrgsResponse = decode(value, "organization list")?;
        Ok(response.orgs)
    }

    /// List the members of one organization
    async fn list_org_members(&self, org_id: &str) -> Result<Vec<ResourceMember>> {
        let path = format!("{}/{}/members", ORGS_PATH, org_id);
        let value = self.get(&path).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        let response: MembersResponse = decode(value, "member list")?;
        Ok(response.users)
    }

    /// List all users
    async fn list_users(&self) -> Result<Vec<User>> {
        let value = self.get(USERS_PATH).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        let response: UsersResponse = decode(value, "user list")?;
        Ok(response.users)
    }

    /// Create an organization. Membership is never set here.
    async fn create_org(&self, request: &CreateOrgRequest) -> Result<()> {
        let body = serde_json::to_value(request)?;
        self.post(ORGS_PATH, &body).await?;
        Ok(())
    }

    /// Replace an organization's description
    async fn update_org(&self, org_id: &str, request: &UpdateOrgRequest) -> Result<()> {
        let path = format!("{}/{}", ORGS_PATH, org_id);
        let body = serde_json::to_value(request)?;
        self.patch(&path, &body).await?;
        Ok(())
    }

    /// Add a user to an organization
    async fn add_org_member(&self, org_id: &str, request: &AddMemberRequest) -> Result<()> {
        let path = format!("{}/{}/members", ORGS_PATH, org_id);
        let body = serde_json::to_value(request)?;
        self.post(&path, &body).await?;
        Ok(())
    }

    /// Remove a user from an organization
    async fn remove_org_member(&self, org_id: &str, user_id: &str) -> Result<()> {
        let path = format!("{}/{}/members/{}", ORGS_PATH, org_id, user_id);
        self.delete(&path).await
    }
}

#[async_trait]
impl<T: InfluxApi + ?Sized> OrgApi for T {}
